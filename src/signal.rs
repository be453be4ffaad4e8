use std::io;

/// Termination signals, registered up front so none are missed while starting.
pub struct Signals {
    #[cfg(unix)]
    interrupt: tokio::signal::unix::Signal,
    #[cfg(unix)]
    terminate: tokio::signal::unix::Signal,
}

impl Signals {
    #[cfg(unix)]
    pub fn new() -> Result<Self, io::Error> {
        use tokio::signal::unix::{signal, SignalKind};

        Ok(Self {
            interrupt: signal(SignalKind::interrupt())?,
            terminate: signal(SignalKind::terminate())?,
        })
    }

    #[cfg(not(unix))]
    pub fn new() -> Result<Self, io::Error> {
        Ok(Self {})
    }

    /// Wait for SIGINT or SIGTERM, returning the signal's name.
    #[cfg(unix)]
    pub async fn recv(&mut self) -> Result<&'static str, io::Error> {
        tokio::select! {
            _ = self.interrupt.recv() => Ok("interrupt"),
            _ = self.terminate.recv() => Ok("terminated"),
        }
    }

    #[cfg(not(unix))]
    pub async fn recv(&mut self) -> Result<&'static str, io::Error> {
        tokio::signal::ctrl_c().await?;
        Ok("interrupt")
    }
}
