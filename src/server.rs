use crate::config::Config;
use crate::err::Error;
use crate::http::serve_until;
use crate::routes::{respond_to_request, State};
use crate::signal::Signals;
use crate::tcp;
use hyper::body::Incoming;
use std::future::Future;
use std::io;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::time;

/// How long to keep serving after a termination signal before draining.
pub const GRACE_PERIOD: Duration = Duration::from_secs(3);

pub async fn run(config: Config) -> Result<(), Error> {
    let listener = tcp::bind(&config.bind_addr())
        .await
        .map_err(|source| Error::Bind {
            addr: config.listen.clone(),
            source,
        })?;
    match listener.local_addr() {
        Ok(addr) => log::info!("listening at: {}", addr),
        Err(_) => log::info!("listening at: {}", config.listen),
    }

    let mut signals = Signals::new().map_err(Error::Signal)?;

    serve(listener, &config, after_grace(signals.recv(), GRACE_PERIOD)).await
}

pub async fn serve(
    listener: TcpListener,
    config: &Config,
    shutdown: impl Future<Output = Result<(), Error>>,
) -> Result<(), Error> {
    serve_until(
        listener,
        State::new(config),
        respond_to_request::<Incoming>,
        shutdown,
    )
    .await
}

async fn after_grace(
    signal: impl Future<Output = Result<&'static str, io::Error>>,
    grace: Duration,
) -> Result<(), Error> {
    let name = signal.await.map_err(Error::Signal)?;
    log::info!("signal caught: {}", name);
    time::sleep(grace).await;
    Ok(())
}
