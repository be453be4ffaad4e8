use crate::err::{AppliesTo, IoErrorExt};
use std::io;
use tokio::net::{self, TcpListener, TcpStream};

/// Bind the first address `addr` resolves to that accepts a listener.
pub async fn bind(addr: &str) -> Result<TcpListener, io::Error> {
    let mut last_error = None;
    for addr in net::lookup_host(addr).await? {
        match TcpListener::bind(addr).await {
            Ok(listener) => return Ok(listener),
            Err(e) => {
                log::debug!("Failed to bind {}: {}", addr, e);
                last_error = Some(e);
            }
        }
    }
    Err(last_error.unwrap_or_else(|| {
        io::Error::new(
            io::ErrorKind::AddrNotAvailable,
            "Resolved to zero addresses",
        )
    }))
}

pub async fn accept(listener: &TcpListener) -> Result<TcpStream, io::Error> {
    loop {
        match listener.accept().await {
            Ok((stream, _addr)) => {
                stream.set_nodelay(true)?;
                return Ok(stream);
            }
            Err(e) => match e.applies_to() {
                AppliesTo::Connection => log::debug!("Aborted connection dropped: {}", e),
                AppliesTo::Listener => return Err(e),
            },
        }
    }
}
