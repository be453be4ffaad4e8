use std::fmt::{self, Debug, Display};
use std::io;

use http::header::InvalidHeaderValue;

pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("missing environment $REDIRECT_TARGET")]
    MissingTarget,
    #[error("invalid redirect target {target:?}: {source}")]
    InvalidTarget {
        target: String,
        #[source]
        source: InvalidHeaderValue,
    },
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: io::Error,
    },
    #[error("listener failed: {0}")]
    Accept(#[source] io::Error),
    #[error("failed to handle termination signal: {0}")]
    Signal(#[source] io::Error),
}

pub struct DisplayError(BoxError);

impl Debug for DisplayError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl<T: Into<BoxError>> From<T> for DisplayError {
    fn from(display: T) -> Self {
        DisplayError(display.into())
    }
}

pub trait IoErrorExt {
    fn applies_to(&self) -> AppliesTo;
}

impl IoErrorExt for io::Error {
    fn applies_to(&self) -> AppliesTo {
        match self.kind() {
            io::ErrorKind::ConnectionRefused
            | io::ErrorKind::ConnectionAborted
            | io::ErrorKind::ConnectionReset => AppliesTo::Connection,
            _ => AppliesTo::Listener,
        }
    }
}

pub enum AppliesTo {
    Connection,
    Listener,
}
