use crate::err::Error;
use crate::opt::Settings;
use crate::redir::hex_escape_non_ascii;
use http::HeaderValue;
use std::borrow::Cow;

pub const DEFAULT_LISTEN: &str = ":80";

/// Immutable settings for the lifetime of the server.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub listen: String,
    pub target: String,
    pub prefix: String,
    pub permanent: bool,
    pub verbose: bool,
}

impl Config {
    pub fn resolve(settings: Settings) -> Result<Self, Error> {
        let Settings {
            listen,
            target,
            prefix,
            permanent,
            verbose,
        } = settings;

        let listen = match listen.trim() {
            "" => DEFAULT_LISTEN.to_string(),
            listen => listen.to_string(),
        };

        let target = match target.trim() {
            "" => return Err(Error::MissingTarget),
            target => target.to_string(),
        };
        if let Err(source) = HeaderValue::from_str(&hex_escape_non_ascii(&target)) {
            return Err(Error::InvalidTarget { target, source });
        }

        Ok(Self {
            listen,
            target,
            prefix: prefix.trim().to_string(),
            permanent: parse_bool(&permanent),
            verbose: parse_bool(&verbose),
        })
    }

    /// The listen address in a form the system resolver accepts.
    pub fn bind_addr(&self) -> Cow<'_, str> {
        match self.listen.strip_prefix(':') {
            Some(port) => Cow::Owned(format!("0.0.0.0:{}", port)),
            None => Cow::Borrowed(&self.listen),
        }
    }
}

/// Anything unrecognized is false.
pub fn parse_bool(value: &str) -> bool {
    matches!(value.trim(), "1" | "t" | "T" | "TRUE" | "true" | "True")
}
