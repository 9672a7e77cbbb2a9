use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// `initialize` was handed no sink.
    #[error("a sink is required to initialize the logger")]
    InvalidSink,
    /// `Severity::Unknown` passed where an operating level is required.
    #[error("log level `UNKNOWN` is invalid")]
    InvalidLevel,
    #[error("invalid logger configuration: {0}")]
    InvalidConfiguration(String),
    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
