//! Crate error type.
//!
//! Only text parsing and configuration loading can fail. The engine
//! itself works on well-formed values and never returns an error.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid time of day '{0}': expected HH:MM with hour 0-23 and minute 0-59")]
    InvalidTime(String),

    #[error("invalid time range '{0}': expected HH:MM-HH:MM")]
    InvalidTimeRange(String),

    #[error("unrecognized weekday token '{0}'")]
    UnknownWeekday(String),

    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to decode configuration: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
