use thiserror::Error;

use crate::parser::ParseError;

/// Result type for jcst operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types surfaced by the jcst library
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl Error {
    /// Create a configuration error
    pub fn config_error(message: impl Into<String>) -> Self {
        Self::Config { message: message.into() }
    }

    /// The underlying parse failure, if this is one
    pub fn as_parse_error(&self) -> Option<&ParseError> {
        match self {
            Error::Parse(err) => Some(err),
            _ => None,
        }
    }
}
