use crate::domain::roi::UnknownField;
use crate::domain::validation::InputError;
use thiserror::Error;

/// voice_roi error types
#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(#[from] InputError),

    #[error(transparent)]
    UnknownField(#[from] UnknownField),
}

pub type Result<T> = std::result::Result<T, Error>;
