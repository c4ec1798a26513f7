//! Error types for cytopipe.

use thiserror::Error;

/// Result type alias for cytopipe operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in cytopipe operations.
#[derive(Error, Debug)]
pub enum Error {
    // Registry errors
    #[error("module not found: {0}")]
    ModuleNotFound(String),

    #[error("module {0} is already registered")]
    ModuleAlreadyRegistered(String),

    #[error("unclosed or mismatched markup tag <{0}> in module help")]
    UnbalancedMarkup(String),

    // Setting errors
    #[error("invalid value {value:?} for setting {setting:?}")]
    InvalidSettingValue { setting: String, value: String },

    #[error("{value:?} is not one of the choices for setting {setting:?}")]
    InvalidChoice { setting: String, value: String },

    #[error("value {value} for setting {setting:?} is outside the allowed range")]
    OutOfRange { setting: String, value: String },

    // Persistence errors
    #[error("module {module} expects {expected} settings, configuration holds {found}")]
    SettingCountMismatch {
        module: String,
        expected: usize,
        found: usize,
    },

    #[error("configuration for module {module} was saved at revision {found}, expected {expected}")]
    RevisionMismatch {
        module: String,
        expected: u32,
        found: u32,
    },

    #[error("unsupported pipeline file version {0}")]
    UnsupportedFileVersion(u32),

    // Serialization errors
    #[error("serialization error: {0}")]
    SerializationError(String),

    // Generic errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::SerializationError(err.to_string())
    }
}
