use thiserror::Error;

use crate::config::{ConfigError, LoggingError};
use crate::errors::{ApiError, RouterError, StorageError};

/// Top-level error for the command-line front end
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Logging(#[from] LoggingError),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Router(#[from] RouterError),

    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid session user document: {0}")]
    InvalidSessionUser(#[source] serde_json::Error),
}
