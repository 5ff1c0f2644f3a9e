//! Storage layer errors

use thiserror::Error;

/// Errors from storing or removing images
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Object storage error: {0}")]
    ObjectStore(String),

    #[error("Invalid image reference: {0}")]
    InvalidReference(String),
}
