//! Storage-specific error type wrapping filesystem and JSON errors.

use domo_domain::error::DomoError;

/// Errors originating from the JSON storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// A filesystem read or write failed.
    #[error("filesystem error")]
    Io(#[from] std::io::Error),

    /// Failed to serialize or deserialize a stored layout.
    #[error("JSON serialization error")]
    Json(#[from] serde_json::Error),
}

impl From<StorageError> for DomoError {
    fn from(err: StorageError) -> Self {
        Self::Storage(Box::new(err))
    }
}
