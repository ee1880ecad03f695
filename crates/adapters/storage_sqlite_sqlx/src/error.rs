//! Storage-specific error type wrapping sqlx errors.

use registrar_domain::error::{RegistrarError, ValidationError};

/// Errors originating from the `SQLite` storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// A query or connection failed.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A stored document could not be encoded or decoded.
    #[error("document error: {0}")]
    Json(#[from] serde_json::Error),

    /// The record breaks a domain invariant and was not written.
    #[error("invalid record: {0}")]
    Invalid(#[from] ValidationError),

    /// Failed to run migrations.
    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

impl From<StorageError> for RegistrarError {
    fn from(err: StorageError) -> Self {
        Self::storage(err)
    }
}
