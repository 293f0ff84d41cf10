use thiserror::Error;

use crate::TripId;

/// Errors that can occur when interacting with the trip store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The trip targeted by a write does not exist.
    #[error("Trip not found: {0}")]
    TripNotFound(TripId),

    /// A database error occurred.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A database migration error occurred.
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Result type for trip store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
