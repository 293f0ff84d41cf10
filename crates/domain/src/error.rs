//! Domain error types.

use common::TripId;
use thiserror::Error;
use trip_store::StoreError;

use crate::trip::TripError;

/// Errors that can occur during domain operations.
///
/// Callers distinguish three kinds: [`Validation`](DomainError::Validation)
/// for broken trip rules, [`TripNotFound`](DomainError::TripNotFound) for an
/// unknown id, and [`Store`](DomainError::Store) for anything unexpected.
#[derive(Debug, Error)]
pub enum DomainError {
    /// A trip rule was violated.
    #[error(transparent)]
    Validation(#[from] TripError),

    /// The referenced trip does not exist.
    #[error("Trip not found: {0}")]
    TripNotFound(TripId),

    /// An error occurred in the trip store.
    #[error("Trip store error: {0}")]
    Store(StoreError),
}

impl From<StoreError> for DomainError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::TripNotFound(id) => DomainError::TripNotFound(id),
            other => DomainError::Store(other),
        }
    }
}
