use async_trait::async_trait;

use crate::{NewTrip, Result, TripId, TripRecord, TripUpdate};

/// Core trait for trip store implementations.
///
/// A trip store persists trip aggregates: a trip row plus the markers it owns.
/// Markers have no access path of their own; they are written only as part of
/// [`insert`](TripStore::insert) and [`replace`](TripStore::replace) and removed
/// with their trip.
///
/// Every write is atomic: either all of a trip's and its markers' changes are
/// applied or none are. No locking spans calls, so concurrent writers to the
/// same trip resolve as last writer wins.
#[async_trait]
pub trait TripStore: Send + Sync {
    /// Inserts a new trip together with its markers.
    ///
    /// Identities for the trip and every marker are assigned by the store.
    async fn insert(&self, trip: NewTrip) -> Result<TripRecord>;

    /// Fetches a trip with its markers ordered by `(day, time)`.
    ///
    /// Returns None if the trip doesn't exist.
    async fn find(&self, id: TripId) -> Result<Option<TripRecord>>;

    /// Overwrites a trip's name and dates and replaces its marker collection.
    ///
    /// All existing markers are deleted and the new ones inserted with fresh
    /// identities. Fails with `TripNotFound` if the trip doesn't exist.
    async fn replace(&self, id: TripId, update: TripUpdate) -> Result<TripRecord>;

    /// Deletes a trip and all of its markers.
    ///
    /// Returns whether a trip was removed.
    async fn delete(&self, id: TripId) -> Result<bool>;

    /// Lists every trip, newest `created_at` first.
    async fn list(&self) -> Result<Vec<TripRecord>>;
}
