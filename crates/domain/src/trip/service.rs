//! Trip service providing create, read, update, delete and list operations.

use chrono::{NaiveDate, Utc};
use common::TripId;
use trip_store::TripStore;

use crate::error::DomainError;

use super::{CreateTrip, DateRange, Trip, TripView, UpdateTrip};

/// Service for managing trip aggregates.
///
/// Owns the trip rules (currently only the date range), builds aggregates
/// from commands, persists each one with a single store call and projects
/// the stored result into a [`TripView`].
pub struct TripService<S: TripStore> {
    store: S,
}

impl<S: TripStore> TripService<S> {
    /// Creates a new trip service with the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Returns a reference to the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Creates a trip with its initial markers.
    ///
    /// The creation date is today's UTC date.
    #[tracing::instrument(skip(self, cmd), fields(name = %cmd.name, markers = cmd.markers.len()))]
    pub async fn create(&self, cmd: CreateTrip) -> Result<TripView, DomainError> {
        let dates = DateRange::new(cmd.start_date, cmd.end_date)?;
        let new_trip = Trip::create(cmd.name, dates, today(), cmd.markers);

        let record = self.store.insert(new_trip).await?;
        tracing::info!(trip_id = %record.id, "trip created");
        metrics::counter!("trips_created_total").increment(1);

        Ok(TripView::from(Trip::from(record)))
    }

    /// Loads a trip by ID.
    #[tracing::instrument(skip(self))]
    pub async fn get(&self, trip_id: TripId) -> Result<TripView, DomainError> {
        let trip = self.load(trip_id).await?;
        Ok(TripView::from(trip))
    }

    /// Overwrites a trip and replaces its whole marker collection.
    ///
    /// Every existing marker is discarded and new ones are created from the
    /// command, so marker identities never survive an update.
    #[tracing::instrument(skip(self, cmd), fields(trip_id = %cmd.trip_id, markers = cmd.markers.len()))]
    pub async fn update(&self, cmd: UpdateTrip) -> Result<TripView, DomainError> {
        let trip = self.load(cmd.trip_id).await?;
        let dates = DateRange::new(cmd.start_date, cmd.end_date)?;
        let update = Trip::revise(cmd.name, dates, cmd.markers);

        let record = self.store.replace(trip.id(), update).await?;
        tracing::info!(trip_id = %record.id, "trip updated");
        metrics::counter!("trips_updated_total").increment(1);

        Ok(TripView::from(Trip::from(record)))
    }

    /// Deletes a trip together with all of its markers.
    ///
    /// Deleting an unknown (or already deleted) trip fails with `TripNotFound`.
    #[tracing::instrument(skip(self))]
    pub async fn delete(&self, trip_id: TripId) -> Result<(), DomainError> {
        if !self.store.delete(trip_id).await? {
            return Err(DomainError::TripNotFound(trip_id));
        }

        tracing::info!(%trip_id, "trip deleted");
        metrics::counter!("trips_deleted_total").increment(1);
        Ok(())
    }

    /// Lists all trips, most recently created first.
    #[tracing::instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<TripView>, DomainError> {
        let trips = self.store.list().await?;
        Ok(trips
            .into_iter()
            .map(|record| TripView::from(Trip::from(record)))
            .collect())
    }

    async fn load(&self, trip_id: TripId) -> Result<Trip, DomainError> {
        self.store
            .find(trip_id)
            .await?
            .map(Trip::from)
            .ok_or(DomainError::TripNotFound(trip_id))
    }
}

fn today() -> NaiveDate {
    Utc::now().date_naive()
}
