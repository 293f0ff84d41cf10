use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{
    MarkerId, MarkerRecord, NewMarker, NewTrip, Result, StoreError, TripId, TripRecord,
    TripUpdate,
    record::{marker_order, trip_order},
    store::TripStore,
};

#[derive(Default)]
struct State {
    last_trip_id: i64,
    last_marker_id: i64,
    trips: BTreeMap<TripId, TripRecord>,
}

impl State {
    fn next_trip_id(&mut self) -> TripId {
        self.last_trip_id += 1;
        TripId::new(self.last_trip_id)
    }

    fn attach_markers(&mut self, trip_id: TripId, markers: Vec<NewMarker>) -> Vec<MarkerRecord> {
        let mut records: Vec<MarkerRecord> = markers
            .into_iter()
            .map(|marker| {
                self.last_marker_id += 1;
                marker.into_record(MarkerId::new(self.last_marker_id), trip_id)
            })
            .collect();
        records.sort_by(marker_order);
        records
    }
}

/// In-memory trip store implementation for testing and local runs.
///
/// This implementation keeps all trips in memory and provides the same
/// interface as the PostgreSQL implementation. Each write holds the write lock
/// for its whole duration, which makes it atomic with respect to other calls.
#[derive(Clone, Default)]
pub struct InMemoryTripStore {
    state: Arc<RwLock<State>>,
}

impl InMemoryTripStore {
    /// Creates a new empty in-memory trip store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored trips.
    pub async fn trip_count(&self) -> usize {
        self.state.read().await.trips.len()
    }

    /// Returns the number of stored markers across all trips.
    pub async fn marker_count(&self) -> usize {
        self.state
            .read()
            .await
            .trips
            .values()
            .map(|trip| trip.markers.len())
            .sum()
    }
}

#[async_trait]
impl TripStore for InMemoryTripStore {
    async fn insert(&self, trip: NewTrip) -> Result<TripRecord> {
        let mut state = self.state.write().await;

        let id = state.next_trip_id();
        let markers = state.attach_markers(id, trip.markers);
        let record = TripRecord {
            id,
            name: trip.name,
            start_date: trip.start_date,
            end_date: trip.end_date,
            created_at: trip.created_at,
            markers,
        };

        state.trips.insert(id, record.clone());
        Ok(record)
    }

    async fn find(&self, id: TripId) -> Result<Option<TripRecord>> {
        let state = self.state.read().await;
        Ok(state.trips.get(&id).cloned())
    }

    async fn replace(&self, id: TripId, update: TripUpdate) -> Result<TripRecord> {
        let mut state = self.state.write().await;

        if !state.trips.contains_key(&id) {
            return Err(StoreError::TripNotFound(id));
        }

        let markers = state.attach_markers(id, update.markers);
        let trip = state
            .trips
            .get_mut(&id)
            .ok_or(StoreError::TripNotFound(id))?;

        trip.name = update.name;
        trip.start_date = update.start_date;
        trip.end_date = update.end_date;
        trip.markers = markers;

        Ok(trip.clone())
    }

    async fn delete(&self, id: TripId) -> Result<bool> {
        let mut state = self.state.write().await;
        Ok(state.trips.remove(&id).is_some())
    }

    async fn list(&self) -> Result<Vec<TripRecord>> {
        let state = self.state.read().await;
        let mut trips: Vec<TripRecord> = state.trips.values().cloned().collect();
        trips.sort_by(trip_order);
        Ok(trips)
    }
}
