//! Response projection of the trip aggregate.

use chrono::NaiveDate;
use common::{MarkerId, TripId};
use serde::{Deserialize, Serialize};

use super::{Marker, Trip};

/// Field-for-field copy of a marker as returned to callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerView {
    pub id: MarkerId,
    pub name: String,
    pub description: Option<String>,
    pub time: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub day: i32,
}

/// Field-for-field copy of a trip and its markers as returned to callers.
///
/// Nothing is renamed, dropped or recomputed; markers keep the `(day, time)`
/// order of the aggregate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripView {
    pub id: TripId,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub created_at: NaiveDate,
    pub markers: Vec<MarkerView>,
}

impl From<&Marker> for MarkerView {
    fn from(marker: &Marker) -> Self {
        Self {
            id: marker.id(),
            name: marker.name().to_owned(),
            description: marker.description().map(str::to_owned),
            time: marker.time().map(str::to_owned),
            latitude: marker.latitude(),
            longitude: marker.longitude(),
            day: marker.day(),
        }
    }
}

impl From<&Trip> for TripView {
    fn from(trip: &Trip) -> Self {
        Self {
            id: trip.id(),
            name: trip.name().to_owned(),
            start_date: trip.start_date(),
            end_date: trip.end_date(),
            created_at: trip.created_at(),
            markers: trip.markers().iter().map(MarkerView::from).collect(),
        }
    }
}

impl From<Trip> for TripView {
    fn from(trip: Trip) -> Self {
        Self::from(&trip)
    }
}
