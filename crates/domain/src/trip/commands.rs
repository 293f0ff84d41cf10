//! Trip commands.

use chrono::NaiveDate;
use common::TripId;
use trip_store::NewMarker;

/// Content of one marker to be created on a trip.
///
/// Markers are always created through their trip, so a spec carries no
/// identity of its own.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerSpec {
    pub name: String,
    pub description: Option<String>,
    pub time: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub day: i32,
}

impl MarkerSpec {
    /// Creates a marker spec from all of its fields.
    pub fn new(
        name: impl Into<String>,
        description: Option<String>,
        time: Option<String>,
        latitude: f64,
        longitude: f64,
        day: i32,
    ) -> Self {
        Self {
            name: name.into(),
            description,
            time,
            latitude,
            longitude,
            day,
        }
    }
}

impl From<MarkerSpec> for NewMarker {
    fn from(spec: MarkerSpec) -> Self {
        NewMarker {
            name: spec.name,
            description: spec.description,
            time: spec.time,
            latitude: spec.latitude,
            longitude: spec.longitude,
            day: spec.day,
        }
    }
}

/// Command to create a new trip with its initial markers.
#[derive(Debug, Clone)]
pub struct CreateTrip {
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub markers: Vec<MarkerSpec>,
}

impl CreateTrip {
    /// Creates a new CreateTrip command.
    pub fn new(
        name: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
        markers: Vec<MarkerSpec>,
    ) -> Self {
        Self {
            name: name.into(),
            start_date,
            end_date,
            markers,
        }
    }
}

/// Command to overwrite a trip and replace its whole marker collection.
#[derive(Debug, Clone)]
pub struct UpdateTrip {
    pub trip_id: TripId,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub markers: Vec<MarkerSpec>,
}

impl UpdateTrip {
    /// Creates a new UpdateTrip command.
    pub fn new(
        trip_id: TripId,
        name: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
        markers: Vec<MarkerSpec>,
    ) -> Self {
        Self {
            trip_id,
            name: name.into(),
            start_date,
            end_date,
            markers,
        }
    }
}
