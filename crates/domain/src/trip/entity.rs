//! Trip aggregate root and its marker entities.

use chrono::NaiveDate;
use common::{MarkerId, TripId};
use trip_store::{MarkerRecord, NewTrip, TripRecord, TripUpdate};

use super::{MarkerSpec, TripError};

/// Inclusive span of calendar dates with `end >= start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Creates a date range, rejecting an end date before the start date.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, TripError> {
        if end < start {
            return Err(TripError::InvalidDateRange {
                start_date: start,
                end_date: end,
            });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }
}

/// A geolocated stop on a trip.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    id: MarkerId,
    name: String,
    description: Option<String>,
    time: Option<String>,
    latitude: f64,
    longitude: f64,
    day: i32,
}

impl Marker {
    pub fn id(&self) -> MarkerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Free-form time label, e.g. `"09:00"`. Not interpreted as a clock value.
    pub fn time(&self) -> Option<&str> {
        self.time.as_deref()
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Day of the trip this marker belongs to.
    pub fn day(&self) -> i32 {
        self.day
    }
}

impl From<MarkerRecord> for Marker {
    fn from(record: MarkerRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            description: record.description,
            time: record.time,
            latitude: record.latitude,
            longitude: record.longitude,
            day: record.day,
        }
    }
}

/// A persisted trip: the aggregate root owning its markers.
///
/// Markers are only ever created through [`Trip::create`] or
/// [`Trip::revise`]; there is no way to add, change or remove a single marker.
#[derive(Debug, Clone, PartialEq)]
pub struct Trip {
    id: TripId,
    name: String,
    dates: DateRange,
    created_at: NaiveDate,
    markers: Vec<Marker>,
}

impl Trip {
    /// Builds a new, not yet persisted trip aggregate.
    pub fn create(
        name: String,
        dates: DateRange,
        created_at: NaiveDate,
        markers: Vec<MarkerSpec>,
    ) -> NewTrip {
        NewTrip {
            name,
            start_date: dates.start(),
            end_date: dates.end(),
            created_at,
            markers: markers.into_iter().map(Into::into).collect(),
        }
    }

    /// Builds the replacement for an existing trip.
    ///
    /// Name and dates are overwritten and the marker collection is replaced
    /// as a whole, even when the new markers match the current ones. The
    /// creation date is not part of the replacement.
    pub fn revise(name: String, dates: DateRange, markers: Vec<MarkerSpec>) -> TripUpdate {
        TripUpdate {
            name,
            start_date: dates.start(),
            end_date: dates.end(),
            markers: markers.into_iter().map(Into::into).collect(),
        }
    }

    pub fn id(&self) -> TripId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn dates(&self) -> DateRange {
        self.dates
    }

    pub fn start_date(&self) -> NaiveDate {
        self.dates.start()
    }

    pub fn end_date(&self) -> NaiveDate {
        self.dates.end()
    }

    pub fn created_at(&self) -> NaiveDate {
        self.created_at
    }

    /// Markers ordered by `(day, time)`.
    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }
}

impl From<TripRecord> for Trip {
    /// Trusts the store: every stored trip went through [`DateRange::new`].
    fn from(record: TripRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            dates: DateRange {
                start: record.start_date,
                end: record.end_date,
            },
            created_at: record.created_at,
            markers: record.markers.into_iter().map(Marker::from).collect(),
        }
    }
}
