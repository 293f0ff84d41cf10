//! Trip aggregate and related types.

mod commands;
mod entity;
mod projection;
mod service;

pub use commands::{CreateTrip, MarkerSpec, UpdateTrip};
pub use entity::{DateRange, Marker, Trip};
pub use projection::{MarkerView, TripView};
pub use service::TripService;

use chrono::NaiveDate;
use thiserror::Error;

/// Rule violations on the trip aggregate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TripError {
    /// The trip would end before it starts.
    #[error("End date cannot be before start date (start {start_date}, end {end_date})")]
    InvalidDateRange {
        start_date: NaiveDate,
        end_date: NaiveDate,
    },
}
