//! Shared identifier types for the trip map service.

pub mod types;

pub use types::{MarkerId, TripId};
