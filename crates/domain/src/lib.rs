//! Domain layer for the trip map service.
//!
//! This crate provides the trip aggregate and the operations on it:
//! - [`Trip`] and [`Marker`] entities with their invariants
//! - [`CreateTrip`] / [`UpdateTrip`] commands carrying [`MarkerSpec`]s
//! - [`TripService`] for create, get, update (replace-on-update), delete and list
//! - [`TripView`] projection returned to callers

pub mod error;
pub mod trip;

pub use error::DomainError;
pub use trip::{
    CreateTrip, DateRange, Marker, MarkerSpec, MarkerView, Trip, TripError, TripService,
    TripView, UpdateTrip,
};
