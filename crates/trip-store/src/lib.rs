pub mod error;
pub mod memory;
pub mod postgres;
pub mod record;
pub mod store;

pub use common::{MarkerId, TripId};
pub use error::{Result, StoreError};
pub use memory::InMemoryTripStore;
pub use postgres::PostgresTripStore;
pub use record::{MarkerRecord, NewMarker, NewTrip, TripRecord, TripUpdate};
pub use store::TripStore;
