use serde::{Deserialize, Serialize};

/// Identifier of a persisted trip.
///
/// Trip ids are assigned by the store when the trip is first persisted and
/// never change afterwards. Wrapping the raw integer keeps trip ids from being
/// mixed up with marker ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TripId(i64);

impl TripId {
    /// Wraps a store-assigned identifier.
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw identifier.
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for TripId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for TripId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<TripId> for i64 {
    fn from(id: TripId) -> Self {
        id.0
    }
}

/// Identifier of a persisted marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MarkerId(i64);

impl MarkerId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for MarkerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for MarkerId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}
