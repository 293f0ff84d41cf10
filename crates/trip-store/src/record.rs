use std::cmp::Ordering;

use chrono::NaiveDate;

use crate::{MarkerId, TripId};

/// A persisted marker row, owned by exactly one trip.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerRecord {
    pub id: MarkerId,
    pub trip_id: TripId,
    pub name: String,
    pub description: Option<String>,
    pub time: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub day: i32,
}

/// A persisted trip together with all of its markers.
///
/// Markers are always ordered by [`marker_order`] when a record leaves the store.
#[derive(Debug, Clone, PartialEq)]
pub struct TripRecord {
    pub id: TripId,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub created_at: NaiveDate,
    pub markers: Vec<MarkerRecord>,
}

/// Marker content to be inserted; the store assigns the id and owning trip.
#[derive(Debug, Clone, PartialEq)]
pub struct NewMarker {
    pub name: String,
    pub description: Option<String>,
    pub time: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub day: i32,
}

impl NewMarker {
    /// Attaches store-assigned identities to the marker content.
    pub fn into_record(self, id: MarkerId, trip_id: TripId) -> MarkerRecord {
        MarkerRecord {
            id,
            trip_id,
            name: self.name,
            description: self.description,
            time: self.time,
            latitude: self.latitude,
            longitude: self.longitude,
            day: self.day,
        }
    }
}

/// A trip aggregate that has not been persisted yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTrip {
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub created_at: NaiveDate,
    pub markers: Vec<NewMarker>,
}

/// Replacement content for an existing trip.
///
/// There is no `created_at` here: the creation date is fixed at insert time.
/// `markers` replaces the whole marker collection.
#[derive(Debug, Clone, PartialEq)]
pub struct TripUpdate {
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub markers: Vec<NewMarker>,
}

/// Presentation order of markers within a trip: `(day, time)` ascending.
///
/// A marker without a time comes first within its day. Remaining ties fall
/// back to the id, i.e. insertion order.
pub fn marker_order(a: &MarkerRecord, b: &MarkerRecord) -> Ordering {
    a.day
        .cmp(&b.day)
        .then_with(|| a.time.cmp(&b.time))
        .then_with(|| a.id.cmp(&b.id))
}

/// Listing order of trips: newest `created_at` first, then highest id first.
pub fn trip_order(a: &TripRecord, b: &TripRecord) -> Ordering {
    b.created_at
        .cmp(&a.created_at)
        .then_with(|| b.id.cmp(&a.id))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn marker(id: i64, day: i32, time: Option<&str>) -> MarkerRecord {
        MarkerRecord {
            id: MarkerId::new(id),
            trip_id: TripId::new(1),
            name: format!("marker-{id}"),
            description: None,
            time: time.map(String::from),
            latitude: 0.0,
            longitude: 0.0,
            day,
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn markers_sort_by_day_then_time() {
        let mut markers = vec![
            marker(1, 2, Some("08:00")),
            marker(2, 1, Some("09:00")),
            marker(3, 1, Some("08:00")),
        ];
        markers.sort_by(marker_order);

        let ids: Vec<i64> = markers.iter().map(|m| m.id.as_i64()).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[test]
    fn marker_without_time_comes_first_in_its_day() {
        let mut markers = vec![marker(1, 1, Some("07:00")), marker(2, 1, None)];
        markers.sort_by(marker_order);
        assert_eq!(markers[0].id, MarkerId::new(2));
    }

    #[test]
    fn equal_day_and_time_keep_insertion_order() {
        let mut markers = vec![marker(5, 1, Some("10:00")), marker(4, 1, Some("10:00"))];
        markers.sort_by(marker_order);
        assert_eq!(markers[0].id, MarkerId::new(4));
    }

    #[test]
    fn trips_sort_newest_first() {
        let trip = |id: i64, created_at: NaiveDate| TripRecord {
            id: TripId::new(id),
            name: "trip".to_string(),
            start_date: created_at,
            end_date: created_at,
            created_at,
            markers: vec![],
        };

        let mut trips = vec![
            trip(1, date(2024, 1, 1)),
            trip(2, date(2024, 3, 1)),
            trip(3, date(2024, 1, 1)),
        ];
        trips.sort_by(trip_order);

        let ids: Vec<i64> = trips.iter().map(|t| t.id.as_i64()).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }
}
