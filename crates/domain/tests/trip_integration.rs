//! Integration tests for the trip aggregate.
//!
//! These tests exercise the trip service end to end against the in-memory
//! store: validation, marker ordering, replace-on-update, deletion and listing.

use chrono::NaiveDate;
use common::{MarkerId, TripId};
use domain::{CreateTrip, DomainError, MarkerSpec, TripError, TripService, UpdateTrip};
use trip_store::{InMemoryTripStore, NewTrip, TripStore};

/// Helper to create a test trip service
fn create_service() -> TripService<InMemoryTripStore> {
    TripService::new(InMemoryTripStore::new())
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn tokyo() -> MarkerSpec {
    MarkerSpec::new("Tokyo", None, Some("09:00".to_string()), 35.68, 139.69, 1)
}

fn kyoto() -> MarkerSpec {
    MarkerSpec::new(
        "Kyoto",
        Some("Fushimi Inari".to_string()),
        Some("08:00".to_string()),
        35.01,
        135.77,
        1,
    )
}

fn japan(markers: Vec<MarkerSpec>) -> CreateTrip {
    CreateTrip::new("Japan", date(2024, 4, 1), date(2024, 4, 10), markers)
}

mod creation {
    use super::*;

    #[tokio::test]
    async fn returned_trip_matches_request() {
        let service = create_service();

        let trip = service.create(japan(vec![tokyo(), kyoto()])).await.unwrap();

        assert_eq!(trip.name, "Japan");
        assert_eq!(trip.start_date, date(2024, 4, 1));
        assert_eq!(trip.end_date, date(2024, 4, 10));
        assert_eq!(trip.markers.len(), 2);

        let stored = service.get(trip.id).await.unwrap();
        assert_eq!(stored, trip);
    }

    #[tokio::test]
    async fn inverted_dates_persist_nothing() {
        let service = create_service();

        let result = service
            .create(CreateTrip::new(
                "Backwards",
                date(2024, 4, 10),
                date(2024, 4, 9),
                vec![tokyo()],
            ))
            .await;

        assert!(matches!(result, Err(DomainError::Validation(_))));
        assert!(service.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn markers_ordered_by_day_then_time() {
        let service = create_service();

        let trip = service
            .create(japan(vec![
                MarkerSpec::new("Osaka", None, Some("07:00".into()), 34.69, 135.50, 2),
                tokyo(),
                kyoto(),
            ]))
            .await
            .unwrap();

        let names: Vec<&str> = trip.markers.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Kyoto", "Tokyo", "Osaka"]);

        let fetched = service.get(trip.id).await.unwrap();
        let names: Vec<&str> = fetched.markers.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Kyoto", "Tokyo", "Osaka"]);
    }

    #[tokio::test]
    async fn marker_fields_survive_round_trip() {
        let service = create_service();

        let trip = service.create(japan(vec![kyoto()])).await.unwrap();
        let marker = &service.get(trip.id).await.unwrap().markers[0];

        assert_eq!(marker.name, "Kyoto");
        assert_eq!(marker.description.as_deref(), Some("Fushimi Inari"));
        assert_eq!(marker.time.as_deref(), Some("08:00"));
        assert_eq!(marker.latitude, 35.01);
        assert_eq!(marker.longitude, 135.77);
        assert_eq!(marker.day, 1);
    }

    #[tokio::test]
    async fn day_outside_trip_span_is_accepted() {
        let service = create_service();

        let trip = service
            .create(japan(vec![MarkerSpec::new("Later", None, None, 0.0, 0.0, 99)]))
            .await
            .unwrap();

        assert_eq!(trip.markers[0].day, 99);
    }
}

mod replace_on_update {
    use super::*;

    #[tokio::test]
    async fn update_replaces_markers_wholesale() {
        let service = create_service();
        let created = service.create(japan(vec![tokyo(), kyoto()])).await.unwrap();
        let tokyo_before = created
            .markers
            .iter()
            .find(|m| m.name == "Tokyo")
            .unwrap()
            .clone();

        service
            .update(UpdateTrip::new(
                created.id,
                "Japan",
                date(2024, 4, 1),
                date(2024, 4, 10),
                vec![tokyo()],
            ))
            .await
            .unwrap();

        let fetched = service.get(created.id).await.unwrap();
        assert_eq!(fetched.markers.len(), 1);

        let marker = &fetched.markers[0];
        assert_eq!(marker.name, "Tokyo");
        assert_eq!(marker.time.as_deref(), Some("09:00"));
        assert_eq!(marker.latitude, tokyo_before.latitude);
        assert_ne!(marker.id, tokyo_before.id);

        let old_ids: Vec<MarkerId> = created.markers.iter().map(|m| m.id).collect();
        assert!(!old_ids.contains(&marker.id));
    }

    #[tokio::test]
    async fn identical_markers_still_get_new_identities() {
        let service = create_service();
        let created = service.create(japan(vec![tokyo()])).await.unwrap();

        let updated = service
            .update(UpdateTrip::new(
                created.id,
                "Japan",
                date(2024, 4, 1),
                date(2024, 4, 10),
                vec![tokyo()],
            ))
            .await
            .unwrap();

        assert_eq!(updated.markers.len(), 1);
        assert_ne!(updated.markers[0].id, created.markers[0].id);
    }

    #[tokio::test]
    async fn update_with_no_markers_clears_collection() {
        let service = create_service();
        let created = service.create(japan(vec![tokyo(), kyoto()])).await.unwrap();

        let updated = service
            .update(UpdateTrip::new(
                created.id,
                "Japan",
                date(2024, 4, 1),
                date(2024, 4, 10),
                vec![],
            ))
            .await
            .unwrap();

        assert!(updated.markers.is_empty());
        assert_eq!(service.store().marker_count().await, 0);
    }

    #[tokio::test]
    async fn invalid_update_leaves_trip_unchanged() {
        let service = create_service();
        let created = service.create(japan(vec![tokyo(), kyoto()])).await.unwrap();

        let result = service
            .update(UpdateTrip::new(
                created.id,
                "Japan",
                date(2024, 4, 1),
                date(2024, 3, 1),
                vec![],
            ))
            .await;

        assert!(matches!(
            result,
            Err(DomainError::Validation(TripError::InvalidDateRange { .. }))
        ));

        let fetched = service.get(created.id).await.unwrap();
        assert_eq!(fetched, created);
        let names: Vec<&str> = fetched.markers.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Kyoto", "Tokyo"]);
    }

    #[tokio::test]
    async fn update_leaves_other_trips_alone() {
        let service = create_service();
        let first = service.create(japan(vec![tokyo()])).await.unwrap();
        let second = service.create(japan(vec![kyoto()])).await.unwrap();

        service
            .update(UpdateTrip::new(
                first.id,
                "Changed",
                date(2024, 5, 1),
                date(2024, 5, 2),
                vec![],
            ))
            .await
            .unwrap();

        assert_eq!(service.get(second.id).await.unwrap(), second);
    }
}

mod deletion {
    use super::*;

    #[tokio::test]
    async fn deleted_trip_is_gone() {
        let service = create_service();
        let created = service.create(japan(vec![tokyo()])).await.unwrap();

        service.delete(created.id).await.unwrap();

        assert!(matches!(
            service.get(created.id).await,
            Err(DomainError::TripNotFound(id)) if id == created.id
        ));
        assert!(matches!(
            service.delete(created.id).await,
            Err(DomainError::TripNotFound(_))
        ));
    }

    #[tokio::test]
    async fn update_after_delete_is_not_found() {
        let service = create_service();
        let created = service.create(japan(vec![])).await.unwrap();
        service.delete(created.id).await.unwrap();

        let result = service
            .update(UpdateTrip::new(
                created.id,
                "Revived",
                date(2024, 4, 1),
                date(2024, 4, 2),
                vec![],
            ))
            .await;

        assert!(matches!(result, Err(DomainError::TripNotFound(_))));
    }
}

mod listing {
    use super::*;

    #[tokio::test]
    async fn later_trips_come_first() {
        let service = create_service();
        let y = service.create(japan(vec![])).await.unwrap();
        let x = service
            .create(CreateTrip::new("Italy", date(2024, 6, 1), date(2024, 6, 7), vec![]))
            .await
            .unwrap();

        let ids: Vec<TripId> = service.list().await.unwrap().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![x.id, y.id]);
    }

    #[tokio::test]
    async fn list_orders_by_creation_date_descending() {
        let store = InMemoryTripStore::new();
        for (name, created_at) in [
            ("Middle", date(2023, 6, 1)),
            ("Newest", date(2024, 1, 1)),
            ("Oldest", date(2022, 1, 1)),
        ] {
            store
                .insert(NewTrip {
                    name: name.to_string(),
                    start_date: created_at,
                    end_date: created_at,
                    created_at,
                    markers: vec![],
                })
                .await
                .unwrap();
        }
        let service = TripService::new(store);

        let names: Vec<String> = service
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|t| t.name)
            .collect();
        assert_eq!(names, vec!["Newest", "Middle", "Oldest"]);
    }

    #[tokio::test]
    async fn listed_trips_carry_ordered_markers() {
        let service = create_service();
        service.create(japan(vec![tokyo(), kyoto()])).await.unwrap();

        let trips = service.list().await.unwrap();
        let names: Vec<&str> = trips[0].markers.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Kyoto", "Tokyo"]);
    }

    #[tokio::test]
    async fn list_reflects_deletions() {
        let service = create_service();
        let kept = service.create(japan(vec![])).await.unwrap();
        let removed = service.create(japan(vec![])).await.unwrap();

        service.delete(removed.id).await.unwrap();

        let ids: Vec<TripId> = service.list().await.unwrap().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![kept.id]);
    }
}
