//! Trip CRUD endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use chrono::NaiveDate;
use common::TripId;
use domain::{CreateTrip, MarkerSpec, TripService, TripView, UpdateTrip};
use serde::Deserialize;
use trip_store::TripStore;

use crate::error::ApiError;
use crate::validation::{FieldError, FieldErrors};

/// Shared application state accessible from all handlers.
pub struct AppState<S: TripStore> {
    pub trip_service: TripService<S>,
}

impl<S: TripStore> AppState<S> {
    pub fn new(store: S) -> Self {
        Self {
            trip_service: TripService::new(store),
        }
    }
}

// -- Request types --

/// Body of `POST /api/trips` and `PUT /api/trips/{id}`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripRequest {
    pub name: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    /// Absent and `null` both mean no markers.
    pub markers: Option<Vec<MarkerRequest>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub time: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub day: Option<i32>,
}

/// A request body whose required fields are all present.
#[derive(Debug)]
pub struct ValidTrip {
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub markers: Vec<MarkerSpec>,
}

impl TripRequest {
    /// Checks required fields, reporting every missing one at once.
    ///
    /// Date ordering is a trip rule and is left to the service.
    pub fn validate(self) -> Result<ValidTrip, Vec<FieldError>> {
        let mut errors = FieldErrors::new();

        let name = errors.require_non_blank(self.name, "name", "Trip name is required");
        let start_date = errors.require(self.start_date, "startDate", "Start date is required");
        let end_date = errors.require(self.end_date, "endDate", "End date is required");

        let markers: Vec<Option<MarkerSpec>> = self
            .markers
            .unwrap_or_default()
            .into_iter()
            .enumerate()
            .map(|(i, marker)| marker.validate(i, &mut errors))
            .collect();

        let result = errors.finish();

        match (name, start_date, end_date) {
            (Some(name), Some(start_date), Some(end_date)) => result.map(|()| ValidTrip {
                name,
                start_date,
                end_date,
                markers: markers.into_iter().flatten().collect(),
            }),
            _ => Err(result.err().unwrap_or_default()),
        }
    }
}

impl MarkerRequest {
    fn validate(self, index: usize, errors: &mut FieldErrors) -> Option<MarkerSpec> {
        let field = |name: &str| format!("markers[{index}].{name}");

        let name = errors.require_non_blank(self.name, &field("name"), "Location name is required");
        let latitude = errors.require(self.latitude, &field("latitude"), "Latitude is required");
        let longitude = errors.require(self.longitude, &field("longitude"), "Longitude is required");
        let day = errors.require(self.day, &field("day"), "Day number is required");

        Some(MarkerSpec::new(
            name?,
            self.description,
            self.time,
            latitude?,
            longitude?,
            day?,
        ))
    }
}

// -- Handlers --

/// POST /api/trips: creates a trip with its markers.
#[tracing::instrument(skip(state, body))]
pub async fn create<S: TripStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    body: Result<Json<TripRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<TripView>), ApiError> {
    let trip = read_body(body)?;

    let view = state
        .trip_service
        .create(CreateTrip::new(
            trip.name,
            trip.start_date,
            trip.end_date,
            trip.markers,
        ))
        .await?;

    Ok((StatusCode::CREATED, Json(view)))
}

/// GET /api/trips: lists all trips, newest first.
#[tracing::instrument(skip(state))]
pub async fn list<S: TripStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
) -> Result<Json<Vec<TripView>>, ApiError> {
    let trips = state.trip_service.list().await?;
    Ok(Json(trips))
}

/// GET /api/trips/{id}: returns one trip.
#[tracing::instrument(skip(state))]
pub async fn get<S: TripStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    Path(id): Path<String>,
) -> Result<Json<TripView>, ApiError> {
    let trip_id = parse_trip_id(&id)?;
    let view = state.trip_service.get(trip_id).await?;
    Ok(Json(view))
}

/// PUT /api/trips/{id}: overwrites a trip and replaces all of its markers.
#[tracing::instrument(skip(state, body))]
pub async fn update<S: TripStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    Path(id): Path<String>,
    body: Result<Json<TripRequest>, JsonRejection>,
) -> Result<Json<TripView>, ApiError> {
    let trip_id = parse_trip_id(&id)?;
    let trip = read_body(body)?;

    let view = state
        .trip_service
        .update(UpdateTrip::new(
            trip_id,
            trip.name,
            trip.start_date,
            trip.end_date,
            trip.markers,
        ))
        .await?;

    Ok(Json(view))
}

/// DELETE /api/trips/{id}: deletes a trip and its markers.
#[tracing::instrument(skip(state))]
pub async fn delete<S: TripStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let trip_id = parse_trip_id(&id)?;
    state.trip_service.delete(trip_id).await?;
    Ok(StatusCode::OK)
}

// -- Helpers --

fn parse_trip_id(id: &str) -> Result<TripId, ApiError> {
    id.parse::<i64>()
        .map(TripId::new)
        .map_err(|_| ApiError::BadRequest(format!("Invalid trip ID: {id}")))
}

fn read_body(body: Result<Json<TripRequest>, JsonRejection>) -> Result<ValidTrip, ApiError> {
    let Json(request) = body.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
    Ok(request.validate()?)
}
