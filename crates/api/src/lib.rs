//! HTTP API server for the trip map service.
//!
//! Provides REST endpoints for trips and their markers, with structured
//! logging (tracing) and Prometheus metrics.

pub mod config;
pub mod error;
pub mod routes;
pub mod validation;

use std::path::Path;
use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use trip_store::TripStore;

use routes::trips::AppState;

/// Creates the Axum application router with all routes and shared state.
///
/// When `static_dir` is given, paths that match no route are served from
/// that directory.
pub fn create_app<S: TripStore + 'static>(
    state: Arc<AppState<S>>,
    metrics_handle: PrometheusHandle,
    static_dir: Option<&Path>,
) -> Router {
    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::get))
        .with_state(metrics_handle);

    let mut router = Router::new()
        .route("/health", get(routes::health::check))
        .route(
            "/api/trips",
            get(routes::trips::list::<S>).post(routes::trips::create::<S>),
        )
        .route(
            "/api/trips/{id}",
            get(routes::trips::get::<S>)
                .put(routes::trips::update::<S>)
                .delete(routes::trips::delete::<S>),
        )
        .with_state(state)
        .merge(metrics_router);

    if let Some(dir) = static_dir {
        router = router.fallback_service(ServeDir::new(dir));
    }

    router
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

/// Creates the application state around a trip store.
pub fn create_default_state<S: TripStore + 'static>(store: S) -> Arc<AppState<S>> {
    Arc::new(AppState::new(store))
}
