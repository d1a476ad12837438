//! HTTP API server for crisis hotline call analysis and reporting.
//!
//! Serves the call catalog and dashboard analytics, plus the report
//! endpoint status contract the frontend probes before requesting reports,
//! with structured logging (tracing) and Prometheus metrics.

pub mod config;
pub mod demo;
pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use domain::CallDirectory;
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use routes::calls::AppState;
use routes::status::{preflight, report_status};

/// Creates the Axum application router with all routes and shared state.
///
/// The report status routes sit outside the catalog's `CorsLayer`: they set
/// their CORS headers explicitly, and layering would duplicate the wildcard
/// origin header.
pub fn create_app(state: Arc<AppState>, metrics_handle: PrometheusHandle) -> Router {
    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::render))
        .with_state(metrics_handle);

    let catalog_router = Router::new()
        .route("/api", get(routes::status::service_info))
        .route("/api/calls", get(routes::calls::list))
        .route("/api/calls/{call_id}", get(routes::calls::get))
        .route("/api/analytics", get(routes::analytics::dashboard))
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );

    Router::new()
        .route(
            "/",
            get(report_status).post(report_status).options(preflight),
        )
        .route(
            "/api/pdf",
            get(report_status).post(report_status).options(preflight),
        )
        .merge(catalog_router)
        .merge(metrics_router)
        .layer(TraceLayer::new_for_http())
}

/// Creates the default application state over the demo call catalog.
///
/// Fixture risk scores are validated on the way in; a violation is a bug in
/// the fixtures, so it is logged rather than fatal.
pub fn create_default_state() -> Arc<AppState> {
    let calls = demo::demo_calls();
    for call in &calls {
        for error in call.risk.validation_errors() {
            tracing::warn!(call_id = %call.call_id, %error, "demo call failed risk validation");
        }
    }

    Arc::new(AppState {
        directory: CallDirectory::new(calls),
    })
}
