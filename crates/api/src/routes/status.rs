//! Report endpoint status contract.
//!
//! The dashboard probes the report endpoint cross-origin, so these handlers
//! set the CORS headers themselves instead of relying on middleware:
//! tower-http only emits allow-methods/allow-headers on real preflights,
//! while this contract requires the full header triple on every method.

use axum::Json;
use axum::http::{HeaderName, HeaderValue, StatusCode, header};
use axum::response::IntoResponse;
use chrono::{SecondsFormat, Utc};
use serde::Serialize;

/// The three CORS headers attached to every status response.
fn cors_headers() -> [(HeaderName, HeaderValue); 3] {
    [
        (
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ),
        (
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static("GET, POST, OPTIONS"),
        ),
        (
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static("Content-Type"),
        ),
    ]
}

#[derive(Serialize)]
pub struct StatusResponse {
    pub message: &'static str,
    pub timestamp: String,
}

/// GET/POST on the report endpoint — liveness payload with a fresh
/// UTC timestamp. Reads no input and cannot fail.
pub async fn report_status() -> impl IntoResponse {
    metrics::counter!("report_status_requests_total").increment(1);
    let payload = StatusResponse {
        message: "PDF endpoint is working",
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    };
    (StatusCode::OK, cors_headers(), Json(payload))
}

/// OPTIONS on the report endpoint — CORS preflight, empty body.
pub async fn preflight() -> impl IntoResponse {
    (StatusCode::OK, cors_headers())
}

#[derive(Serialize)]
pub struct ServiceInfo {
    pub message: &'static str,
    pub version: &'static str,
}

/// GET /api — service name and version.
pub async fn service_info() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        message: "Crisis Call Coordinator API",
        version: env!("CARGO_PKG_VERSION"),
    })
}
