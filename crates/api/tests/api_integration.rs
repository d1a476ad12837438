//! Integration tests for the API server.

use std::sync::OnceLock;

use axum::body::Body;
use axum::http::{Method, Request, Response, StatusCode, header};
use chrono::{DateTime, Duration, Utc};
use metrics_exporter_prometheus::PrometheusHandle;
use tower::ServiceExt;

static METRICS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

fn get_metrics_handle() -> PrometheusHandle {
    METRICS_HANDLE
        .get_or_init(|| {
            let builder = metrics_exporter_prometheus::PrometheusBuilder::new();
            builder
                .install_recorder()
                .expect("failed to install Prometheus recorder")
        })
        .clone()
}

fn setup() -> axum::Router {
    let state = api::create_default_state();
    api::create_app(state, get_metrics_handle())
}

async fn send(app: axum::Router, method: Method, uri: &str, body: Body) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method(method)
            .uri(uri)
            .body(body)
            .unwrap(),
    )
    .await
    .unwrap()
}

async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

fn cors_header_values(response: &Response<Body>) -> (String, String, String) {
    let get = |name| {
        response
            .headers()
            .get(name)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string()
    };
    (
        get(header::ACCESS_CONTROL_ALLOW_ORIGIN),
        get(header::ACCESS_CONTROL_ALLOW_METHODS),
        get(header::ACCESS_CONTROL_ALLOW_HEADERS),
    )
}

// -- Report status contract --

#[tokio::test]
async fn options_returns_200_with_empty_body_and_cors_headers() {
    let response = send(setup(), Method::OPTIONS, "/", Body::empty()).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        cors_header_values(&response),
        (
            "*".to_string(),
            "GET, POST, OPTIONS".to_string(),
            "Content-Type".to_string(),
        )
    );

    let body = body_bytes(response).await;
    assert!(body.is_empty());
}

#[tokio::test]
async fn get_returns_status_payload() {
    let response = send(setup(), Method::GET, "/", Body::empty()).await;

    assert_eq!(response.status(), StatusCode::OK);

    let json: serde_json::Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(json["message"], "PDF endpoint is working");
    assert!(json["timestamp"].as_str().is_some());
}

#[tokio::test]
async fn post_with_arbitrary_body_matches_get_shape() {
    let response = send(
        setup(),
        Method::POST,
        "/",
        Body::from("not even json, and nobody reads it"),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);

    let json: serde_json::Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(json["message"], "PDF endpoint is working");
    assert!(json["timestamp"].as_str().is_some());
}

#[tokio::test]
async fn timestamp_is_rfc3339_within_the_request_window() {
    let before = Utc::now();
    let response = send(setup(), Method::GET, "/", Body::empty()).await;
    let after = Utc::now();

    let json: serde_json::Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
    let raw = json["timestamp"].as_str().unwrap();
    assert!(raw.ends_with('Z'), "expected UTC Z suffix, got {raw}");

    let timestamp: DateTime<Utc> = DateTime::parse_from_rfc3339(raw).unwrap().into();
    // Serialization truncates to milliseconds, so allow 1ms on the lower bound.
    assert!(timestamp >= before - Duration::milliseconds(1));
    assert!(timestamp <= after);
}

#[tokio::test]
async fn cors_headers_identical_across_all_three_methods() {
    let options = send(setup(), Method::OPTIONS, "/", Body::empty()).await;
    let get = send(setup(), Method::GET, "/", Body::empty()).await;
    let post = send(setup(), Method::POST, "/", Body::empty()).await;

    let expected = cors_header_values(&options);
    assert_eq!(cors_header_values(&get), expected);
    assert_eq!(cors_header_values(&post), expected);
}

#[tokio::test]
async fn pdf_route_serves_the_same_contract() {
    let response = send(setup(), Method::GET, "/api/pdf", Body::empty()).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json: serde_json::Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(json["message"], "PDF endpoint is working");

    let preflight = send(setup(), Method::OPTIONS, "/api/pdf", Body::empty()).await;
    assert_eq!(preflight.status(), StatusCode::OK);
    assert!(body_bytes(preflight).await.is_empty());
}

// -- Call catalog --

#[tokio::test]
async fn service_info_reports_name_and_version() {
    let response = send(setup(), Method::GET, "/api", Body::empty()).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json: serde_json::Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(json["message"], "Crisis Call Coordinator API");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn list_calls_returns_demo_catalog() {
    let response = send(setup(), Method::GET, "/api/calls", Body::empty()).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json: serde_json::Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
    let calls = json["calls"].as_array().unwrap();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0]["call_id"], "CALL-2025-001");
    assert_eq!(calls[1]["call_id"], "CALL-2025-002");
    // Handling metadata keeps its legacy wire name.
    assert_eq!(calls[0]["analytics"]["handled_by"], "Agent Sarah");
}

#[tokio::test]
async fn get_call_by_id() {
    let response = send(setup(), Method::GET, "/api/calls/CALL-2025-002", Body::empty()).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json: serde_json::Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(json["call_id"], "CALL-2025-002");
    assert_eq!(json["risk"]["suicide"]["score"], 4);
}

#[tokio::test]
async fn get_unknown_call_returns_404() {
    let response = send(setup(), Method::GET, "/api/calls/CALL-9999-999", Body::empty()).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json: serde_json::Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(json["error"], "Call not found");
}

// -- Analytics --

#[tokio::test]
async fn analytics_summarizes_the_catalog() {
    let response = send(setup(), Method::GET, "/api/analytics", Body::empty()).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json: serde_json::Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(json["total_calls"], 2);
    assert_eq!(
        json["risk_distribution"],
        serde_json::json!({"0": 0, "1": 1, "2": 0, "3": 0, "4": 1, "5": 0})
    );
    assert_eq!(json["avg_response_time"], 28.5);
}

// -- Observability --

#[tokio::test]
async fn metrics_endpoint_renders_exposition_text() {
    let app = setup();

    // Hit an instrumented route first so at least one counter exists.
    let _ = send(app.clone(), Method::GET, "/", Body::empty()).await;

    let response = send(app, Method::GET, "/metrics", Body::empty()).await;
    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap()
        .to_string();
    assert!(content_type.starts_with("text/plain"));
}
