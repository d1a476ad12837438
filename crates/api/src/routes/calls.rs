//! Call catalog endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use common::CallId;
use domain::{CallDirectory, CallRecord};
use serde::Serialize;

use crate::error::ApiError;

/// Shared application state accessible from all handlers.
pub struct AppState {
    pub directory: CallDirectory,
}

#[derive(Serialize)]
pub struct CallsListResponse {
    pub calls: Vec<CallRecord>,
}

/// GET /api/calls — all calls in the catalog.
#[tracing::instrument(skip(state))]
pub async fn list(State(state): State<Arc<AppState>>) -> Json<CallsListResponse> {
    metrics::counter!("call_list_requests_total").increment(1);
    Json(CallsListResponse {
        calls: state.directory.all().to_vec(),
    })
}

/// GET /api/calls/{call_id} — a single call, 404 when unknown.
#[tracing::instrument(skip(state))]
pub async fn get(
    State(state): State<Arc<AppState>>,
    Path(call_id): Path<String>,
) -> Result<Json<CallRecord>, ApiError> {
    let call_id = CallId::new(call_id);
    let call = state
        .directory
        .get(&call_id)
        .ok_or_else(|| ApiError::NotFound("Call not found".to_string()))?;
    Ok(Json(call.clone()))
}
