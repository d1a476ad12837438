//! Dashboard analytics endpoint.

use std::collections::BTreeMap;
use std::sync::Arc;

use analytics::dashboard_analytics;
use axum::Json;
use axum::extract::State;
use serde::Serialize;

use crate::routes::calls::AppState;

/// Wire format for the dashboard. The risk distribution is keyed by score
/// as a string (`"0"`..`"5"`), which is what the frontend consumes.
#[derive(Serialize)]
pub struct AnalyticsResponse {
    pub total_calls: usize,
    pub risk_distribution: BTreeMap<String, u32>,
    pub avg_response_time: f64,
}

/// GET /api/analytics — headline numbers over the whole catalog.
#[tracing::instrument(skip(state))]
pub async fn dashboard(State(state): State<Arc<AppState>>) -> Json<AnalyticsResponse> {
    let analytics = dashboard_analytics(state.directory.all());

    let risk_distribution = analytics
        .risk_distribution
        .counts()
        .iter()
        .enumerate()
        .map(|(score, &count)| (score.to_string(), count))
        .collect();

    Json(AnalyticsResponse {
        total_calls: analytics.total_calls,
        risk_distribution,
        avg_response_time: analytics.avg_response_time,
    })
}
