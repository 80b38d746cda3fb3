// Admin statistics handlers: weekly heatmap, anomaly history, history reset, live activity.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

use super::AppState;
use crate::error::ApiError;
use crate::models::{AnomalyEntry, WeeklyStats};
use crate::stats::{self, activity, anomaly};

/// GET /api/admin/stats/{week_delta} — heatmap for the week `week_delta` weeks ago.
pub(super) async fn get_stats(
    State(state): State<AppState>,
    Path(week_delta): Path<i64>,
) -> Result<Json<WeeklyStats>, ApiError> {
    if week_delta != 0 {
        tracing::debug!("Asking statistics for {} weeks ago", week_delta);
    } else {
        tracing::debug!("Asking statistics for current week");
    }
    let now = state.clock.now();
    let weekly = stats::weekly_stats(&state.history_repo, now, week_delta).await?;
    Ok(Json(weekly))
}

/// DELETE /api/admin/stats — drop every hourly aggregate.
pub(super) async fn delete_stats(
    State(state): State<AppState>,
) -> Result<Json<Vec<serde_json::Value>>, ApiError> {
    tracing::info!("Received statistic history delete command");
    let removed = state.history_repo.delete_all_aggregates().await?;
    tracing::info!(removed, "Week statistics removal completed");
    Ok(Json(Vec::new()))
}

#[derive(Debug, Deserialize)]
pub(super) struct AnomalyQuery {
    limit: Option<u32>,
}

/// GET /api/admin/anomalies?limit=N — most recent anomalies, newest first.
pub(super) async fn get_anomalies(
    State(state): State<AppState>,
    Query(query): Query<AnomalyQuery>,
) -> Result<Json<Vec<AnomalyEntry>>, ApiError> {
    let limit = query
        .limit
        .unwrap_or(state.config.statistics.anomaly_history_limit);
    let snapshots = state.history_repo.fetch_recent_anomalies(limit).await?;
    Ok(Json(anomaly::expand_history(snapshots)))
}

/// DELETE /api/admin/anomalies — drop every anomaly snapshot.
pub(super) async fn delete_anomalies(
    State(state): State<AppState>,
) -> Result<Json<Vec<serde_json::Value>>, ApiError> {
    tracing::info!("Received anomalies history delete command");
    let removed = state.history_repo.delete_all_anomalies().await?;
    tracing::info!(removed, "Anomalies collection removal completed");
    Ok(Json(Vec::new()))
}

/// GET /api/admin/activities/{kind} — `summary` (counts per event) or `details` (raw events).
pub(super) async fn get_activities(
    State(state): State<AppState>,
    Path(kind): Path<String>,
) -> Result<Json<activity::ActivityReport>, ApiError> {
    let kind: activity::ActivityKind = kind.parse().map_err(ApiError::BadRequest)?;
    Ok(Json(activity::report(
        kind,
        state.recent_events.as_ref(),
        &state.config.activity.monitored_events,
    )))
}
