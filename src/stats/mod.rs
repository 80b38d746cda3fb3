// Statistics core: week resolution, heatmap assembly, anomaly expansion, live activity.
// Pure functions over data fetched by history_repo; no state between requests.

pub mod activity;
pub mod anomaly;
pub mod heatmap;
pub mod week;

use chrono::{DateTime, Utc};

use crate::history_repo::HistoryRepo;
use crate::models::WeeklyStats;

/// Failure of a weekly statistics request.
#[derive(Debug, thiserror::Error)]
pub enum StatsError {
    #[error(transparent)]
    Resolve(#[from] week::WeekOutOfRange),
    #[error(transparent)]
    Store(#[from] anyhow::Error),
}

/// Resolve -> fetch -> assemble for the week `week_delta` weeks before `now`.
pub async fn weekly_stats(
    repo: &HistoryRepo,
    now: DateTime<Utc>,
    week_delta: i64,
) -> Result<WeeklyStats, StatsError> {
    let window = week::resolve_week(now, week_delta)?;
    let records = repo
        .fetch_aggregates(window.lower_bound, window.upper_bound)
        .await?;
    tracing::debug!(
        looked_year = window.looked_year,
        looked_week = window.looked_week,
        records = records.len(),
        "assembling weekly heatmap"
    );
    Ok(heatmap::assemble_heatmap(
        &window,
        heatmap::WeekPosition::of(now),
        &records,
    ))
}
