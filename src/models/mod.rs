// Domain models: hourly aggregates, heatmap cells, anomalies, recent activity

mod activity;
mod anomaly;
mod heatmap;
mod hourly;

pub use activity::RecentEvent;
pub use anomaly::{AnomalyEntry, AnomalyEvent, AnomalySnapshot};
pub use heatmap::{CellStatus, HeatmapCell, WeeklyStats};
pub use hourly::{EventCount, HourlyAggregate};

use chrono::{DateTime, SecondsFormat, Utc};

/// ISO-8601 UTC with microseconds, e.g. `2024-03-06T14:00:00.000000Z`.
pub fn iso8601(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}
