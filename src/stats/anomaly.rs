// Anomaly snapshot -> transport entry

use crate::models::{AnomalyEntry, AnomalyEvent, AnomalySnapshot, iso8601};

/// Expands the event mapping into `{type, count}` pairs, sorted by type name.
pub fn expand_anomaly(snapshot: AnomalySnapshot) -> AnomalyEntry {
    AnomalyEntry {
        date: iso8601(&snapshot.date),
        alarm: snapshot.alarm,
        events: snapshot
            .events
            .into_iter()
            .map(|(type_, count)| AnomalyEvent { type_, count })
            .collect(),
    }
}

/// Keeps input order (the repo returns newest first).
pub fn expand_history(snapshots: Vec<AnomalySnapshot>) -> Vec<AnomalyEntry> {
    snapshots.into_iter().map(expand_anomaly).collect()
}
