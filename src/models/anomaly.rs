// Anomaly snapshots (written by the detector) and their transport shape

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnomalySnapshot {
    pub date: DateTime<Utc>,
    pub alarm: i64,
    pub events: BTreeMap<String, i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnomalyEvent {
    #[serde(rename = "type")]
    pub type_: String,
    pub count: i64,
}

/// One element of GET /api/admin/anomalies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnomalyEntry {
    pub date: String,
    pub alarm: i64,
    pub events: Vec<AnomalyEvent>,
}
