// Heatmap cells and the weekly statistics payload

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::HourlyAggregate;

/// Provenance of a heatmap cell; serialized as the integer `valid` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "i8", try_from = "i8")]
pub enum CellStatus {
    /// Built from a stored hourly aggregate.
    Valid,
    /// Hour has elapsed but nothing was recorded.
    Missing,
    /// Hour lies in the future.
    Future,
    /// Hour is the one currently in progress.
    InProgress,
}

impl From<CellStatus> for i8 {
    fn from(s: CellStatus) -> i8 {
        match s {
            CellStatus::Valid => 0,
            CellStatus::Missing => -1,
            CellStatus::Future => -2,
            CellStatus::InProgress => -3,
        }
    }
}

impl TryFrom<i8> for CellStatus {
    type Error = String;

    fn try_from(v: i8) -> Result<Self, Self::Error> {
        match v {
            0 => Ok(CellStatus::Valid),
            -1 => Ok(CellStatus::Missing),
            -2 => Ok(CellStatus::Future),
            -3 => Ok(CellStatus::InProgress),
            other => Err(format!("invalid heatmap cell marker {}", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeatmapCell {
    pub hour: u32,
    pub day: u32,
    pub summary: BTreeMap<String, i64>,
    pub free_disk_space: i64,
    pub valid: CellStatus,
}

impl HeatmapCell {
    pub fn real(day: u32, hour: u32, agg: &HourlyAggregate) -> Self {
        Self {
            hour,
            day,
            summary: agg.summary.clone(),
            free_disk_space: agg.free_disk_space,
            valid: CellStatus::Valid,
        }
    }

    pub fn synthetic(day: u32, hour: u32, status: CellStatus) -> Self {
        Self {
            hour,
            day,
            summary: BTreeMap::new(),
            free_disk_space: 0,
            valid: status,
        }
    }
}

/// Response of GET /api/admin/stats/{week_delta}.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeklyStats {
    /// True when every hour of the week has a stored aggregate.
    pub complete: bool,
    /// ISO-8601 timestamp of the resolved target instant.
    pub week: String,
    /// 168 cells, day-major (Monday 00:00 first).
    pub heatmap: Vec<HeatmapCell>,
}
