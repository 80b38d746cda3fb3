// Weekly heatmap: rebuild a dense 7x24 grid from sparse hourly aggregates.
// Empty cells get a status marker explaining why they are empty.

use chrono::{DateTime, Datelike, Timelike, Utc};

use super::week::WeekWindow;
use crate::models::{CellStatus, HeatmapCell, HourlyAggregate, WeeklyStats, iso8601};

pub const DAYS: usize = 7;
pub const HOURS: usize = 24;
pub const CELLS: usize = DAYS * HOURS;

/// Where `now` sits inside its own ISO week.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekPosition {
    /// ISO week number (year is not tracked).
    pub week: u32,
    /// 0 = Monday .. 6 = Sunday
    pub wday: u32,
    pub hour: u32,
}

impl WeekPosition {
    pub fn of(now: DateTime<Utc>) -> Self {
        Self {
            week: now.iso_week().week(),
            wday: now.weekday().num_days_from_monday(),
            hour: now.hour(),
        }
    }
}

/// Status for a cell that has no stored aggregate.
///
/// Any week other than the current one marks every gap as `Missing`, even when
/// the cell is chronologically in the future. Only week numbers are compared.
pub fn classify_empty(day: u32, hour: u32, looked_week: u32, current: WeekPosition) -> CellStatus {
    if current.week != looked_week {
        CellStatus::Missing
    } else if day > current.wday || (day == current.wday && hour > current.hour) {
        CellStatus::Future
    } else if day == current.wday && hour == current.hour {
        CellStatus::InProgress
    } else {
        CellStatus::Missing
    }
}

/// Builds the 168-cell heatmap for `window` out of `records` (any order).
///
/// Records are bucketed by the UTC weekday/hour of their `start`; a later
/// record for an hour already filled replaces the earlier one.
pub fn assemble_heatmap(
    window: &WeekWindow,
    current: WeekPosition,
    records: &[HourlyAggregate],
) -> WeeklyStats {
    let mut grid: [[Option<HeatmapCell>; HOURS]; DAYS] = Default::default();
    let mut filled = 0usize;

    for record in records {
        let day = record.start.weekday().num_days_from_monday();
        let hour = record.start.hour();
        let slot = &mut grid[day as usize][hour as usize];
        if slot.is_none() {
            filled += 1;
        }
        *slot = Some(HeatmapCell::real(day, hour, record));
    }

    let complete = filled == CELLS;
    let mut heatmap = Vec::with_capacity(CELLS);
    for (day, row) in grid.into_iter().enumerate() {
        for (hour, cell) in row.into_iter().enumerate() {
            let (day, hour) = (day as u32, hour as u32);
            heatmap.push(cell.unwrap_or_else(|| {
                HeatmapCell::synthetic(
                    day,
                    hour,
                    classify_empty(day, hour, window.looked_week, current),
                )
            }));
        }
    }

    WeeklyStats {
        complete,
        week: iso8601(&window.target),
        heatmap,
    }
}
