// Week resolution: "N weeks ago" -> ISO (year, week) and its [Monday, next Monday) bounds.

use chrono::{DateTime, Datelike, NaiveDate, TimeDelta, Utc, Weekday};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("week_delta {0} is out of range")]
pub struct WeekOutOfRange(pub i64);

/// The ISO week a statistics request looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekWindow {
    /// `now` shifted back by whole weeks; reported as the `week` field.
    pub target: DateTime<Utc>,
    pub looked_year: i32,
    pub looked_week: u32,
    /// Monday 00:00 UTC of the looked week.
    pub lower_bound: DateTime<Utc>,
    /// Monday 00:00 UTC of the following ISO week.
    pub upper_bound: DateTime<Utc>,
}

/// Resolves the week `week_delta` weeks before `now` (0 = current week).
///
/// Negative deltas are taken by absolute value, so `-1` and `1` both mean last
/// week; there is no way to ask for a future week.
pub fn resolve_week(now: DateTime<Utc>, week_delta: i64) -> Result<WeekWindow, WeekOutOfRange> {
    let weeks = week_delta.unsigned_abs();
    let target = if weeks > 0 {
        i64::try_from(weeks)
            .ok()
            .and_then(|w| w.checked_mul(7 * 24))
            .and_then(TimeDelta::try_hours)
            .and_then(|d| now.checked_sub_signed(d))
            .ok_or(WeekOutOfRange(week_delta))?
    } else {
        now
    };

    let iso = target.iso_week();
    let (looked_year, looked_week) = (iso.year(), iso.week());

    let lower = monday_of(looked_year, looked_week).ok_or(WeekOutOfRange(week_delta))?;
    // Week 52/53 has no successor in its own ISO year; roll over to week 1.
    let upper = monday_of(looked_year, looked_week + 1)
        .or_else(|| {
            looked_year
                .checked_add(1)
                .and_then(|next_year| monday_of(next_year, 1))
        })
        .ok_or(WeekOutOfRange(week_delta))?;

    Ok(WeekWindow {
        target,
        looked_year,
        looked_week,
        lower_bound: lower,
        upper_bound: upper,
    })
}

fn monday_of(year: i32, week: u32) -> Option<DateTime<Utc>> {
    NaiveDate::from_isoywd_opt(year, week, Weekday::Mon)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}
