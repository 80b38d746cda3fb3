// Shared test helpers
#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use std::collections::BTreeMap;
use tempfile::TempDir;
use wbstats::history_repo::HistoryRepo;
use wbstats::models::{AnomalySnapshot, HourlyAggregate};

pub fn utc(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
}

pub fn counts(pairs: &[(&str, i64)]) -> BTreeMap<String, i64> {
    pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
}

pub fn aggregate(start: DateTime<Utc>, summary: &[(&str, i64)]) -> HourlyAggregate {
    HourlyAggregate {
        start,
        summary: counts(summary),
        free_disk_space: 1_000_000,
    }
}

pub fn anomaly(date: DateTime<Utc>, alarm: i64, events: &[(&str, i64)]) -> AnomalySnapshot {
    AnomalySnapshot {
        date,
        alarm,
        events: counts(events),
    }
}

/// Fresh initialized repo in a temp dir; keep the TempDir alive for the test.
pub async fn temp_repo() -> (TempDir, HistoryRepo) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("stats.db");
    let repo = HistoryRepo::connect(path.to_str().unwrap(), 2)
        .await
        .unwrap();
    repo.init().await.unwrap();
    (dir, repo)
}

/// Second pool on the same database file, for writing rows the repo never would.
pub async fn raw_pool(dir: &TempDir) -> sqlx::SqlitePool {
    let path = dir.path().join("stats.db");
    sqlx::SqlitePool::connect(&format!("sqlite:{}", path.to_str().unwrap()))
        .await
        .unwrap()
}

/// Insert an hourly row whose summary BLOB is `summary_data` verbatim.
pub async fn insert_raw_aggregate(dir: &TempDir, start: DateTime<Utc>, summary_data: &[u8]) {
    let pool = raw_pool(dir).await;
    sqlx::query("INSERT INTO hourly_stats (start, free_disk_space, summary_data) VALUES ($1, $2, $3)")
        .bind(start.timestamp_millis())
        .bind(0i64)
        .bind(summary_data)
        .execute(&pool)
        .await
        .unwrap();
    pool.close().await;
}

/// Insert an anomaly row whose events BLOB is `events_data` verbatim.
pub async fn insert_raw_anomaly(dir: &TempDir, date: DateTime<Utc>, events_data: &[u8]) {
    let pool = raw_pool(dir).await;
    sqlx::query("INSERT INTO anomalies (date, alarm, events_data) VALUES ($1, $2, $3)")
        .bind(date.timestamp_millis())
        .bind(1i64)
        .bind(events_data)
        .execute(&pool)
        .await
        .unwrap();
    pool.close().await;
}
