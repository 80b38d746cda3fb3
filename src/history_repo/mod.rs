// SQLite statistics history: hourly aggregates and anomaly snapshots.
// Rows are written by the collector/detector; this repo reads them and bulk-deletes them.
// Timestamps are stored as UTC milliseconds; event-count mappings as versioned wincode BLOBs.

mod anomalies;
mod blob;

use crate::models::HourlyAggregate;
use chrono::{DateTime, Utc};
use sqlx::Row;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::path::Path;
use std::str::FromStr;
use tracing::instrument;

pub struct HistoryRepo {
    pool: SqlitePool,
}

impl HistoryRepo {
    pub async fn connect(path: &str, max_pool_size: u32) -> anyhow::Result<Self> {
        if let Some(parent) = Path::new(path).parent() {
            std::fs::create_dir_all(parent)?;
        }
        let opts = SqliteConnectOptions::from_str(&format!("sqlite:{}", path))?
            .create_if_missing(true)
            .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
            .busy_timeout(std::time::Duration::from_secs(5))
            .synchronous(sqlx::sqlite::SqliteSynchronous::Normal);
        let pool = SqlitePoolOptions::new()
            .max_connections(max_pool_size)
            .connect_with(opts)
            .await?;
        Ok(Self { pool })
    }

    pub async fn init(&self) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS hourly_stats (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                start INTEGER NOT NULL,
                free_disk_space INTEGER NOT NULL,
                summary_data BLOB NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_hourly_stats_start ON hourly_stats(start)")
            .execute(&self.pool)
            .await?;

        anomalies::init_anomalies_table(&self.pool).await?;

        Ok(())
    }

    #[instrument(skip(self, agg), fields(repo = "stats", operation = "save_aggregate"))]
    pub async fn save_aggregate(&self, agg: &HourlyAggregate) -> anyhow::Result<()> {
        let summary_data = blob::encode_counts(&agg.summary)?;
        sqlx::query(
            "INSERT INTO hourly_stats (start, free_disk_space, summary_data) VALUES ($1, $2, $3)",
        )
        .bind(agg.start.timestamp_millis())
        .bind(agg.free_disk_space)
        .bind(&summary_data)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Hourly aggregates with `start` in [lower, upper). Order is unspecified.
    ///
    /// The upper bound is exclusive on purpose: an hour starting exactly at next
    /// Monday 00:00 belongs to the following week and must not land in this
    /// week's Monday 00:00 cell. Earlier versions of this query used an
    /// inclusive upper bound.
    ///
    /// A row whose summary BLOB cannot be decoded fails the whole fetch.
    #[instrument(skip(self), fields(repo = "stats", operation = "fetch_aggregates"))]
    pub async fn fetch_aggregates(
        &self,
        lower: DateTime<Utc>,
        upper: DateTime<Utc>,
    ) -> anyhow::Result<Vec<HourlyAggregate>> {
        let rows = sqlx::query(
            "SELECT start, free_disk_space, summary_data FROM hourly_stats
             WHERE start >= $1 AND start < $2",
        )
        .bind(lower.timestamp_millis())
        .bind(upper.timestamp_millis())
        .fetch_all(&self.pool)
        .await?;

        let mut out = Vec::with_capacity(rows.len());
        for row in rows {
            out.push(Self::parse_aggregate_row(&row)?);
        }
        Ok(out)
    }

    /// Delete every hourly aggregate; returns the number of rows removed.
    #[instrument(skip(self), fields(repo = "stats", operation = "delete_all_aggregates"))]
    pub async fn delete_all_aggregates(&self) -> anyhow::Result<u64> {
        let r = sqlx::query("DELETE FROM hourly_stats")
            .execute(&self.pool)
            .await?;
        Ok(r.rows_affected())
    }

    fn parse_aggregate_row(row: &sqlx::sqlite::SqliteRow) -> anyhow::Result<HourlyAggregate> {
        let start: i64 = row.try_get("start")?;
        let free_disk_space: i64 = row.try_get("free_disk_space")?;
        let summary_data: Vec<u8> = row.try_get("summary_data")?;
        Ok(HourlyAggregate {
            start: from_millis(start)?,
            summary: blob::decode_counts(&summary_data)?,
            free_disk_space,
        })
    }
}

fn from_millis(ms: i64) -> anyhow::Result<DateTime<Utc>> {
    DateTime::from_timestamp_millis(ms)
        .ok_or_else(|| anyhow::anyhow!("timestamp out of range: {}", ms))
}
