// Anomaly history: table schema plus read / write / delete-all on HistoryRepo.

use sqlx::{Row, SqlitePool};
use tracing::instrument;

use super::{HistoryRepo, blob, from_millis};
use crate::models::AnomalySnapshot;

/// Creates the anomalies table and index if not present.
pub(super) async fn init_anomalies_table(pool: &SqlitePool) -> anyhow::Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS anomalies (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            date INTEGER NOT NULL,
            alarm INTEGER NOT NULL,
            events_data BLOB NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_anomalies_date ON anomalies(date)")
        .execute(pool)
        .await?;

    Ok(())
}

impl HistoryRepo {
    #[instrument(skip(self, anomaly), fields(repo = "stats", operation = "save_anomaly"))]
    pub async fn save_anomaly(&self, anomaly: &AnomalySnapshot) -> anyhow::Result<()> {
        let events_data = blob::encode_counts(&anomaly.events)?;
        sqlx::query("INSERT INTO anomalies (date, alarm, events_data) VALUES ($1, $2, $3)")
            .bind(anomaly.date.timestamp_millis())
            .bind(anomaly.alarm)
            .bind(&events_data)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Up to `limit` anomalies, newest first. An undecodable events BLOB fails the fetch.
    #[instrument(skip(self), fields(repo = "stats", operation = "fetch_recent_anomalies"))]
    pub async fn fetch_recent_anomalies(&self, limit: u32) -> anyhow::Result<Vec<AnomalySnapshot>> {
        let rows = sqlx::query(
            "SELECT date, alarm, events_data FROM anomalies ORDER BY date DESC, id DESC LIMIT $1",
        )
        .bind(limit as i64)
        .fetch_all(&self.pool)
        .await?;

        let mut out = Vec::with_capacity(rows.len());
        for row in rows {
            let date: i64 = row.try_get("date")?;
            let alarm: i64 = row.try_get("alarm")?;
            let events_data: Vec<u8> = row.try_get("events_data")?;
            out.push(AnomalySnapshot {
                date: from_millis(date)?,
                alarm,
                events: blob::decode_counts(&events_data)?,
            });
        }
        Ok(out)
    }

    /// Delete every anomaly snapshot; returns the number of rows removed.
    #[instrument(skip(self), fields(repo = "stats", operation = "delete_all_anomalies"))]
    pub async fn delete_all_anomalies(&self) -> anyhow::Result<u64> {
        let r = sqlx::query("DELETE FROM anomalies").execute(&self.pool).await?;
        Ok(r.rows_affected())
    }
}
