use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    #[serde(default)]
    pub statistics: StatisticsConfig,
    #[serde(default)]
    pub activity: ActivityConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub path: String,
    pub max_pool_size: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatisticsConfig {
    /// Anomalies returned by GET /api/admin/anomalies when no `limit` is given.
    #[serde(default = "default_anomaly_history_limit")]
    pub anomaly_history_limit: u32,
}

impl Default for StatisticsConfig {
    fn default() -> Self {
        Self {
            anomaly_history_limit: default_anomaly_history_limit(),
        }
    }
}

fn default_anomaly_history_limit() -> u32 {
    20
}

#[derive(Debug, Clone, Deserialize)]
pub struct ActivityConfig {
    /// Max recent events kept for /api/admin/activities (oldest dropped first).
    #[serde(default = "default_recent_events_capacity")]
    pub recent_events_capacity: usize,
    /// Event names always present in the activity summary.
    #[serde(default = "default_monitored_events")]
    pub monitored_events: Vec<String>,
}

impl Default for ActivityConfig {
    fn default() -> Self {
        Self {
            recent_events_capacity: default_recent_events_capacity(),
            monitored_events: default_monitored_events(),
        }
    }
}

fn default_recent_events_capacity() -> usize {
    1000
}

fn default_monitored_events() -> Vec<String> {
    [
        "new_submission",
        "wb_message",
        "wb_comment",
        "receiver_message",
        "receiver_comment",
        "failed_login",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

impl AppConfig {
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("CONFIG_FILE").unwrap_or_else(|_| "config.toml".into());
        let s = std::fs::read_to_string(&path)?;
        Self::load_from_str(&s)
    }

    /// Parse and validate config from a string (e.g. for tests).
    pub fn load_from_str(s: &str) -> anyhow::Result<Self> {
        let config: AppConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.server.port > 0,
            "server.port must be between 1 and 65535, got {}",
            self.server.port
        );
        anyhow::ensure!(
            !self.database.path.is_empty(),
            "database.path must be non-empty"
        );
        anyhow::ensure!(
            self.database.max_pool_size > 0,
            "database.max_pool_size must be > 0, got {}",
            self.database.max_pool_size
        );
        anyhow::ensure!(
            self.statistics.anomaly_history_limit > 0,
            "statistics.anomaly_history_limit must be > 0, got {}",
            self.statistics.anomaly_history_limit
        );
        anyhow::ensure!(
            self.activity.recent_events_capacity > 0,
            "activity.recent_events_capacity must be > 0, got {}",
            self.activity.recent_events_capacity
        );
        anyhow::ensure!(
            !self.activity.monitored_events.is_empty(),
            "activity.monitored_events must be non-empty"
        );
        Ok(())
    }
}
