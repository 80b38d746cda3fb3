// Recent activity not yet rolled into an hourly aggregate

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentEvent {
    pub id: u64,
    pub event: String,
    pub creation_date: DateTime<Utc>,
}
