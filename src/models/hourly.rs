// Hourly aggregate: one persisted row per elapsed hour (written by the collector)

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use wincode::{SchemaRead, SchemaWrite};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HourlyAggregate {
    /// Start of the hour (UTC).
    pub start: DateTime<Utc>,
    /// Event-type name -> count during the hour.
    pub summary: BTreeMap<String, i64>,
    /// Disk headroom sampled when the hour was aggregated.
    pub free_disk_space: i64,
}

/// One (event name, count) pair; the BLOB form of event-count mappings.
#[derive(Debug, Clone, PartialEq, Eq, SchemaRead, SchemaWrite)]
pub struct EventCount {
    pub name: String,
    pub count: i64,
}

impl EventCount {
    pub fn from_map(map: &BTreeMap<String, i64>) -> Vec<EventCount> {
        map.iter()
            .map(|(name, count)| EventCount {
                name: name.clone(),
                count: *count,
            })
            .collect()
    }

    pub fn into_map(counts: Vec<EventCount>) -> BTreeMap<String, i64> {
        counts.into_iter().map(|c| (c.name, c.count)).collect()
    }
}
