// Live activity view: events recorded since the last hourly aggregate.
// The event buffer belongs to the transport layer and is read through RecentEventSource.

use std::collections::{BTreeMap, VecDeque};
use std::str::FromStr;
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::RecentEvent;

/// Read-only view of the recent-event queue.
pub trait RecentEventSource: Send + Sync {
    fn snapshot(&self) -> Vec<RecentEvent>;
}

/// Bounded in-memory queue; oldest events are dropped once `capacity` is reached.
#[derive(Debug)]
pub struct RecentEventBuffer {
    capacity: usize,
    inner: Mutex<BufferState>,
}

#[derive(Debug, Default)]
struct BufferState {
    next_id: u64,
    events: VecDeque<RecentEvent>,
}

impl RecentEventBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            inner: Mutex::new(BufferState::default()),
        }
    }

    /// Appends an event and returns its id.
    pub fn record(&self, event: &str, creation_date: DateTime<Utc>) -> u64 {
        let mut state = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        let id = state.next_id;
        state.next_id += 1;
        if state.events.len() == self.capacity {
            state.events.pop_front();
        }
        state.events.push_back(RecentEvent {
            id,
            event: event.to_string(),
            creation_date,
        });
        id
    }
}

impl RecentEventSource for RecentEventBuffer {
    fn snapshot(&self) -> Vec<RecentEvent> {
        let state = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        state.events.iter().cloned().collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityKind {
    Summary,
    Details,
}

impl FromStr for ActivityKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "summary" => Ok(ActivityKind::Summary),
            "details" => Ok(ActivityKind::Details),
            other => Err(format!("unknown activity kind '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ActivityReport {
    Summary(BTreeMap<String, u64>),
    Details(Vec<RecentEvent>),
}

/// Events ordered by id.
pub fn details(mut events: Vec<RecentEvent>) -> Vec<RecentEvent> {
    events.sort_by_key(|e| e.id);
    events
}

/// Count per event name. Every monitored name is present (0 when unseen);
/// names outside `monitored` are counted as well.
pub fn summarize(events: &[RecentEvent], monitored: &[String]) -> BTreeMap<String, u64> {
    let mut counts: BTreeMap<String, u64> = monitored.iter().map(|m| (m.clone(), 0)).collect();
    for e in events {
        *counts.entry(e.event.clone()).or_default() += 1;
    }
    counts
}

pub fn report(
    kind: ActivityKind,
    source: &dyn RecentEventSource,
    monitored: &[String],
) -> ActivityReport {
    let events = source.snapshot();
    match kind {
        ActivityKind::Summary => ActivityReport::Summary(summarize(&events, monitored)),
        ActivityKind::Details => ActivityReport::Details(details(events)),
    }
}
