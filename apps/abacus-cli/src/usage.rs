//! # Usage Observation
//!
//! "Tool used" events emitted after each successful key press.
//!
//! Sinks receive a finished event by shared reference and have no handle
//! on the calculator, so they can watch the engine but never steer it.
//!
//! ```text
//! press_key ──► engine.press(key) ──► snapshot ──► UsageEvent ──► UsageSink
//!                                                                  │
//!                                          TracingSink: structured log line
//!                                          MemorySink:  in-process buffer
//! ```

use std::sync::{Mutex, PoisonError};

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::state::AnalyticsSettings;

/// One observed key press.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UsageEvent {
    /// Event name from configuration (e.g. `tool_used`).
    pub event: String,
    /// Tool name from configuration (e.g. `calculator`).
    pub tool: String,
    pub widget_id: Uuid,
    /// Key label (`7`, `×`, `CE`, ...).
    pub key: String,
    pub at: DateTime<Utc>,
}

impl UsageEvent {
    /// Builds an event stamped with the current time.
    pub fn new(settings: &AnalyticsSettings, widget_id: Uuid, key: impl Into<String>) -> Self {
        UsageEvent {
            event: settings.event_name.clone(),
            tool: settings.tool_name.clone(),
            widget_id,
            key: key.into(),
            at: Utc::now(),
        }
    }
}

/// Receives usage events.
pub trait UsageSink: Send + Sync {
    fn record(&self, event: &UsageEvent);
}

/// Writes each event as a structured `tracing` line.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl UsageSink for TracingSink {
    fn record(&self, event: &UsageEvent) {
        info!(
            target: "abacus_cli::usage",
            event = %event.event,
            tool = %event.tool,
            widget_id = %event.widget_id,
            key = %event.key,
            at = %event.at.to_rfc3339(),
            "usage"
        );
    }
}

/// Keeps events in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    events: Mutex<Vec<UsageEvent>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copies out every event recorded so far.
    pub fn events(&self) -> Vec<UsageEvent> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl UsageSink for MemorySink {
    fn record(&self, event: &UsageEvent) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event.clone());
    }
}
