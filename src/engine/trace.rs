//! Chrome-trace recorder.
//!
//! ## Purpose
//!
//! This module provides a [`SignatureObserver`] that records begin/end events
//! in the Chrome trace-event format (`chrome://tracing`, Perfetto) and
//! serializes them as a JSON array.
//!
//! ## Design notes
//!
//! * **Owned, not global**: Each recorder is an ordinary value; share it
//!   through an `Arc` to observe several processors at once.
//! * **Relative clock**: Timestamps are microseconds since the recorder was
//!   created.
//!
//! ## Non-goals
//!
//! * This module does not manage files; callers supply the writer.

use std::io::Write;
use std::sync::Mutex;
use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::engine::observer::{Operation, SignatureObserver};

/// Category attached to every recorded event.
pub const TRACE_CATEGORY: &str = "kernel";

/// One Chrome trace event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceEvent {
    /// Event name.
    pub name: String,
    /// Event category.
    pub cat: String,
    /// Phase: `"B"` for begin, `"E"` for end.
    pub ph: String,
    /// Timestamp in microseconds.
    pub ts: u64,
    /// Process id.
    pub pid: u32,
    /// Thread id.
    pub tid: u32,
}

/// Observer that buffers trace events in memory.
#[derive(Debug)]
pub struct ChromeTraceRecorder {
    origin: Instant,
    events: Mutex<Vec<TraceEvent>>,
}

impl Default for ChromeTraceRecorder {
    fn default() -> Self {
        Self::new()
    }
}

impl ChromeTraceRecorder {
    /// Create an empty recorder whose clock starts now.
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
            events: Mutex::new(Vec::new()),
        }
    }

    fn push(&self, op: Operation, ph: &str) {
        let ts = self.origin.elapsed().as_micros() as u64;
        let event = TraceEvent {
            name: op.name().to_string(),
            cat: TRACE_CATEGORY.to_string(),
            ph: ph.to_string(),
            ts,
            pid: 1,
            tid: 1,
        };
        // Poisoned locks still hold a valid event list.
        let mut events = self.events.lock().unwrap_or_else(|e| e.into_inner());
        events.push(event);
    }

    /// Snapshot of the recorded events.
    pub fn events(&self) -> Vec<TraceEvent> {
        self.events
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Drop all recorded events.
    pub fn clear(&self) {
        self.events
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clear();
    }

    /// Recorded events as a Chrome trace JSON array.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.events())
    }

    /// Write the recorded events as a Chrome trace JSON array and flush.
    pub fn write_to<W: Write>(&self, mut writer: W) -> std::io::Result<()> {
        serde_json::to_writer(&mut writer, &self.events())?;
        writer.flush()
    }
}

impl SignatureObserver for ChromeTraceRecorder {
    fn on_begin(&self, op: Operation) {
        self.push(op, "B");
    }

    fn on_end(&self, op: Operation) {
        self.push(op, "E");
    }
}
