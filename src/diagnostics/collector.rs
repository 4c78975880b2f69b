// SPDX-License-Identifier: MPL-2.0
//! Diagnostics collector for recording page activity.
//!
//! The page runs on a single event loop, so the handle shares its buffer
//! through `Rc<RefCell<_>>` instead of a channel. Cloning a handle is cheap
//! and every clone writes to the same buffer.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{
    BufferCapacity, CircularBuffer, DiagnosticEvent, DiagnosticEventKind, PageAction, WarningEvent,
    WarningType,
};
use crate::error::Result;

/// Callback invoked for every recorded event (e.g. to mirror to the console).
pub type EventSink = Rc<dyn Fn(&DiagnosticEvent)>;

/// Handle for recording diagnostic events.
#[derive(Clone)]
pub struct DiagnosticsHandle {
    buffer: Rc<RefCell<CircularBuffer<DiagnosticEvent>>>,
    sink: Option<EventSink>,
}

impl fmt::Debug for DiagnosticsHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiagnosticsHandle")
            .field("events", &self.buffer.borrow().len())
            .field("has_sink", &self.sink.is_some())
            .finish()
    }
}

impl Default for DiagnosticsHandle {
    fn default() -> Self {
        Self::new(BufferCapacity::default())
    }
}

impl DiagnosticsHandle {
    /// Creates a handle with an empty buffer.
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        Self {
            buffer: Rc::new(RefCell::new(CircularBuffer::new(capacity))),
            sink: None,
        }
    }

    /// Attaches a callback that sees every event as it is recorded.
    #[must_use]
    pub fn with_sink(mut self, sink: EventSink) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Records a page action.
    pub fn log_action(&self, action: PageAction) {
        self.record(DiagnosticEvent::new(DiagnosticEventKind::Action { action }));
    }

    /// Records a warning.
    pub fn log_warning(&self, event: WarningEvent) {
        self.record(DiagnosticEvent::new(DiagnosticEventKind::Warning { event }));
    }

    /// Records a warning with a category and message.
    pub fn warn(&self, warning_type: WarningType, message: impl Into<String>) {
        self.log_warning(WarningEvent::new(warning_type, message));
    }

    fn record(&self, event: DiagnosticEvent) {
        if let Some(sink) = &self.sink {
            sink(&event);
        }
        self.buffer.borrow_mut().push(event);
    }

    /// Snapshot of the recorded events, oldest first.
    #[must_use]
    pub fn events(&self) -> Vec<DiagnosticEvent> {
        self.buffer.borrow().iter().cloned().collect()
    }

    /// Snapshot of the recorded actions, oldest first.
    #[must_use]
    pub fn actions(&self) -> Vec<PageAction> {
        self.buffer
            .borrow()
            .iter()
            .filter_map(|event| event.action().cloned())
            .collect()
    }

    /// Snapshot of the recorded warnings, oldest first.
    #[must_use]
    pub fn warnings(&self) -> Vec<WarningEvent> {
        self.buffer
            .borrow()
            .iter()
            .filter_map(|event| event.warning().cloned())
            .collect()
    }

    /// Number of recorded events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.borrow().is_empty()
    }

    pub fn clear(&self) {
        self.buffer.borrow_mut().clear();
    }

    /// Exports the buffer as a pretty-printed JSON report.
    pub fn export_json(&self) -> Result<String> {
        let report = DiagnosticReport {
            generated_at: Utc::now(),
            dropped_events: self.buffer.borrow().evicted(),
            events: self.events(),
        };
        Ok(serde_json::to_string_pretty(&report)?)
    }
}

/// Serialized form of the diagnostics buffer.
#[derive(Debug, Serialize)]
pub struct DiagnosticReport {
    pub generated_at: DateTime<Utc>,
    /// Older events that no longer fit in the buffer.
    pub dropped_events: u64,
    pub events: Vec<DiagnosticEvent>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn clones_share_one_buffer() {
        let handle = DiagnosticsHandle::default();
        let clone = handle.clone();
        clone.log_action(PageAction::ResultRevealed);
        assert_eq!(handle.len(), 1);
        assert_eq!(handle.actions(), vec![PageAction::ResultRevealed]);
    }

    #[test]
    fn warnings_are_filtered_from_actions() {
        let handle = DiagnosticsHandle::default();
        handle.log_action(PageAction::RunTriggered);
        handle.warn(WarningType::Storage, "denied");
        assert_eq!(handle.actions().len(), 1);
        assert_eq!(
            handle.warnings(),
            vec![WarningEvent::new(WarningType::Storage, "denied")]
        );
    }

    #[test]
    fn sink_sees_every_event() {
        let seen = Rc::new(Cell::new(0));
        let counter = Rc::clone(&seen);
        let handle = DiagnosticsHandle::default().with_sink(Rc::new(move |_: &DiagnosticEvent| {
            counter.set(counter.get() + 1);
        }));
        handle.log_action(PageAction::ZoneHighlighted);
        handle.warn(WarningType::Other, "x");
        assert_eq!(seen.get(), 2);
    }

    #[test]
    fn export_json_lists_events() {
        let handle = DiagnosticsHandle::default();
        handle.log_action(PageAction::ClipboardWritten);
        let json = handle.export_json().expect("export succeeds");
        assert!(json.contains("clipboard_written"));
        assert!(json.contains("generated_at"));
        assert!(json.contains("\"dropped_events\": 0"));
    }

    #[test]
    fn export_reports_events_that_no_longer_fit() {
        let handle = DiagnosticsHandle::new(BufferCapacity::new(0));
        let capacity = BufferCapacity::new(0).value();
        for _ in 0..capacity + 3 {
            handle.log_action(PageAction::ZoneHighlighted);
        }
        assert_eq!(handle.len(), capacity);
        let json = handle.export_json().expect("export succeeds");
        assert!(json.contains("\"dropped_events\": 3"));
    }
}
