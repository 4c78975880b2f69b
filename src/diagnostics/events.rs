// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types for page activity tracking.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Things the page layer did in response to the user or the server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum PageAction {
    /// DOM-ready wiring finished.
    Booted {
        drop_zones: usize,
        persisted_fields: usize,
    },

    /// A drop zone was lit by a hovering drag.
    ZoneHighlighted,

    /// A drop zone was cleared by `dragleave` or `drop`.
    ZoneCleared { dropped: bool },

    /// An inserted result started its entrance animation.
    ResultRevealed,

    /// A toast was appended to the page.
    NotificationShown { severity: String },

    /// A toast finished its lifecycle and was removed.
    NotificationRemoved,

    /// Ctrl+Enter clicked the recognition trigger.
    RunTriggered,

    /// Ctrl+Enter found the recognition trigger disabled.
    RunSkippedDisabled,

    /// Escape dismissed open modals.
    ModalsClosed { count: usize },

    /// A stored value was written into an empty field at load.
    FieldRestored { field: String },

    /// A field value was written to storage.
    FieldSaved { field: String },

    /// A clipboard write succeeded.
    ClipboardWritten,
}

/// Category of a recorded warning.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WarningType {
    /// The inline configuration could not be parsed.
    Config,
    /// Browser storage refused a read or write.
    Storage,
    /// A stored value did not match the field's expected type.
    Validation,
    /// A clipboard write was rejected.
    Clipboard,
    /// Anything else.
    Other,
}

/// A non-fatal problem the page layer skipped over.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WarningEvent {
    pub warning_type: WarningType,
    pub message: String,
}

impl WarningEvent {
    pub fn new(warning_type: WarningType, message: impl Into<String>) -> Self {
        Self {
            warning_type,
            message: message.into(),
        }
    }
}

/// Payload of a diagnostic event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DiagnosticEventKind {
    Action { action: PageAction },
    Warning { event: WarningEvent },
}

/// A timestamped diagnostic event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DiagnosticEvent {
    pub timestamp: DateTime<Utc>,
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    /// Creates an event stamped with the current time.
    #[must_use]
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self::with_timestamp(kind, Utc::now())
    }

    /// Creates an event with an explicit timestamp.
    #[must_use]
    pub fn with_timestamp(kind: DiagnosticEventKind, timestamp: DateTime<Utc>) -> Self {
        Self { timestamp, kind }
    }

    /// Returns the warning carried by this event, if any.
    #[must_use]
    pub fn warning(&self) -> Option<&WarningEvent> {
        match &self.kind {
            DiagnosticEventKind::Warning { event } => Some(event),
            DiagnosticEventKind::Action { .. } => None,
        }
    }

    /// Returns the action carried by this event, if any.
    #[must_use]
    pub fn action(&self) -> Option<&PageAction> {
        match &self.kind {
            DiagnosticEventKind::Action { action } => Some(action),
            DiagnosticEventKind::Warning { .. } => None,
        }
    }
}
