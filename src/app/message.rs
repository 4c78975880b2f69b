// SPDX-License-Identifier: MPL-2.0
//! Top-level messages consumed by `App::update`.

use crate::domain::ui::{KeyPress, NodeHandle};
use crate::ui::animator;
use crate::ui::drag_zone;
use crate::ui::notifications::{self, Severity};

/// Top-level messages. The variants forward lower-level component messages
/// while keeping a single update entrypoint.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    DragZone(drag_zone::Message),
    Animator(animator::Message),
    /// Global `keydown`.
    KeyDown(KeyPress),
    /// `change` on a persisted field.
    FieldChanged(NodeHandle),
    /// `showNotification(message, severity)` from page scripts.
    ShowNotification { message: String, severity: Severity },
    Notification(notifications::NotificationMessage),
    /// `copyToClipboard(text)` from page scripts.
    CopyToClipboard(String),
    /// Outcome of a clipboard write, reported by the host.
    ClipboardWritten(Result<(), String>),
}

impl Message {
    /// Whether the browser event behind this message has its default action
    /// cancelled.
    #[must_use]
    pub fn prevents_default(&self) -> bool {
        match self {
            Message::DragZone(message) => message.prevents_default(),
            _ => false,
        }
    }
}
