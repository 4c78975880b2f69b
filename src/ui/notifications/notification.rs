// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `Notification` struct and `Severity` enum
//! used throughout the notification system.

use crate::ui::design_tokens::palette;
use std::fmt;

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

/// Severity level determines the toast's class and color.
///
/// Every severity shares the same display and fade timing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    /// Neutral information (blue).
    #[default]
    Info,
    /// Operation completed successfully (green).
    Success,
    /// Something the user should look at (orange).
    Warning,
    /// Operation failed (red).
    Error,
}

impl Severity {
    /// Parses a severity tag as accepted by `showNotification`.
    ///
    /// Matching ignores case and surrounding whitespace. Unknown tags fall
    /// back to [`Severity::Info`].
    #[must_use]
    pub fn parse(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "success" => Severity::Success,
            "warning" => Severity::Warning,
            "error" => Severity::Error,
            _ => Severity::Info,
        }
    }

    /// Lowercase tag used in class names and diagnostics.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }

    /// Returns the primary color for this severity level.
    #[must_use]
    pub fn color(&self) -> &'static str {
        match self {
            Severity::Success => palette::SUCCESS_500,
            Severity::Info => palette::INFO_500,
            Severity::Warning => palette::WARNING_500,
            Severity::Error => palette::ERROR_500,
        }
    }

    /// Class distinguishing this severity (`notification-success`).
    #[must_use]
    pub fn class_name(&self) -> String {
        format!("notification-{}", self.as_str())
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A notification to be displayed to the user.
///
/// The message is shown verbatim. Callers that want translated text resolve
/// it through [`I18n`](crate::i18n::fluent::I18n) first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    id: NotificationId,
    severity: Severity,
    message: String,
}

impl Notification {
    /// Creates a new notification with the given severity and text.
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            id: NotificationId::new(),
            severity,
            message: message.into(),
        }
    }

    /// Creates a success notification.
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(Severity::Success, message)
    }

    /// Creates an info notification.
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(Severity::Info, message)
    }

    /// Creates an error notification.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_ids_are_unique() {
        let id1 = NotificationId::new();
        let id2 = NotificationId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn parse_accepts_known_tags_case_insensitively() {
        assert_eq!(Severity::parse("success"), Severity::Success);
        assert_eq!(Severity::parse(" Warning "), Severity::Warning);
        assert_eq!(Severity::parse("ERROR"), Severity::Error);
        assert_eq!(Severity::parse("info"), Severity::Info);
    }

    #[test]
    fn parse_falls_back_to_info() {
        assert_eq!(Severity::parse(""), Severity::Info);
        assert_eq!(Severity::parse("critical"), Severity::Info);
    }

    #[test]
    fn class_name_includes_tag() {
        assert_eq!(Severity::Error.class_name(), "notification-error");
        assert_eq!(Severity::default().class_name(), "notification-info");
    }

    #[test]
    fn severity_colors_are_distinct() {
        let colors = [
            Severity::Success.color(),
            Severity::Info.color(),
            Severity::Warning.color(),
            Severity::Error.color(),
        ];
        for (i, a) in colors.iter().enumerate() {
            for b in colors.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn constructors_set_severity() {
        assert_eq!(Notification::success("ok").severity(), Severity::Success);
        assert_eq!(Notification::info("i").severity(), Severity::Info);
        assert_eq!(
            Notification::new(Severity::Warning, "w").severity(),
            Severity::Warning
        );
        assert_eq!(Notification::error("e").message(), "e");
    }
}
