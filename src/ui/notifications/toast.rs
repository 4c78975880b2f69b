// SPDX-License-Identifier: MPL-2.0
//! Toast element construction.
//!
//! A toast is a fixed-position `div` in the top-right corner. It slides in on
//! creation and plays the slide-out animation before the manager removes it.

use super::notification::Notification;
use crate::application::port::ElementSpec;
use crate::domain::ui::Millis;
use crate::ui::design_tokens::{layer, palette, radius, shadow, sizing, spacing};

/// Id of the `<style>` element holding the toast keyframes.
pub const STYLESHEET_ID: &str = "ocr-lens-notification-styles";

/// Class shared by every toast.
pub const BASE_CLASS: &str = "notification";

/// Keyframes for the slide-in and slide-out animations.
#[must_use]
pub fn keyframes_css() -> String {
    concat!(
        "@keyframes slideIn {",
        " from { transform: translateX(100%); opacity: 0; }",
        " to { transform: translateX(0); opacity: 1; } }\n",
        "@keyframes slideOut {",
        " from { transform: translateX(0); opacity: 1; }",
        " to { transform: translateX(100%); opacity: 0; } }\n",
    )
    .to_string()
}

/// Element description for a freshly shown toast.
#[must_use]
pub fn element_spec(notification: &Notification, fade: Millis) -> ElementSpec {
    let severity = notification.severity();
    ElementSpec::new("div")
        .with_class(BASE_CLASS)
        .with_class(severity.class_name())
        .with_text(notification.message())
        .with_style("position", "fixed")
        .with_style("top", spacing::MD)
        .with_style("right", spacing::MD)
        .with_style("z-index", layer::TOAST)
        .with_style("max-width", sizing::TOAST_MAX_WIDTH)
        .with_style("padding", format!("{} {}", spacing::SM, spacing::MD))
        .with_style("border-radius", radius::MD)
        .with_style("box-shadow", shadow::MD)
        .with_style("color", palette::WHITE)
        .with_style("background", severity.color())
        .with_style("animation", slide_in(fade))
}

/// `animation` value played on insertion.
#[must_use]
pub fn slide_in(duration: Millis) -> String {
    format!("slideIn {} ease-out", duration.css())
}

/// `animation` value played before removal.
#[must_use]
pub fn slide_out(duration: Millis) -> String {
    format!("slideOut {} ease-in forwards", duration.css())
}
