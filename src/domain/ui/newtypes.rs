// SPDX-License-Identifier: MPL-2.0
//! UI newtypes.
//!
//! This module provides type-safe wrappers for page-level values,
//! ensuring they are always within valid ranges.

use std::fmt;

// =============================================================================
// NodeHandle
// =============================================================================

/// Opaque reference to a node owned by a [`Dom`](crate::application::port::Dom)
/// implementation.
///
/// Handles are only meaningful to the `Dom` that issued them. A handle is a
/// slot index plus the generation of that slot, so an implementation that
/// recycles slots can tell a stale handle from the node now living there.
/// Stale handles behave like detached nodes: queries on them come back empty
/// and mutations are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeHandle {
    index: u32,
    generation: u32,
}

impl NodeHandle {
    /// Wraps a slot index that is never recycled.
    #[must_use]
    pub const fn from_raw(index: u32) -> Self {
        Self::from_parts(index, 0)
    }

    /// Wraps a slot index together with the slot's generation.
    #[must_use]
    pub const fn from_parts(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }

    #[must_use]
    pub const fn index(self) -> u32 {
        self.index
    }

    #[must_use]
    pub const fn generation(self) -> u32 {
        self.generation
    }
}

// =============================================================================
// Millis
// =============================================================================

/// A duration in whole milliseconds, as used by browser timers and CSS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Millis(u32);

impl Millis {
    /// Zero milliseconds.
    pub const ZERO: Self = Self(0);

    /// Creates a duration from milliseconds.
    #[must_use]
    pub const fn new(ms: u32) -> Self {
        Self(ms)
    }

    /// Creates a duration, clamping it to `[min, max]`.
    #[must_use]
    pub fn clamped(ms: u32, min: u32, max: u32) -> Self {
        Self(ms.clamp(min, max))
    }

    /// Returns the value in milliseconds.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Formats the value as a CSS time (`600ms`).
    #[must_use]
    pub fn css(self) -> String {
        format!("{}ms", self.0)
    }
}

// =============================================================================
// Slide Offset Bounds
// =============================================================================

/// Vertical entrance offset bounds (0 to 200 pixels).
pub mod offset_bounds {
    /// Minimum offset in pixels.
    pub const MIN: u32 = 0;
    /// Maximum offset in pixels.
    pub const MAX: u32 = 200;
    /// Default offset in pixels.
    pub const DEFAULT: u32 = 20;
}

/// Vertical offset, in pixels, that a revealed element slides up from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideOffset(u32);

impl SlideOffset {
    /// Creates a new offset, clamping to the valid range.
    #[must_use]
    pub fn new(px: u32) -> Self {
        Self(px.clamp(offset_bounds::MIN, offset_bounds::MAX))
    }

    /// Returns the offset in pixels.
    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }

    /// CSS transform placing the element at this offset.
    #[must_use]
    pub fn translate_css(self) -> String {
        format!("translateY({}px)", self.0)
    }
}

impl Default for SlideOffset {
    fn default() -> Self {
        Self(offset_bounds::DEFAULT)
    }
}

// =============================================================================
// StorageKey
// =============================================================================

/// Namespaced storage key: `<namespace>_<field id>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StorageKey(String);

impl StorageKey {
    /// Builds the key for a field inside a namespace.
    #[must_use]
    pub fn new(namespace: &str, field_id: &str) -> Self {
        Self(format!("{namespace}_{field_id}"))
    }

    /// Returns the key as stored.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// Keyboard
// =============================================================================

/// Keys the page reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    Enter,
    Escape,
    Other(String),
}

impl Key {
    /// Maps a DOM `KeyboardEvent.key` value.
    #[must_use]
    pub fn from_dom(key: &str) -> Self {
        match key {
            "Enter" => Key::Enter,
            "Escape" | "Esc" => Key::Escape,
            other => Key::Other(other.to_string()),
        }
    }
}

/// A single `keydown` with its modifier state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPress {
    pub key: Key,
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
    pub meta: bool,
}

impl KeyPress {
    /// A key pressed without modifiers.
    #[must_use]
    pub fn plain(key: Key) -> Self {
        Self {
            key,
            ctrl: false,
            shift: false,
            alt: false,
            meta: false,
        }
    }

    /// A `keydown` as reported by `KeyboardEvent`.
    #[must_use]
    pub fn from_dom(key: &str, ctrl: bool, shift: bool, alt: bool, meta: bool) -> Self {
        Self {
            key: Key::from_dom(key),
            ctrl,
            shift,
            alt,
            meta,
        }
    }

    /// A key pressed with Ctrl held.
    #[must_use]
    pub fn ctrl(key: Key) -> Self {
        Self {
            ctrl: true,
            ..Self::plain(key)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_key_joins_namespace_and_id() {
        assert_eq!(StorageKey::new("ocr", "lang").as_str(), "ocr_lang");
        assert_eq!(
            StorageKey::new("ocr", "config-selector").to_string(),
            "ocr_config-selector"
        );
    }

    #[test]
    fn millis_clamps_and_formats() {
        assert_eq!(Millis::clamped(5, 10, 100).value(), 10);
        assert_eq!(Millis::clamped(500, 10, 100).value(), 100);
        assert_eq!(Millis::new(600).css(), "600ms");
    }

    #[test]
    fn slide_offset_clamps_to_valid_range() {
        assert_eq!(SlideOffset::new(1000).value(), offset_bounds::MAX);
        assert_eq!(SlideOffset::default().translate_css(), "translateY(20px)");
    }

    #[test]
    fn key_from_dom_maps_known_keys() {
        assert_eq!(Key::from_dom("Enter"), Key::Enter);
        assert_eq!(Key::from_dom("Esc"), Key::Escape);
        assert_eq!(Key::from_dom("a"), Key::Other("a".into()));
    }

    #[test]
    fn handles_from_different_generations_differ() {
        let first = NodeHandle::from_parts(4, 0);
        let recycled = NodeHandle::from_parts(4, 1);
        assert_ne!(first, recycled);
        assert_eq!(recycled.index(), 4);
        assert_eq!(NodeHandle::from_raw(4), first);
    }

    #[test]
    fn key_press_from_dom_keeps_modifiers() {
        let press = KeyPress::from_dom("Escape", false, true, false, false);
        assert_eq!(press.key, Key::Escape);
        assert!(press.shift);
        assert!(!press.ctrl);
    }

    #[test]
    fn ctrl_key_press_sets_only_ctrl() {
        let press = KeyPress::ctrl(Key::Enter);
        assert!(press.ctrl);
        assert!(!press.shift && !press.alt && !press.meta);
    }
}
