// SPDX-License-Identifier: MPL-2.0
//! Configuration of the page layer.
//!
//! The configuration is a sectioned TOML document. In the browser it is read
//! from an inline `<script type="application/toml" id="ocr-lens-config">`
//! block; natively it can be loaded from and saved to a file, which is how the
//! `ocr_lens` tool checks a block before it is deployed.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language override
//! - `[storage]` - Persistence namespace
//! - `[targets]` - Capability markers and marker classes
//! - `[drag]` - Drop-zone highlight styling
//! - `[animation]` - Result reveal timing
//! - `[notifications]` - Toast timing and clipboard feedback
//! - `[persistence]` - Per-field type overrides
//! - `[diagnostics]` - Event buffer size
//!
//! Every key is optional. Missing keys take the values in [`defaults`].
//!
//! # Examples
//!
//! ```
//! use ocr_lens::config::Config;
//!
//! let config = Config::from_toml_str(
//!     r#"
//!     [storage]
//!     namespace = "ocr"
//!
//!     [animation]
//!     reveal_delay_ms = 150
//!     "#,
//! )
//! .expect("valid config");
//!
//! assert_eq!(config.animation.reveal_delay().value(), 150);
//! assert_eq!(config.notifications.display().value(), 3000);
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::persisted_state::FieldKind;
use crate::domain::diagnostics::BufferCapacity;
use crate::domain::ui::{Millis, SlideOffset};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Id of the inline element holding the page configuration.
pub const CONFIG_ELEMENT_ID: &str = "ocr-lens-config";

// =============================================================================
// Section Structs
// =============================================================================

/// General settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "ru"). Falls back to the page's
    /// `lang` attribute.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Persistence namespace.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StorageConfig {
    /// Prefix of every persisted key.
    #[serde(default = "default_namespace")]
    pub namespace: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            namespace: default_namespace(),
        }
    }
}

impl StorageConfig {
    /// Namespace to use, falling back to the default when blank.
    #[must_use]
    pub fn namespace(&self) -> &str {
        let trimmed = self.namespace.trim();
        if trimmed.is_empty() {
            DEFAULT_STORAGE_NAMESPACE
        } else {
            trimmed
        }
    }
}

/// How the page's interactive elements are recognized.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TargetsConfig {
    /// Attribute declaring an element's role.
    #[serde(default = "default_marker_attribute")]
    pub marker_attribute: String,

    /// Role value of drag-and-drop targets.
    #[serde(default = "default_drop_zone_marker")]
    pub drop_zone_marker: String,

    /// Role value of the recognition trigger.
    #[serde(default = "default_run_ocr_marker")]
    pub run_ocr_marker: String,

    /// Also match elements by id fragment, for pages rendered without role
    /// attributes.
    #[serde(default = "default_true")]
    pub match_legacy_ids: bool,

    /// Legacy id fragment of drag-and-drop targets.
    #[serde(default = "default_upload_id_fragment")]
    pub upload_id_fragment: String,

    /// Legacy id fragment of the recognition trigger.
    #[serde(default = "default_run_ocr_id_fragment")]
    pub run_ocr_id_fragment: String,

    /// Class marking result cards to animate.
    #[serde(default = "default_result_class")]
    pub result_class: String,

    /// Class carried by modal dialogs.
    #[serde(default = "default_modal_class")]
    pub modal_class: String,

    /// Class carried by open modal dialogs.
    #[serde(default = "default_modal_shown_class")]
    pub modal_shown_class: String,

    /// Class of a modal's dismiss button.
    #[serde(default = "default_close_class")]
    pub close_class: String,
}

impl Default for TargetsConfig {
    fn default() -> Self {
        Self {
            marker_attribute: default_marker_attribute(),
            drop_zone_marker: default_drop_zone_marker(),
            run_ocr_marker: default_run_ocr_marker(),
            match_legacy_ids: true,
            upload_id_fragment: default_upload_id_fragment(),
            run_ocr_id_fragment: default_run_ocr_id_fragment(),
            result_class: default_result_class(),
            modal_class: default_modal_class(),
            modal_shown_class: default_modal_shown_class(),
            close_class: default_close_class(),
        }
    }
}

/// Drop-zone highlight styling.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DragConfig {
    /// CSS background while a file hovers over the zone.
    #[serde(default = "default_highlight_background")]
    pub highlight_background: String,

    /// CSS border color while a file hovers over the zone.
    #[serde(default = "default_highlight_border_color")]
    pub highlight_border_color: String,
}

impl Default for DragConfig {
    fn default() -> Self {
        Self {
            highlight_background: default_highlight_background(),
            highlight_border_color: default_highlight_border_color(),
        }
    }
}

/// Result reveal timing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnimationConfig {
    /// Delay before the reveal transition starts (ms).
    #[serde(
        default = "default_reveal_delay_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub reveal_delay_ms: Option<u32>,

    /// Reveal transition duration (ms).
    #[serde(
        default = "default_transition_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub transition_ms: Option<u32>,

    /// Distance results slide up from (px).
    #[serde(default = "default_offset_px", skip_serializing_if = "Option::is_none")]
    pub offset_px: Option<u32>,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            reveal_delay_ms: default_reveal_delay_ms(),
            transition_ms: default_transition_ms(),
            offset_px: default_offset_px(),
        }
    }
}

impl AnimationConfig {
    #[must_use]
    pub fn reveal_delay(&self) -> Millis {
        Millis::clamped(
            self.reveal_delay_ms.unwrap_or(DEFAULT_REVEAL_DELAY_MS),
            MIN_REVEAL_DELAY_MS,
            MAX_REVEAL_DELAY_MS,
        )
    }

    #[must_use]
    pub fn transition(&self) -> Millis {
        Millis::clamped(
            self.transition_ms.unwrap_or(DEFAULT_TRANSITION_MS),
            MIN_TRANSITION_MS,
            MAX_TRANSITION_MS,
        )
    }

    #[must_use]
    pub fn offset(&self) -> SlideOffset {
        self.offset_px.map(SlideOffset::new).unwrap_or_default()
    }
}

/// Toast lifecycle and clipboard feedback.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NotificationsConfig {
    /// Time a toast stays visible before sliding out (ms).
    #[serde(default = "default_display_ms", skip_serializing_if = "Option::is_none")]
    pub display_ms: Option<u32>,

    /// Slide-out duration before the toast is removed (ms).
    #[serde(default = "default_fade_ms", skip_serializing_if = "Option::is_none")]
    pub fade_ms: Option<u32>,

    /// Show an error toast when a clipboard write is rejected.
    #[serde(default)]
    pub notify_clipboard_failure: bool,
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            display_ms: default_display_ms(),
            fade_ms: default_fade_ms(),
            notify_clipboard_failure: false,
        }
    }
}

impl NotificationsConfig {
    #[must_use]
    pub fn display(&self) -> Millis {
        Millis::clamped(
            self.display_ms.unwrap_or(DEFAULT_NOTIFICATION_DISPLAY_MS),
            MIN_NOTIFICATION_DISPLAY_MS,
            MAX_NOTIFICATION_DISPLAY_MS,
        )
    }

    #[must_use]
    pub fn fade(&self) -> Millis {
        Millis::clamped(
            self.fade_ms.unwrap_or(DEFAULT_NOTIFICATION_FADE_MS),
            MIN_NOTIFICATION_FADE_MS,
            MAX_NOTIFICATION_FADE_MS,
        )
    }
}

/// Field persistence schema overrides.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct PersistenceConfig {
    /// Expected value type per field id, overriding the type inferred from
    /// the element.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub fields: BTreeMap<String, FieldKind>,
}

/// Diagnostics buffer settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiagnosticsConfig {
    #[serde(default = "default_buffer_capacity")]
    pub buffer_capacity: usize,
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            buffer_capacity: default_buffer_capacity(),
        }
    }
}

impl DiagnosticsConfig {
    #[must_use]
    pub fn capacity(&self) -> BufferCapacity {
        BufferCapacity::new(self.buffer_capacity)
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Page layer configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub targets: TargetsConfig,

    #[serde(default)]
    pub drag: DragConfig,

    #[serde(default)]
    pub animation: AnimationConfig,

    #[serde(default)]
    pub notifications: NotificationsConfig,

    #[serde(default)]
    pub persistence: PersistenceConfig,

    #[serde(default)]
    pub diagnostics: DiagnosticsConfig,
}

impl Config {
    /// Parses a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Serializes the configuration as pretty TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Parses an inline config block, falling back to defaults.
    ///
    /// Returns the warning to record when the block could not be parsed.
    #[must_use]
    pub fn from_inline_block(content: Option<&str>) -> (Self, Option<String>) {
        match content.map(str::trim) {
            None | Some("") => (Self::default(), None),
            Some(raw) => match Self::from_toml_str(raw) {
                Ok(config) => (config, None),
                Err(err) => (Self::default(), Some(err.to_string())),
            },
        }
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_true() -> bool {
    true
}

fn default_namespace() -> String {
    DEFAULT_STORAGE_NAMESPACE.to_string()
}

fn default_marker_attribute() -> String {
    DEFAULT_MARKER_ATTRIBUTE.to_string()
}

fn default_drop_zone_marker() -> String {
    DEFAULT_DROP_ZONE_MARKER.to_string()
}

fn default_run_ocr_marker() -> String {
    DEFAULT_RUN_OCR_MARKER.to_string()
}

fn default_upload_id_fragment() -> String {
    DEFAULT_UPLOAD_ID_FRAGMENT.to_string()
}

fn default_run_ocr_id_fragment() -> String {
    DEFAULT_RUN_OCR_ID_FRAGMENT.to_string()
}

fn default_result_class() -> String {
    DEFAULT_RESULT_CLASS.to_string()
}

fn default_modal_class() -> String {
    DEFAULT_MODAL_CLASS.to_string()
}

fn default_modal_shown_class() -> String {
    DEFAULT_MODAL_SHOWN_CLASS.to_string()
}

fn default_close_class() -> String {
    DEFAULT_CLOSE_CLASS.to_string()
}

fn default_highlight_background() -> String {
    DEFAULT_HIGHLIGHT_BACKGROUND.to_string()
}

fn default_highlight_border_color() -> String {
    DEFAULT_HIGHLIGHT_BORDER_COLOR.to_string()
}

fn default_reveal_delay_ms() -> Option<u32> {
    Some(DEFAULT_REVEAL_DELAY_MS)
}

fn default_transition_ms() -> Option<u32> {
    Some(DEFAULT_TRANSITION_MS)
}

fn default_offset_px() -> Option<u32> {
    Some(crate::domain::ui::newtypes::offset_bounds::DEFAULT)
}

fn default_display_ms() -> Option<u32> {
    Some(DEFAULT_NOTIFICATION_DISPLAY_MS)
}

fn default_fade_ms() -> Option<u32> {
    Some(DEFAULT_NOTIFICATION_FADE_MS)
}

fn default_buffer_capacity() -> usize {
    DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY
}

// =============================================================================
// Load / Save
// =============================================================================

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Config::from_toml_str(&content)
}

/// Saves configuration to a specific path, creating parent directories.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = config.to_toml_string()?;
    fs::write(path, content).map_err(Error::from)
}
