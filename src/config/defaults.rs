// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the page layer. Constants are organized by category.
//!
//! # Categories
//!
//! - **Storage**: Persistence namespace
//! - **Targets**: Capability markers and marker classes
//! - **Drag**: Drop-zone highlight styling
//! - **Animation**: Result reveal timing
//! - **Notifications**: Toast lifecycle timing

// ==========================================================================
// Storage Defaults
// ==========================================================================

/// Prefix of every persisted field key (`ocr_<field id>`).
pub const DEFAULT_STORAGE_NAMESPACE: &str = "ocr";

// ==========================================================================
// Target Defaults
// ==========================================================================

/// Attribute declaring an element's role to this layer.
pub const DEFAULT_MARKER_ATTRIBUTE: &str = "data-ocr-role";

/// Marker value for drag-and-drop upload targets.
pub const DEFAULT_DROP_ZONE_MARKER: &str = "drop-zone";

/// Marker value for the control that starts recognition.
pub const DEFAULT_RUN_OCR_MARKER: &str = "run-ocr";

/// Id fragment identifying legacy upload targets (`upload-document`).
pub const DEFAULT_UPLOAD_ID_FRAGMENT: &str = "upload";

/// Id fragment identifying the legacy run button (`run-ocr-btn`).
pub const DEFAULT_RUN_OCR_ID_FRAGMENT: &str = "run-ocr";

/// Class marking recognition result cards.
pub const DEFAULT_RESULT_CLASS: &str = "result";

/// Class carried by every modal dialog.
pub const DEFAULT_MODAL_CLASS: &str = "modal";

/// Class carried by modal dialogs while they are open.
pub const DEFAULT_MODAL_SHOWN_CLASS: &str = "show";

/// Class of a modal's dismiss button.
pub const DEFAULT_CLOSE_CLASS: &str = "btn-close";

// ==========================================================================
// Drag Defaults
// ==========================================================================

/// Background applied to a drop zone while a file hovers over it.
pub const DEFAULT_HIGHLIGHT_BACKGROUND: &str = "linear-gradient(135deg, #e3f2fd 0%, #bbdefb 100%)";

/// Border color applied to a drop zone while a file hovers over it.
pub const DEFAULT_HIGHLIGHT_BORDER_COLOR: &str = "#2196f3";

// ==========================================================================
// Animation Defaults
// ==========================================================================

/// Delay between inserting a result and starting its transition (ms).
pub const DEFAULT_REVEAL_DELAY_MS: u32 = 100;

/// Minimum reveal delay (ms). Zero would collapse both phases into one tick.
pub const MIN_REVEAL_DELAY_MS: u32 = 1;

/// Maximum reveal delay (ms).
pub const MAX_REVEAL_DELAY_MS: u32 = 2_000;

/// Duration of the reveal transition (ms).
pub const DEFAULT_TRANSITION_MS: u32 = 600;

/// Minimum reveal transition (ms).
pub const MIN_TRANSITION_MS: u32 = 0;

/// Maximum reveal transition (ms).
pub const MAX_TRANSITION_MS: u32 = 5_000;

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// How long a toast stays fully visible (ms).
pub const DEFAULT_NOTIFICATION_DISPLAY_MS: u32 = 3_000;

/// Minimum toast display time (ms).
pub const MIN_NOTIFICATION_DISPLAY_MS: u32 = 500;

/// Maximum toast display time (ms).
pub const MAX_NOTIFICATION_DISPLAY_MS: u32 = 60_000;

/// Duration of the slide-out animation before removal (ms).
pub const DEFAULT_NOTIFICATION_FADE_MS: u32 = 300;

/// Minimum slide-out duration (ms).
pub const MIN_NOTIFICATION_FADE_MS: u32 = 0;

/// Maximum slide-out duration (ms).
pub const MAX_NOTIFICATION_FADE_MS: u32 = 5_000;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Default number of diagnostic events kept in memory.
pub const DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY: usize =
    crate::domain::diagnostics::buffer_capacity_bounds::DEFAULT;
