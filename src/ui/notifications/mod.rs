// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Notifications appear in the top-right corner, stay for a fixed time,
//! slide out and are removed. They never block interaction.
//!
//! # Components
//!
//! - [`notification`] - Core `Notification` struct with severity levels
//! - [`manager`] - `Manager` for insertion and lifecycle
//! - [`toast`] - Element and keyframe construction
//!
//! # Usage
//!
//! ```
//! use ocr_lens::infrastructure::memory::MemoryDom;
//! use ocr_lens::ui::notifications::{Manager, Notification};
//!
//! let mut dom = MemoryDom::new();
//! let mut manager = Manager::default();
//! let effects = manager.push(&mut dom, Notification::success("Copied"));
//! assert_eq!(effects.len(), 1);
//! assert_eq!(manager.visible_count(), 1);
//! ```

pub mod manager;
pub mod notification;
pub mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Severity};
