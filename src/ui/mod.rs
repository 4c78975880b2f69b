// SPDX-License-Identifier: MPL-2.0
//! Page behaviors and their state.
//!
//! Each behavior follows the Elm-style "state down, messages up" pattern: a
//! small state holder with an `update` over its own `Message`, returning
//! effects for the host runtime to run. None of them calls another.
//!
//! # Behaviors
//!
//! - [`drag_zone`] - Highlight upload targets during drag-and-drop
//! - [`animator`] - Entrance animation for inserted results
//! - [`notifications`] - Toast notification system for user feedback
//! - [`shortcuts`] - Ctrl+Enter and Escape handling
//!
//! # Shared Infrastructure
//!
//! - [`targets`] - Capability markers and element queries
//! - [`state`] - Reusable state holders (drag)
//! - [`design_tokens`] - CSS constants (colors, spacing, sizing)

pub mod animator;
pub mod design_tokens;
pub mod drag_zone;
pub mod notifications;
pub mod shortcuts;
pub mod state;
pub mod targets;
