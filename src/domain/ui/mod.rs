// SPDX-License-Identifier: MPL-2.0
//! UI domain types.
//!
//! This module contains page-related value objects that are independent
//! of any DOM binding.

pub mod newtypes;

// Re-export commonly used types
pub use newtypes::{Key, KeyPress, Millis, NodeHandle, SlideOffset, StorageKey};
