// SPDX-License-Identifier: MPL-2.0
//! Component state holders.

pub mod drag;

pub use drag::DragState;
