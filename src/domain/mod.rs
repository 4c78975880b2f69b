// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core value types with ZERO external dependencies.
//!
//! This module contains pure domain types and value objects. It has no
//! dependencies on external crates (except `std`) so it can be shared by the
//! browser adapter and the in-memory page alike.
//!
//! # Modules
//!
//! - [`diagnostics`]: Diagnostics types ([`BufferCapacity`](diagnostics::BufferCapacity))
//! - [`ui`]: Page value objects ([`NodeHandle`](ui::NodeHandle),
//!   [`StorageKey`](ui::StorageKey), [`KeyPress`](ui::KeyPress), [`Millis`](ui::Millis))

pub mod diagnostics;
pub mod ui;
