// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`.
//!
//! # Available Adapters
//!
//! - [`memory`]: In-memory page, storage and runtime (tests, native tooling)
//! - `web`: Browser page, `localStorage` and runtime (`wasm32` only)
//!
//! [`dispatch`] and [`registry`] hold the browser runtime's bookkeeping. They
//! do not touch `web-sys` and build on every target.

pub mod dispatch;
pub mod memory;
pub mod registry;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use memory::{MemoryDom, MemoryStore, Runtime};
