// SPDX-License-Identifier: MPL-2.0
//! In-memory adapters.
//!
//! [`MemoryDom`] and [`MemoryStore`] implement the ports without a browser;
//! [`Runtime`] hosts an [`App`](crate::app::App) on them with a virtual
//! clock. Used by the test suites and by native tooling.

mod dom;
mod runtime;
mod storage;

pub use dom::{MemoryDom, NodeBuilder};
pub use runtime::{Dispatch, Runtime};
pub use storage::MemoryStore;
