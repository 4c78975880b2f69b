// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters implement.
//! These traits use only domain types, ensuring the components stay independent
//! of `web-sys` and can run against the in-memory page.
//!
//! # Available Ports
//!
//! - [`dom`]: Queries and mutations on the rendered page
//! - [`storage`]: Persistent string key-value storage
//!
//! # Design Notes
//!
//! - All traits use domain types only (no `web_sys` handles)
//! - Nothing here is `Send`: the page runs on a single event loop
//! - No `async fn`: asynchronous work is requested through
//!   [`Effect`](crate::app::Effect)s and reported back as messages
//!
//! # Example
//!
//! ```
//! use ocr_lens::application::port::{Dom, ElementQuery};
//!
//! fn count_results(dom: &impl Dom) -> usize {
//!     dom.query(&ElementQuery::class("result")).len()
//! }
//! ```

pub mod dom;
pub mod storage;

// Re-export main types for convenience
pub use dom::{ControlKind, Dom, ElementQuery, ElementSpec, FormControl};
pub use storage::{KeyValueStore, StorageError};
