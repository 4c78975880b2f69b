// SPDX-License-Identifier: MPL-2.0
//! `ocr_lens` is the client-side interactivity layer of the OCR platform's
//! upload page.
//!
//! It highlights drop zones during drag-and-drop, animates newly inserted
//! recognition results, shows toast notifications, handles the Ctrl+Enter and
//! Escape shortcuts, and remembers form field values across page loads. The
//! behavior lives in a target-independent core driven through the
//! [`application::port`] traits; on `wasm32` the [`infrastructure::web`]
//! adapters bind it to the real page.

#![doc(html_root_url = "https://docs.rs/ocr_lens/0.3.0")]

pub mod app;
pub mod application;
pub mod config;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod ui;
