// SPDX-License-Identifier: MPL-2.0
//! Diagnostics module for recording page activity.
//!
//! Components record what they did ([`PageAction`]) and what they skipped
//! over ([`WarningEvent`]) through a [`DiagnosticsHandle`]. Events are kept in
//! a memory-bounded [`CircularBuffer`] and can be exported as JSON. The
//! browser runtime mirrors warnings to the developer console.
//!
//! # Architecture
//!
//! - [`CircularBuffer`]: Generic ring buffer with configurable capacity
//! - [`DiagnosticEvent`]: Timestamped action or warning
//! - [`BufferCapacity`]: Newtype for validated buffer capacity bounds

mod buffer;
mod collector;
mod events;

pub use buffer::{BufferCapacity, CircularBuffer};
pub use collector::{DiagnosticReport, DiagnosticsHandle, EventSink};
pub use events::{DiagnosticEvent, DiagnosticEventKind, PageAction, WarningEvent, WarningType};
