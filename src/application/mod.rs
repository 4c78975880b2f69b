// SPDX-License-Identifier: MPL-2.0
//! Application layer - Ports.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - Components in [`crate::ui`] only talk to the page through these ports

pub mod port;
