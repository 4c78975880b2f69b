// SPDX-License-Identifier: MPL-2.0
//! Key-value storage port definition.
//!
//! This module defines the [`KeyValueStore`] trait backing field persistence.
//! The browser adapter wraps `window.localStorage`; the in-memory store backs
//! tests. Access is fallible because browsers may refuse storage entirely
//! (private browsing, disabled cookies, exhausted quota).

use std::fmt;

// =============================================================================
// StorageError
// =============================================================================

/// Errors raised by a storage backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// Storage is not available in this context.
    Unavailable(String),
    /// A read was rejected by the backend.
    Read(String),
    /// A write was rejected by the backend (quota, security policy).
    Write(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Unavailable(msg) => write!(f, "Storage unavailable: {msg}"),
            StorageError::Read(msg) => write!(f, "Storage read failed: {msg}"),
            StorageError::Write(msg) => write!(f, "Storage write failed: {msg}"),
        }
    }
}

impl std::error::Error for StorageError {}

// =============================================================================
// KeyValueStore
// =============================================================================

/// String key-value storage that survives page loads.
///
/// Writes are last-write-wins; there is no locking across tabs.
pub trait KeyValueStore {
    /// Reads the value stored under `key`.
    ///
    /// Returns `Ok(None)` when nothing is stored.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_errors_display_their_cause() {
        let err = StorageError::Write("quota exceeded".into());
        assert_eq!(err.to_string(), "Storage write failed: quota exceeded");
    }
}
