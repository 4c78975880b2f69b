// SPDX-License-Identifier: MPL-2.0
//! In-memory key-value store.

use crate::application::port::{KeyValueStore, StorageError};
use std::collections::BTreeMap;

/// `localStorage` stand-in. Can be switched into a failing mode to mimic
/// browsers that refuse storage.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
    failure: Option<String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds an entry, bypassing the failure mode.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Reads an entry, bypassing the failure mode.
    #[must_use]
    pub fn value(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    /// Makes every later `get` and `set` fail with `reason`.
    pub fn fail_with(&mut self, reason: impl Into<String>) {
        self.failure = Some(reason.into());
    }

    pub fn recover(&mut self) {
        self.failure = None;
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        if let Some(reason) = &self.failure {
            return Err(StorageError::Unavailable(reason.clone()));
        }
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if let Some(reason) = &self.failure {
            return Err(StorageError::Unavailable(reason.clone()));
        }
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
