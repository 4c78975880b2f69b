// SPDX-License-Identifier: MPL-2.0
//! [`KeyValueStore`] backed by `window.localStorage`.

use super::describe;
use crate::application::port::{KeyValueStore, StorageError};
use web_sys::{Storage, Window};

/// `localStorage` adapter. Browsers may refuse storage altogether; every
/// access then reports [`StorageError::Unavailable`].
pub struct WebStorage {
    storage: Result<Storage, String>,
}

impl WebStorage {
    #[must_use]
    pub fn from_window(window: &Window) -> Self {
        let storage = match window.local_storage() {
            Ok(Some(storage)) => Ok(storage),
            Ok(None) => Err("localStorage is not available".to_string()),
            Err(err) => Err(describe(&err)),
        };
        Self { storage }
    }

    fn storage(&self) -> Result<&Storage, StorageError> {
        self.storage
            .as_ref()
            .map_err(|reason| StorageError::Unavailable(reason.clone()))
    }
}

impl KeyValueStore for WebStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage()?
            .get_item(key)
            .map_err(|err| StorageError::Read(describe(&err)))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage()?
            .set_item(key, value)
            .map_err(|err| StorageError::Write(describe(&err)))
    }
}
