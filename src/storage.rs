//! Browser Storage
//!
//! `KeyValueStore` backed by `window.localStorage`.

use gloo_storage::{LocalStorage, Storage};
use storefront_core::{KeyValueStore, StorageError};

#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStore;

impl KeyValueStore for LocalStore {
    fn read_raw(&self, key: &str) -> Result<Option<String>, StorageError> {
        LocalStorage::raw()
            .get_item(key)
            .map_err(|e| StorageError::Backend(format!("{:?}", e)))
    }

    fn write_raw(&self, key: &str, value: String) -> Result<(), StorageError> {
        LocalStorage::raw()
            .set_item(key, &value)
            .map_err(|e| StorageError::Backend(format!("{:?}", e)))
    }

    fn remove(&self, key: &str) {
        LocalStorage::delete(key);
    }
}

/// Preferred language of the browser, e.g. `ja-JP`
pub fn navigator_language() -> Option<String> {
    web_sys::window().and_then(|window| window.navigator().language())
}
