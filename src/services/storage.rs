use web_sys::{window, Storage};
use crate::error::StorageError;
use super::traits::KeyValueStore;

pub fn get_local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

/// `KeyValueStore` sobre `window.localStorage`
#[derive(Clone, Copy, Default)]
pub struct LocalStore;

impl KeyValueStore for LocalStore {
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = get_local_storage().ok_or(StorageError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|e| StorageError::Write(format!("{:?}", e)))
    }

    fn get(&self, key: &str) -> Option<String> {
        get_local_storage()?.get_item(key).ok()?
    }
}
