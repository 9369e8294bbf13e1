use contracts::domain::a001_settings::KeyValueStorage;
use contracts::shared::errors::StorageError;
use web_sys::window;

fn get_local_storage() -> Result<web_sys::Storage, StorageError> {
    window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(StorageError::Unavailable)
}

/// `window.localStorage`, looked up on every call
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserLocalStorage;

impl KeyValueStorage for BrowserLocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        get_local_storage()?
            .get_item(key)
            .map_err(|e| StorageError::Operation(format!("{e:?}")))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        get_local_storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Operation(format!("{e:?}")))
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        get_local_storage()?
            .remove_item(key)
            .map_err(|e| StorageError::Operation(format!("{e:?}")))
    }
}
