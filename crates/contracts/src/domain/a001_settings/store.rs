use super::aggregate::Settings;
use crate::shared::errors::{SettingsError, StorageError};
use std::cell::RefCell;
use std::collections::HashMap;

/// String key-value storage (browser `localStorage` or an in-memory map)
pub trait KeyValueStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// In-memory storage for tests and for hosts without `localStorage`
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

/// Storage keys of the two settings values
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsKeys {
    pub credential: String,
    pub endpoint_url: String,
}

impl Default for SettingsKeys {
    fn default() -> Self {
        Self {
            credential: "credential".to_string(),
            endpoint_url: "endpointUrl".to_string(),
        }
    }
}

/// Persistence boundary for `Settings`
#[derive(Debug, Clone)]
pub struct SettingsStore<S> {
    storage: S,
    keys: SettingsKeys,
}

impl<S: KeyValueStorage> SettingsStore<S> {
    pub fn new(storage: S) -> Self {
        Self::with_keys(storage, SettingsKeys::default())
    }

    pub fn with_keys(storage: S, keys: SettingsKeys) -> Self {
        Self { storage, keys }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Both values or nothing; read failures count as absence
    pub fn load(&self) -> Settings {
        match self.read_raw() {
            (Some(credential), Some(endpoint_url))
                if !credential.is_empty() && !endpoint_url.is_empty() =>
            {
                Settings::populated(credential, endpoint_url)
            }
            _ => Settings::empty(),
        }
    }

    /// Persist the trimmed pair. On a failed write the previous values are put back.
    pub fn save(&self, credential: &str, endpoint_url: &str) -> Result<Settings, SettingsError> {
        let credential = credential.trim();
        let endpoint_url = endpoint_url.trim();
        if credential.is_empty() || endpoint_url.is_empty() {
            return Err(SettingsError::Validation);
        }

        let previous = self.read_raw();
        if let Err(e) = self.write_pair(credential, endpoint_url) {
            log::error!("Saving settings failed, restoring previous values: {}", e);
            self.restore(previous);
            return Err(e.into());
        }

        log::info!("Settings saved");
        Ok(Settings::populated(credential, endpoint_url))
    }

    /// Remove both values. Idempotent.
    pub fn clear(&self) {
        for key in [&self.keys.credential, &self.keys.endpoint_url] {
            if let Err(e) = self.storage.remove(key) {
                log::warn!("Failed to remove '{}' from storage: {}", key, e);
            }
        }
        log::info!("Settings cleared");
    }

    fn read_raw(&self) -> (Option<String>, Option<String>) {
        let read = |key: &str| match self.storage.get(key) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("Failed to read '{}' from storage: {}", key, e);
                None
            }
        };
        (read(&self.keys.credential), read(&self.keys.endpoint_url))
    }

    fn write_pair(&self, credential: &str, endpoint_url: &str) -> Result<(), StorageError> {
        self.storage.set(&self.keys.credential, credential)?;
        self.storage.set(&self.keys.endpoint_url, endpoint_url)?;
        Ok(())
    }

    fn restore(&self, previous: (Option<String>, Option<String>)) {
        let (credential, endpoint_url) = previous;
        for (key, value) in [
            (&self.keys.credential, credential),
            (&self.keys.endpoint_url, endpoint_url),
        ] {
            let result = match value {
                Some(v) => self.storage.set(key, &v),
                None => self.storage.remove(key),
            };
            if let Err(e) = result {
                log::warn!("Failed to restore '{}': {}", key, e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    /// Lets `n` more `set` calls through once armed, fails the next one, then recovers
    struct FlakyStorage {
        inner: MemoryStorage,
        fail_after: Cell<Option<usize>>,
    }

    impl FlakyStorage {
        fn new() -> Self {
            Self {
                inner: MemoryStorage::new(),
                fail_after: Cell::new(None),
            }
        }

        fn arm(&self, n: usize) {
            self.fail_after.set(Some(n));
        }
    }

    impl KeyValueStorage for FlakyStorage {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            self.inner.get(key)
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
            match self.fail_after.get() {
                Some(0) => {
                    self.fail_after.set(None);
                    Err(StorageError::Operation("QuotaExceededError".into()))
                }
                Some(n) => {
                    self.fail_after.set(Some(n - 1));
                    self.inner.set(key, value)
                }
                None => self.inner.set(key, value),
            }
        }

        fn remove(&self, key: &str) -> Result<(), StorageError> {
            self.inner.remove(key)
        }
    }

    #[test]
    fn test_save_then_load() {
        let store = SettingsStore::new(MemoryStorage::new());
        let pairs = [
            ("key-1", "https://a.example/v1:generate"),
            ("ключ", "http://localhost:8080"),
            ("x", "y"),
        ];
        for (credential, endpoint) in pairs {
            store.save(credential, endpoint).unwrap();
            assert_eq!(store.load(), Settings::populated(credential, endpoint));
        }
    }

    #[test]
    fn test_save_trims() {
        let store = SettingsStore::new(MemoryStorage::new());
        store.save("  key \n", "\thttps://x ").unwrap();
        assert_eq!(store.load().pair(), Some(("key", "https://x")));
    }

    #[test]
    fn test_save_rejects_empty_and_keeps_previous() {
        let store = SettingsStore::new(MemoryStorage::new());
        store.save("old", "https://old").unwrap();

        assert_eq!(store.save("   ", "https://new"), Err(SettingsError::Validation));
        assert_eq!(store.save("new", ""), Err(SettingsError::Validation));
        assert_eq!(store.load(), Settings::populated("old", "https://old"));
    }

    #[test]
    fn test_clear_then_load_is_empty() {
        let store = SettingsStore::new(MemoryStorage::new());
        store.clear();
        assert_eq!(store.load(), Settings::empty());

        store.save("k", "u").unwrap();
        store.clear();
        assert_eq!(store.load(), Settings::empty());
        assert!(store.storage().is_empty());
    }

    #[test]
    fn test_partial_storage_loads_as_empty() {
        let storage = MemoryStorage::new();
        storage.set("credential", "only-key").unwrap();
        let store = SettingsStore::new(storage);
        assert_eq!(store.load(), Settings::empty());
    }

    #[test]
    fn test_failed_second_write_restores_previous() {
        let store = SettingsStore::new(FlakyStorage::new());
        store.save("old", "https://old").unwrap();

        store.storage().arm(1);
        let result = store.save("new", "https://new");
        assert!(matches!(result, Err(SettingsError::Storage(_))));
        assert_eq!(store.load(), Settings::populated("old", "https://old"));
    }

    #[test]
    fn test_failed_write_on_empty_store_leaves_nothing() {
        let store = SettingsStore::new(FlakyStorage::new());
        store.storage().arm(1);
        assert!(store.save("k", "u").is_err());
        assert_eq!(store.load(), Settings::empty());
        assert!(store.storage().inner.is_empty());
    }

    #[test]
    fn test_custom_keys() {
        let keys = SettingsKeys {
            credential: "gApiKey".into(),
            endpoint_url: "gModelUrl".into(),
        };
        let store = SettingsStore::with_keys(MemoryStorage::new(), keys);
        store.save("k", "u").unwrap();
        assert_eq!(
            store.storage().get("gModelUrl").unwrap().as_deref(),
            Some("u")
        );
    }
}
