//! Key-value persistence port.
//!
//! The persisted surface of this product is a handful of scalar/JSON values
//! under fixed string keys: the premium flag, the daily free-use map, UI
//! preferences, and the admin flag. The port keeps the engine
//! storage-agnostic; callers pick a backend at startup and tests use the
//! in-memory fake. No transactional grouping; concurrent writers are
//! last-wins.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use crate::error::StorageError;

/// Fixed key names. Values are plain strings or JSON; no schema versioning.
pub mod keys {
    pub const PREMIUM: &str = "premium";
    pub const FEATURE_USAGE: &str = "feature_usage";
    pub const LANGUAGE: &str = "language";
    pub const DARK_MODE: &str = "dark_mode";
    pub const ADMIN_AUTHENTICATED: &str = "admin_authenticated";
}

/// Trait for key-value stores, enabling mockability in tests.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
    fn clear(&self) -> Result<(), StorageError>;
}

/// In-memory store for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.values.read().unwrap().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values
            .write()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.values.write().unwrap().remove(key);
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        self.values.write().unwrap().clear();
        Ok(())
    }
}

/// Single-file JSON store.
///
/// The whole map is read once at open and rewritten on every mutation. A
/// file that fails to parse starts the store empty rather than erroring;
/// the data here is preferences and trial counters, not anything critical.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    values: RwLock<HashMap<String, String>>,
}

impl JsonFileStore {
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();
        let values = match fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str::<HashMap<String, String>>(&raw) {
                Ok(map) => map,
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "store file unreadable, starting empty");
                    HashMap::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(e) => return Err(e.into()),
        };

        Ok(Self {
            path,
            values: RwLock::new(values),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, values: &HashMap<String, String>) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let raw = serde_json::to_string_pretty(values)
            .map_err(|e| StorageError::InvalidValue {
                key: self.path.display().to_string(),
                reason: e.to_string(),
            })?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.values.read().unwrap().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut values = self.values.write().unwrap();
        values.insert(key.to_string(), value.to_string());
        self.persist(&values)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut values = self.values.write().unwrap();
        values.remove(key);
        self.persist(&values)
    }

    fn clear(&self) -> Result<(), StorageError> {
        let mut values = self.values.write().unwrap();
        values.clear();
        self.persist(&values)
    }
}

/// Store wrapper that prefixes every key with a namespace.
///
/// Lets several profiles (users) share one backend without colliding on the
/// fixed key names.
pub struct ScopedStore {
    inner: Arc<dyn KeyValueStore>,
    prefix: String,
}

impl ScopedStore {
    pub fn new(inner: Arc<dyn KeyValueStore>, namespace: &str) -> Self {
        Self {
            inner,
            prefix: format!("{namespace}:"),
        }
    }

    fn scoped(&self, key: &str) -> String {
        format!("{}{}", self.prefix, key)
    }
}

impl KeyValueStore for ScopedStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner.get(&self.scoped(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.inner.set(&self.scoped(key), value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.inner.remove(&self.scoped(key))
    }

    // Clearing a scope clears the whole backend; the port has no scan
    // operation. Callers that need per-profile wipe should remove the fixed
    // keys individually.
    fn clear(&self) -> Result<(), StorageError> {
        self.inner.clear()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trip() {
        let store = MemoryStore::new();
        assert_eq!(store.get("missing").unwrap(), None);

        store.set(keys::LANGUAGE, "fr").unwrap();
        assert_eq!(store.get(keys::LANGUAGE).unwrap().as_deref(), Some("fr"));

        store.remove(keys::LANGUAGE).unwrap();
        assert_eq!(store.get(keys::LANGUAGE).unwrap(), None);
    }

    #[test]
    fn file_store_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");

        {
            let store = JsonFileStore::open(&path).unwrap();
            store.set(keys::PREMIUM, "true").unwrap();
            store.set(keys::DARK_MODE, "false").unwrap();
        }

        let store = JsonFileStore::open(&path).unwrap();
        assert_eq!(store.get(keys::PREMIUM).unwrap().as_deref(), Some("true"));
        assert_eq!(store.get(keys::DARK_MODE).unwrap().as_deref(), Some("false"));
    }

    #[test]
    fn file_store_starts_empty_on_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        fs::write(&path, "not json {{{").unwrap();

        let store = JsonFileStore::open(&path).unwrap();
        assert_eq!(store.get(keys::PREMIUM).unwrap(), None);
    }

    #[test]
    fn scoped_store_keeps_profiles_apart() {
        let backend: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        let alice = ScopedStore::new(backend.clone(), "alice");
        let bob = ScopedStore::new(backend.clone(), "bob");

        alice.set(keys::PREMIUM, "true").unwrap();
        assert_eq!(bob.get(keys::PREMIUM).unwrap(), None);
        assert_eq!(alice.get(keys::PREMIUM).unwrap().as_deref(), Some("true"));
    }
}
