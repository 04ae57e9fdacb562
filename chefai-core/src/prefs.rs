//! Persisted UI preferences: display language and dark mode.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::StorageError;
use crate::storage::{keys, KeyValueStore};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Preferences {
    pub language: String,
    pub dark_mode: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            dark_mode: false,
        }
    }
}

impl Preferences {
    /// Load preferences, falling back to defaults for missing or
    /// unreadable values.
    pub fn load(store: &dyn KeyValueStore) -> Result<Self, StorageError> {
        let defaults = Preferences::default();
        let language = store.get(keys::LANGUAGE)?.unwrap_or(defaults.language);
        let dark_mode = match store.get(keys::DARK_MODE)?.as_deref() {
            Some("true") => true,
            Some(_) | None => false,
        };
        Ok(Self {
            language,
            dark_mode,
        })
    }

    pub fn save(&self, store: &dyn KeyValueStore) -> Result<(), StorageError> {
        store.set(keys::LANGUAGE, &self.language)?;
        store.set(keys::DARK_MODE, if self.dark_mode { "true" } else { "false" })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn defaults_when_store_is_empty() {
        let store = MemoryStore::new();
        let prefs = Preferences::load(&store).unwrap();
        assert_eq!(prefs, Preferences::default());
    }

    #[test]
    fn save_and_reload() {
        let store = MemoryStore::new();
        let prefs = Preferences {
            language: "fr".to_string(),
            dark_mode: true,
        };
        prefs.save(&store).unwrap();
        assert_eq!(Preferences::load(&store).unwrap(), prefs);
    }

    #[test]
    fn unreadable_dark_mode_falls_back_to_light() {
        let store = MemoryStore::new();
        store.set(keys::DARK_MODE, "maybe").unwrap();
        assert!(!Preferences::load(&store).unwrap().dark_mode);
    }
}
