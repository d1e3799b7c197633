//! Persistence port for user preferences.
//!
//! The controller depends on [`KeyValueStore`] only; the browser build plugs in
//! [`LocalStorage`], tests and non-web builds use [`MemoryStore`]. [`Preferences`] layers the two
//! fixed slots on top: the favorite-id set and the global shiny flag. Both are JSON encoded and
//! every write fully overwrites the previous value.

use std::{cell::RefCell, collections::BTreeSet, collections::HashMap, rc::Rc};

use dioxus_logger::tracing;
use serde::{de::DeserializeOwned, Serialize};

use crate::error::Error;

/// Slot holding the JSON array of favorite ids.
pub const FAVORITES_KEY: &str = "pokedexFavorites";
/// Slot holding the JSON boolean global shiny preference.
pub const SHINY_KEY: &str = "pokedexShowShiny";

/// String key-value store with browser `localStorage` semantics.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, Error>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), Error>;
    fn remove_item(&self, key: &str) -> Result<(), Error>;
}

/// In-process store. Clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    items: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, Error> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), Error> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), Error> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

/// The browser's `window.localStorage`.
#[cfg(feature = "web")]
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

#[cfg(feature = "web")]
impl LocalStorage {
    fn storage() -> Result<web_sys::Storage, Error> {
        web_sys::window()
            .ok_or_else(|| Error::Storage("no window available".to_string()))?
            .local_storage()
            .map_err(|e| Error::Storage(format!("{e:?}")))?
            .ok_or_else(|| Error::Storage("localStorage is disabled".to_string()))
    }
}

#[cfg(feature = "web")]
impl KeyValueStore for LocalStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, Error> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| Error::Storage(format!("{e:?}")))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), Error> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| Error::Storage(format!("{e:?}")))
    }

    fn remove_item(&self, key: &str) -> Result<(), Error> {
        Self::storage()?
            .remove_item(key)
            .map_err(|e| Error::Storage(format!("{e:?}")))
    }
}

/// Typed access to the two preference slots.
#[derive(Debug, Clone)]
pub struct Preferences<S> {
    store: S,
}

impl<S: KeyValueStore> Preferences<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Reads and decodes `key`.
    ///
    /// # Returns
    /// - `Ok(Some(T))` - The slot holds a decodable value
    /// - `Ok(None)` - The slot is empty, or held garbage which has now been removed
    /// - `Err(Error::Storage)` - The store itself failed
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, Error> {
        let Some(raw) = self.store.get_item(key)? else {
            return Ok(None);
        };

        match serde_json::from_str(&raw) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                tracing::warn!("Discarding corrupt preference {}: {}", key, e);
                self.store.remove_item(key)?;
                Ok(None)
            }
        }
    }

    pub fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), Error> {
        let raw = serde_json::to_string(value)?;
        self.store.set_item(key, &raw)
    }

    /// Restored favorite ids; empty when the slot is missing, corrupt or unreadable.
    pub fn load_favorites(&self) -> BTreeSet<u32> {
        self.get::<Vec<u32>>(FAVORITES_KEY)
            .unwrap_or_else(|e| {
                tracing::warn!("Failed to read favorites: {}", e);
                None
            })
            .map(|ids| ids.into_iter().collect())
            .unwrap_or_default()
    }

    pub fn save_favorites(&self, favorite_ids: &BTreeSet<u32>) -> Result<(), Error> {
        let ids: Vec<u32> = favorite_ids.iter().copied().collect();
        self.set(FAVORITES_KEY, &ids)
    }

    /// Restored global shiny flag; `false` when the slot is missing, corrupt or unreadable.
    pub fn load_shiny(&self) -> bool {
        self.get::<bool>(SHINY_KEY)
            .unwrap_or_else(|e| {
                tracing::warn!("Failed to read shiny preference: {}", e);
                None
            })
            .unwrap_or(false)
    }

    pub fn save_shiny(&self, shiny: bool) -> Result<(), Error> {
        self.set(SHINY_KEY, &shiny)
    }
}
