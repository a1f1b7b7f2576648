// Persistence of the zoom level behind a small key-value trait.

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::collections::HashMap;

use crate::error::{StorageError, ZoomError};
use crate::model::ZoomLevel;

pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Browser `localStorage`.
pub struct LocalStore {
    inner: web_sys::Storage,
}

impl LocalStore {
    pub fn open() -> Result<Self, StorageError> {
        let win = web_sys::window().ok_or(StorageError::Unavailable)?;
        match win.local_storage() {
            Ok(Some(inner)) => Ok(Self { inner }),
            _ => Err(StorageError::Unavailable),
        }
    }
}

impl KeyValueStore for LocalStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner
            .get_item(key)
            .map_err(|e| StorageError::Read(format!("{e:?}")))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.inner
            .set_item(key, value)
            .map_err(|e| StorageError::Write(format!("{e:?}")))
    }
}

#[cfg(test)]
#[derive(Default)]
pub struct MemoryStore {
    items: RefCell<HashMap<String, String>>,
}

#[cfg(test)]
impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Outcome of reading the persisted level at startup.
#[derive(Debug, Clone, PartialEq)]
pub enum Loaded {
    Stored(ZoomLevel),
    Missing,
    Rejected(ZoomError),
}

impl Loaded {
    /// The level to start with; anything but a valid stored value means the default.
    pub fn level(&self) -> ZoomLevel {
        match self {
            Loaded::Stored(level) => *level,
            Loaded::Missing | Loaded::Rejected(_) => ZoomLevel::default(),
        }
    }
}

pub fn load_zoom(store: &impl KeyValueStore, key: &str) -> Result<Loaded, StorageError> {
    Ok(match store.get_item(key)? {
        // an empty string counts as absent, as a falsy read would
        None => Loaded::Missing,
        Some(raw) if raw.is_empty() => Loaded::Missing,
        Some(raw) => match ZoomLevel::parse_stored(&raw) {
            Ok(level) => Loaded::Stored(level),
            Err(e) => Loaded::Rejected(e),
        },
    })
}

pub fn save_zoom(
    store: &impl KeyValueStore,
    key: &str,
    level: ZoomLevel,
) -> Result<(), StorageError> {
    store.set_item(key, &level.to_stored())
}
