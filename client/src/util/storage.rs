//! Durable key-value storage port.
//!
//! SYSTEM CONTEXT
//! ==============
//! The sign-in flow persists the session through this port instead of touching
//! `localStorage` directly, so tests can substitute [`MemoryStore`].

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::cell::RefCell;
use std::collections::BTreeMap;

/// Storage key holding the raw session token.
pub const TOKEN_KEY: &str = "token";
/// Storage key holding the JSON-serialized session user.
pub const USER_KEY: &str = "user";

/// Failure writing to durable storage.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("storage unavailable")]
    Unavailable,
    #[error("storage write failed for key {0}")]
    WriteFailed(String),
}

/// String key-value store surviving page reloads.
pub trait KeyValueStore {
    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the backing store is missing or rejects the write.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Read the value stored under `key`.
    fn get(&self, key: &str) -> Option<String>;
}

/// Browser `window.localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl KeyValueStore for LocalStorage {
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            let storage = local_storage().ok_or(StorageError::Unavailable)?;
            storage
                .set_item(key, value)
                .map_err(|_| StorageError::WriteFailed(key.to_owned()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Err(StorageError::Unavailable)
        }
    }

    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }
}

/// In-process store, used off-browser and in tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<BTreeMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }
}
