//! Durable string key-value storage.
//!
//! Client-side (hydrate): `window.localStorage` via `web-sys`.
//! Everywhere else: [`MemoryStorage`], a shared in-process map.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::AuthError;

/// Synchronous string-keyed, string-valued storage.
///
/// No locking: each store owns disjoint keys, and writes from other
/// execution contexts are not guarded against.
pub trait KeyValueStore {
    /// # Errors
    ///
    /// Returns [`AuthError::StorageRead`] if the backend is unavailable.
    fn get(&self, key: &str) -> Result<Option<String>, AuthError>;

    /// # Errors
    ///
    /// Returns [`AuthError::StorageWrite`] on quota or availability failure.
    fn set(&self, key: &str, value: &str) -> Result<(), AuthError>;

    /// Remove `key`. Removing a missing key succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::StorageWrite`] on availability failure.
    fn remove(&self, key: &str) -> Result<(), AuthError>;
}

/// In-memory storage. Clones share the same entries, so a test can keep a
/// handle, build a fresh context over it, and observe a "reload".
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
    read_only: Rc<Cell<bool>>,
    unreadable: Rc<Cell<bool>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the storage with existing entries.
    #[must_use]
    pub fn with_entries<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let storage = Self::default();
        storage
            .entries
            .borrow_mut()
            .extend(entries.into_iter().map(|(k, v)| (k.into(), v.into())));
        storage
    }

    /// Make every subsequent write or remove fail, like a full quota.
    pub fn set_read_only(&self, read_only: bool) {
        self.read_only.set(read_only);
    }

    /// Make every subsequent read fail, like storage blocked by browser
    /// privacy settings.
    pub fn set_unreadable(&self, unreadable: bool) {
        self.unreadable.set(unreadable);
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.borrow().contains_key(key)
    }

    #[must_use]
    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    fn check_writable(&self, key: &str) -> Result<(), AuthError> {
        if self.read_only.get() {
            return Err(AuthError::write(key, "quota exceeded"));
        }
        Ok(())
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, AuthError> {
        if self.unreadable.get() {
            return Err(AuthError::read(key, "access denied"));
        }
        Ok(self.raw(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AuthError> {
        self.check_writable(key)?;
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), AuthError> {
        self.check_writable(key)?;
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

/// `window.localStorage`. Every call re-resolves the storage object so a
/// browser that revokes access mid-session yields errors, not panics.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "hydrate")]
fn local_storage() -> Result<web_sys::Storage, String> {
    let window = web_sys::window().ok_or("no window")?;
    window
        .local_storage()
        .map_err(|e| format!("{e:?}"))?
        .ok_or_else(|| "localStorage unavailable".to_owned())
}

#[cfg(feature = "hydrate")]
impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, AuthError> {
        let storage = local_storage().map_err(|e| AuthError::read(key, e))?;
        storage.get_item(key).map_err(|e| AuthError::read(key, format!("{e:?}")))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AuthError> {
        let storage = local_storage().map_err(|e| AuthError::write(key, e))?;
        storage
            .set_item(key, value)
            .map_err(|e| AuthError::write(key, format!("{e:?}")))
    }

    fn remove(&self, key: &str) -> Result<(), AuthError> {
        let storage = local_storage().map_err(|e| AuthError::write(key, e))?;
        storage.remove_item(key).map_err(|e| AuthError::write(key, format!("{e:?}")))
    }
}
