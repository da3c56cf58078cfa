//! Key-value persistence capability backing the token store.
//!
//! The real backend is browser `localStorage`; tests and native builds use
//! an in-memory map. Storage failures are never fatal: setters report
//! success or failure, getters return `None` on any error.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Durable string key-value storage scoped to the browser origin.
pub trait StorageBackend {
    fn get(&self, key: &str) -> Option<String>;

    /// Write a value, returning `false` if the write did not take effect
    /// (quota exceeded, storage unavailable).
    fn set(&self, key: &str, value: &str) -> bool;

    fn remove(&self, key: &str);
}

/// In-memory backend for tests and non-browser builds. Cloning shares the
/// underlying map.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    items: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> bool {
        self.items.borrow_mut().insert(key.to_owned(), value.to_owned());
        true
    }

    fn remove(&self, key: &str) {
        self.items.borrow_mut().remove(key);
    }
}

/// `localStorage` backend. Requires a browser environment.
#[cfg(feature = "csr")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "csr")]
impl BrowserStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

#[cfg(feature = "csr")]
impl StorageBackend for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) -> bool {
        Self::storage().is_some_and(|s| s.set_item(key, value).is_ok())
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}
