//! Preference store capability and its implementations.
//!
//! SYSTEM CONTEXT
//! ==============
//! The behaviors never touch `localStorage` directly; they go through
//! [`PreferenceStore`] so tests can substitute [`MemoryPrefs`] and so an
//! unavailable or restricted storage area degrades to a silent no-op
//! instead of a fault.

#[cfg(test)]
#[path = "prefs_test.rs"]
mod prefs_test;

use std::cell::RefCell;
use std::collections::HashMap;

/// Get/set access to origin-scoped string preferences.
pub trait PreferenceStore {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Write `value` under `key`. Failures are swallowed; persistence is
    /// best-effort.
    fn set(&self, key: &str, value: &str);
}

/// Browser `localStorage` store. Absent or access-restricted storage reads
/// as empty and drops writes.
pub struct LocalStoragePrefs;

impl PreferenceStore for LocalStoragePrefs {
    fn get(&self, key: &str) -> Option<String> {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        storage.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            log::debug!("localStorage unavailable; {key} not persisted");
            return;
        };
        let _ = storage.set_item(key, value);
    }
}

/// In-memory store for tests and non-browser embeddings.
#[derive(Default)]
pub struct MemoryPrefs {
    values: RefCell<HashMap<String, String>>,
}

impl MemoryPrefs {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPrefs {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values.borrow_mut().insert(key.to_owned(), value.to_owned());
    }
}
