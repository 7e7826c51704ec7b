//! Key-value browser storage behind a small trait.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session store mirrors its record into one of two storage scopes:
//! `localStorage` (survives browser restarts) or `sessionStorage` (cleared
//! when the tab closes). `BrowserStorage` talks to the real browser and
//! no-ops outside it; `MemoryStorage` backs tests.
//!
//! ERROR HANDLING
//! ==============
//! Unavailable storage is treated as empty. Only JSON encode/decode failures
//! surface as `StorageError`.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Which browser storage area a value lives in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StorageScope {
    /// `localStorage`.
    Persistent,
    /// `sessionStorage`.
    Tab,
}

impl StorageScope {
    pub const ALL: [Self; 2] = [Self::Persistent, Self::Tab];

    /// Scope chosen by the "remember me" checkbox.
    #[must_use]
    pub fn for_remember(remember: bool) -> Self {
        if remember { Self::Persistent } else { Self::Tab }
    }

    #[must_use]
    pub fn other(self) -> Self {
        match self {
            Self::Persistent => Self::Tab,
            Self::Tab => Self::Persistent,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("could not encode stored value: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("could not decode stored value: {0}")]
    Decode(#[source] serde_json::Error),
}

/// Raw string storage split into scopes.
pub trait KeyValueStore {
    fn get(&self, scope: StorageScope, key: &str) -> Option<String>;
    fn set(&self, scope: StorageScope, key: &str, value: &str);
    fn remove(&self, scope: StorageScope, key: &str);
}

/// Load a JSON value stored under `key`.
///
/// Returns `Ok(None)` when nothing is stored.
///
/// # Errors
///
/// Returns [`StorageError::Decode`] if the stored text is not valid JSON for `T`.
pub fn load_json<T, S>(store: &S, scope: StorageScope, key: &str) -> Result<Option<T>, StorageError>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    let Some(raw) = store.get(scope, key) else {
        return Ok(None);
    };
    serde_json::from_str(&raw).map(Some).map_err(StorageError::Decode)
}

/// Save a JSON value under `key`.
///
/// # Errors
///
/// Returns [`StorageError::Encode`] if `value` cannot be serialized.
pub fn save_json<T, S>(store: &S, scope: StorageScope, key: &str, value: &T) -> Result<(), StorageError>
where
    T: Serialize,
    S: KeyValueStore + ?Sized,
{
    let raw = serde_json::to_string(value).map_err(StorageError::Encode)?;
    store.set(scope, key, &raw);
    Ok(())
}

// =============================================================================
// BROWSER STORAGE
// =============================================================================

/// `localStorage` / `sessionStorage` of the current window.
///
/// Holds no handle; each call looks the storage up again, so the type stays
/// `Send + Sync` and can live inside reactive signals.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "hydrate")]
fn browser_area(scope: StorageScope) -> Option<web_sys::Storage> {
    let window = web_sys::window()?;
    let area = match scope {
        StorageScope::Persistent => window.local_storage(),
        StorageScope::Tab => window.session_storage(),
    };
    area.ok().flatten()
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, scope: StorageScope, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            browser_area(scope)?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (scope, key);
            None
        }
    }

    fn set(&self, scope: StorageScope, key: &str, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(area) = browser_area(scope) {
                if area.set_item(key, value).is_err() {
                    log::warn!("storage write rejected for {key}");
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (scope, key, value);
        }
    }

    fn remove(&self, scope: StorageScope, key: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(area) = browser_area(scope) {
                let _ = area.remove_item(key);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (scope, key);
        }
    }
}

// =============================================================================
// MEMORY STORAGE
// =============================================================================

/// In-process storage with the same scope semantics as the browser.
///
/// Clones share the same entries.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<(StorageScope, String), String>>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `key` is present in `scope`.
    #[must_use]
    pub fn contains(&self, scope: StorageScope, key: &str) -> bool {
        self.get(scope, key).is_some()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.lock().map_or(true, |entries| entries.is_empty())
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, scope: StorageScope, key: &str) -> Option<String> {
        let entries = self.entries.lock().ok()?;
        entries.get(&(scope, key.to_owned())).cloned()
    }

    fn set(&self, scope: StorageScope, key: &str, value: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert((scope, key.to_owned()), value.to_owned());
        }
    }

    fn remove(&self, scope: StorageScope, key: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.remove(&(scope, key.to_owned()));
        }
    }
}
