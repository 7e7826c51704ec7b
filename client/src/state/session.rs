//! Session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `SessionStore` is created by the root component and provided through
//! context for the lifetime of the page. Login, sign-up flows, social buttons
//! and the navbar all read or write the same store.
//!
//! DESIGN
//! ======
//! At most one record is current. Every mutation updates memory and storage
//! together: `set` writes the chosen scope and removes the key from the other
//! one, `clear` removes it from both. A failed write leaves memory untouched.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::consts::SESSION_STORAGE_KEY;
use crate::net::types::SessionRecord;
use crate::util::storage::{BrowserStorage, KeyValueStore, StorageError, StorageScope, load_json, save_json};

/// Current user plus the storage the record is mirrored into.
#[derive(Clone, Debug, Default)]
pub struct SessionStore<S = BrowserStorage> {
    user: Option<SessionRecord>,
    storage: S,
}

impl<S: KeyValueStore> SessionStore<S> {
    /// Empty store; nothing is read from `storage`.
    pub fn new(storage: S) -> Self {
        Self { user: None, storage }
    }

    /// Store rehydrated from storage: persistent scope first, then tab scope.
    ///
    /// A stored value that does not parse is skipped and removed from its
    /// scope.
    pub fn hydrate(storage: S) -> Self {
        let user = StorageScope::ALL.into_iter().find_map(|scope| {
            match load_json::<SessionRecord, _>(&storage, scope, SESSION_STORAGE_KEY) {
                Ok(found) => found,
                Err(e) => {
                    log::warn!("dropping stored session in {scope:?}: {e}");
                    storage.remove(scope, SESSION_STORAGE_KEY);
                    None
                }
            }
        });
        if let Some(user) = &user {
            log::info!("restored session for {}", user.email);
        }
        Self { user, storage }
    }

    #[must_use]
    pub fn current_user(&self) -> Option<&SessionRecord> {
        self.user.as_ref()
    }

    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }

    /// Make `record` the current user and persist it to `scope`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Encode`] if the record cannot be serialized;
    /// memory and storage are unchanged in that case.
    pub fn set(&mut self, record: SessionRecord, scope: StorageScope) -> Result<(), StorageError> {
        save_json(&self.storage, scope, SESSION_STORAGE_KEY, &record)?;
        self.storage.remove(scope.other(), SESSION_STORAGE_KEY);
        self.user = Some(record);
        Ok(())
    }

    /// Forget the current user in memory and in both scopes.
    pub fn clear(&mut self) {
        self.user = None;
        for scope in StorageScope::ALL {
            self.storage.remove(scope, SESSION_STORAGE_KEY);
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}
