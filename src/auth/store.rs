//! Durable persistence for the credential and session snapshot.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::rc::Rc;

use crate::auth::storage::StorageBackend;
use crate::net::types::SessionUser;

/// Storage key holding the raw bearer token.
pub const TOKEN_KEY: &str = "token";
/// Storage key holding the serialized [`SessionUser`] snapshot.
pub const USER_KEY: &str = "currentUser";

/// Persists the credential and the session user snapshot across reloads.
///
/// Two keys are written on save: the raw token (primary read path) and the
/// snapshot with the token embedded. The embedded copy keeps readers of the
/// older storage shape working and covers a partial write of the raw key,
/// so token lookup falls back to it. There is no transactional guarantee
/// across the two keys.
pub struct TokenStore {
    backend: Rc<dyn StorageBackend>,
}

impl TokenStore {
    pub fn new(backend: Rc<dyn StorageBackend>) -> Self {
        Self { backend }
    }

    /// Write the credential and snapshot, overwriting any prior values.
    /// A failed write is logged and otherwise ignored.
    pub fn save(&self, user: &SessionUser) {
        if !self.backend.set(TOKEN_KEY, &user.token) {
            leptos::logging::warn!("session: failed to persist credential");
        }
        match serde_json::to_string(user) {
            Ok(json) => {
                if !self.backend.set(USER_KEY, &json) {
                    leptos::logging::warn!("session: failed to persist user snapshot");
                }
            }
            Err(err) => {
                leptos::logging::warn!("session: snapshot serialization failed: {err}");
            }
        }
    }

    /// Read the persisted snapshot. Absent or unparseable data is treated
    /// as "no session" and never surfaced as an error.
    pub fn load_user(&self) -> Option<SessionUser> {
        let raw = self.backend.get(USER_KEY)?;
        serde_json::from_str(&raw).ok()
    }

    /// Read the credential. Tries the raw token key first, then falls back
    /// to the token embedded in the snapshot.
    pub fn load_credential(&self) -> Option<String> {
        if let Some(token) = self.backend.get(TOKEN_KEY) {
            return Some(token);
        }
        self.load_user().map(|user| user.token)
    }

    /// Remove both keys.
    pub fn clear(&self) {
        self.backend.remove(TOKEN_KEY);
        self.backend.remove(USER_KEY);
    }
}
