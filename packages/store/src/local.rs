//! # Browser `localStorage` session store
//!
//! [`LocalStorageSession`] is the [`SessionStore`] used on the **web
//! platform**. The token lives under a single key (default `"jwt"`), so it
//! survives reloads and is shared by every tab of the origin.
//!
//! ## Error handling
//!
//! Storage can be unavailable (private browsing, disabled cookies). Every
//! method degrades to "no token" rather than failing: the auth gate then
//! sends the user home, which is the same outcome as a logged-out session.

use web_sys::Storage;

use crate::session::SessionStore;

/// `localStorage`-backed SessionStore for the web platform.
#[derive(Clone, Debug)]
pub struct LocalStorageSession {
    key: String,
}

impl LocalStorageSession {
    pub fn new(key: &str) -> Self {
        Self {
            key: key.to_string(),
        }
    }

    fn storage(&self) -> Option<Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl SessionStore for LocalStorageSession {
    fn load(&self) -> Option<String> {
        self.storage()?.get_item(&self.key).ok().flatten()
    }

    fn save(&self, token: &str) {
        match self.storage() {
            Some(storage) => {
                if storage.set_item(&self.key, token).is_err() {
                    tracing::warn!("localStorage rejected the session token");
                }
            }
            None => tracing::warn!("localStorage unavailable, session not persisted"),
        }
    }

    fn clear(&self) {
        if let Some(storage) = self.storage() {
            let _ = storage.remove_item(&self.key);
        }
    }
}
