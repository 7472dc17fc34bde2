//! # Filesystem-backed session store
//!
//! [`FileSessionStore`] keeps the token in a single file so native builds
//! (and `cargo test` on the host) behave like the browser's `localStorage`.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! └── <token_key>        # the raw token, no trailing newline
//! ```
//!
//! Use [`FileSessionStore::in_data_dir`] for the platform default
//! (`dirs::data_dir()/bildy`, e.g. `~/.local/share/bildy/` on Linux).

use std::path::PathBuf;

use crate::session::SessionStore;

/// Filesystem-backed SessionStore for native builds.
#[derive(Clone, Debug)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(base: PathBuf, token_key: &str) -> Self {
        Self {
            path: base.join(token_key),
        }
    }

    /// Store rooted at the platform data directory.
    pub fn in_data_dir(token_key: &str) -> Self {
        let base = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("bildy");
        Self::new(base, token_key)
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> Option<String> {
        std::fs::read_to_string(&self.path).ok()
    }

    fn save(&self, token: &str) {
        if let Some(parent) = self.path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        if let Err(e) = std::fs::write(&self.path, token) {
            tracing::warn!("Failed to persist session token: {e}");
        }
    }

    fn clear(&self) {
        let _ = std::fs::remove_file(&self.path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_store_roundtrip() {
        let dir = std::env::temp_dir().join(format!("bildy_session_test_{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);

        let store = FileSessionStore::new(dir.clone(), "jwt");
        assert!(store.token().is_none());
        store.save("token-1");

        // Re-open from same directory
        let reopened = FileSessionStore::new(dir.clone(), "jwt");
        assert_eq!(reopened.token().as_deref(), Some("token-1"));

        reopened.clear();
        assert!(store.token().is_none());

        // Cleanup
        let _ = std::fs::remove_dir_all(&dir);
    }
}
