use std::sync::{Arc, Mutex};

use crate::session::SessionStore;

/// In-memory SessionStore for testing.
///
/// Clones share the same slot, like handles onto browser storage.
#[derive(Clone, Debug, Default)]
pub struct MemorySessionStore {
    token: Arc<Mutex<Option<String>>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds `token`.
    pub fn with_token(token: &str) -> Self {
        let store = Self::new();
        store.save(token);
        store
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Option<String> {
        self.token.lock().ok()?.clone()
    }

    fn save(&self, token: &str) {
        if let Ok(mut slot) = self.token.lock() {
            *slot = Some(token.to_string());
        }
    }

    fn clear(&self) {
        if let Ok(mut slot) = self.token.lock() {
            *slot = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_load_clear() {
        let store = MemorySessionStore::new();
        assert!(store.token().is_none());

        store.save("abc.def.ghi");
        assert_eq!(store.token().as_deref(), Some("abc.def.ghi"));

        store.clear();
        assert!(store.load().is_none());
        assert!(store.token().is_none());
    }

    #[test]
    fn test_empty_token_counts_as_absent() {
        let store = MemorySessionStore::with_token("");
        assert_eq!(store.load().as_deref(), Some(""));
        assert!(store.token().is_none());
    }

    #[test]
    fn test_clones_share_state() {
        let store = MemorySessionStore::new();
        let handle = store.clone();
        handle.save("shared");
        assert_eq!(store.token().as_deref(), Some("shared"));
        store.clear();
        assert!(handle.token().is_none());
    }
}
