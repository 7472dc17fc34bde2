//! # Session token persistence
//!
//! The bearer token is the only state the front end keeps between page
//! loads. [`SessionStore`] is the single place it is read, written and
//! cleared; the access layer and the auth gate both go through it.
//!
//! Implementations live in sibling modules:
//! - [`crate::LocalStorageSession`]: browser `localStorage` (web)
//! - [`crate::FileSessionStore`]: a file under the platform data dir (native)
//! - [`crate::MemorySessionStore`]: process memory (tests)

/// Synchronous storage for a single session token.
pub trait SessionStore {
    /// Raw stored value, if any.
    fn load(&self) -> Option<String>;

    /// Replace the stored token.
    fn save(&self, token: &str);

    /// Forget the stored token.
    fn clear(&self);

    /// The stored token, treating an empty string as absent.
    fn token(&self) -> Option<String> {
        self.load().filter(|token| !token.is_empty())
    }
}
