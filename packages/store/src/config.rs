//! # Application configuration: `bildy.toml`
//!
//! Defines the TOML document bundled with the front end (filename:
//! [`AppConfig::filename`] = `"bildy.toml"`). It tells the access layer which
//! backend to talk to and where the session token is persisted.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "https://bildy-rpmaya.koyeb.app"
//!
//! [session]
//! token_key = "jwt"   # storage key of the bearer token
//! ```
//!
//! ## Types
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`AppConfig`] | Top-level config. Builder helpers (`new`, `with_token_key`), TOML (de)serialisation, and the canonical filename. |
//! | [`ApiConfig`] | Remote API section: the fixed base URL every request is resolved against. |
//! | [`SessionConfig`] | Session section: the storage key of the token, default **`jwt`**. |
//!
//! Every key has a default, so a missing or partial file is equivalent to
//! the default configuration.

use serde::{Deserialize, Serialize};

/// Backend used when no configuration overrides it.
pub const DEFAULT_BASE_URL: &str = "https://bildy-rpmaya.koyeb.app";

/// Top-level configuration stored in `bildy.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

/// Remote API configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Scheme and host of the backend, without a trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

/// Session persistence configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Key under which the bearer token is stored.
    #[serde(default = "default_token_key")]
    pub token_key: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_token_key() -> String {
    "jwt".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            token_key: default_token_key(),
        }
    }
}

impl AppConfig {
    /// Create a config pointing at the given backend.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            api: ApiConfig {
                base_url: base_url.into(),
            },
            session: SessionConfig::default(),
        }
    }

    /// Builder method to set the token storage key.
    pub fn with_token_key(mut self, key: impl Into<String>) -> Self {
        self.session.token_key = key.into();
        self
    }

    /// Base URL with any trailing slash removed.
    pub fn base_url(&self) -> &str {
        self.api.base_url.trim_end_matches('/')
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "bildy.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_is_default() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
        assert_eq!(config.session.token_key, "jwt");
    }

    #[test]
    fn test_partial_document_keeps_other_defaults() {
        let config = AppConfig::from_toml("[api]\nbase_url = \"http://localhost:3000/\"\n").unwrap();
        assert_eq!(config.base_url(), "http://localhost:3000");
        assert_eq!(config.session.token_key, "jwt");
    }

    #[test]
    fn test_builder_and_toml_output() {
        let config = AppConfig::new("http://api.test").with_token_key("bildy-token");
        let text = config.to_toml().unwrap();
        assert!(text.contains("base_url = \"http://api.test\""));
        assert!(text.contains("token_key = \"bildy-token\""));
        assert_eq!(AppConfig::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn test_rejects_wrong_types() {
        assert!(AppConfig::from_toml("[api]\nbase_url = 42\n").is_err());
    }
}
