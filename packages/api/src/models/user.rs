//! # Onboarding payloads
//!
//! Request bodies for registration, login and email validation, and the
//! response both registration and login return:
//!
//! - [`RegisterRequest`]: first/last name, email, password.
//! - [`Credentials`]: email and password for `/api/user/login`.
//! - [`ValidationCode`]: the code mailed after registration.
//! - [`AuthResponse`]: the bearer `token` plus an optional [`UserInfo`].
//!
//! [`UserInfo`] is tolerant: every field except `email` is optional because
//! the backend trims the user document differently per endpoint.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationCode {
    pub code: String,
}

/// Token-bearing response of register and login.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    #[serde(default)]
    pub user: Option<UserInfo>,
}

/// User summary safe to keep in page state.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub status: Option<i64>,
}

impl UserInfo {
    /// Get display name, falling back to email if name is not set.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_body_is_camel_case() {
        let body = serde_json::to_value(RegisterRequest {
            first_name: "Ana".into(),
            last_name: "Ruiz".into(),
            email: "ana@bildy.es".into(),
            password: "s3cretpass".into(),
        })
        .unwrap();
        assert_eq!(body["firstName"], "Ana");
        assert_eq!(body["lastName"], "Ruiz");
    }

    #[test]
    fn test_auth_response_with_and_without_user() {
        let full: AuthResponse = serde_json::from_str(
            r#"{"token":"t1","user":{"_id":"u1","email":"ana@bildy.es","status":0,"role":"user"}}"#,
        )
        .unwrap();
        let user = full.user.unwrap();
        assert_eq!(user.display_name(), "ana@bildy.es");
        assert_eq!(user.status, Some(0));

        let bare: AuthResponse = serde_json::from_str(r#"{"token":"t2"}"#).unwrap();
        assert_eq!(bare.token, "t2");
        assert!(bare.user.is_none());
    }
}
