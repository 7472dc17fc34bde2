//! Registration, login, email validation and logout.

use store::SessionStore;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{AuthResponse, Credentials, RegisterRequest, ValidationCode};
use crate::transport::{Method, Transport};

impl<T: Transport, S: SessionStore> ApiClient<T, S> {
    /// Create an account. The returned token becomes the session.
    pub async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        let response: AuthResponse = self
            .public_json(Method::Post, "/api/user/register", Some(request))
            .await?;
        self.store_token(&response);
        Ok(response)
    }

    /// Exchange credentials for a token. The returned token becomes the session.
    pub async fn login(&self, credentials: &Credentials) -> Result<AuthResponse, ApiError> {
        let response: AuthResponse = self
            .public_json(Method::Post, "/api/user/login", Some(credentials))
            .await?;
        self.store_token(&response);
        Ok(response)
    }

    /// Confirm the email with the code sent after registration.
    pub async fn validate_email(&self, code: &str) -> Result<(), ApiError> {
        let body = ValidationCode {
            code: code.to_string(),
        };
        self.authed_empty(Method::Put, "/api/user/validation", Some(&body))
            .await
    }

    /// Forget the session token. Purely local.
    pub fn logout(&self) {
        tracing::info!("session cleared");
        self.session().clear();
    }

    fn store_token(&self, response: &AuthResponse) {
        if response.token.is_empty() {
            tracing::warn!("auth response carried an empty token");
            return;
        }
        self.session().save(&response.token);
    }
}
