//! # ApiClient: request execution shared by every operation
//!
//! Resource operations (see [`crate::clients`], [`crate::projects`],
//! [`crate::delivery_notes`], [`crate::onboarding`]) are thin wrappers that
//! pick a method and path and call one of the helpers here:
//!
//! | Helper | Auth | Response |
//! |--------|------|----------|
//! | [`ApiClient::public_json`] | none | decoded JSON |
//! | [`ApiClient::authed_json`] | bearer | decoded JSON |
//! | [`ApiClient::authed_empty`] | bearer | body discarded |
//! | [`ApiClient::authed_bytes`] | bearer | raw bytes |
//!
//! The token is read from the session store on every call, so a logout in
//! one place is seen by the next request everywhere.

use serde::de::DeserializeOwned;
use serde::Serialize;
use store::SessionStore;

use crate::error::ApiError;
use crate::transport::{ApiRequest, Method, Transport};

/// Typed client for the backend, generic over how requests travel and
/// where the session token lives.
#[derive(Clone, Debug)]
pub struct ApiClient<T, S> {
    transport: T,
    session: S,
}

impl<T: Transport, S: SessionStore> ApiClient<T, S> {
    pub fn new(transport: T, session: S) -> Self {
        Self { transport, session }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn session(&self) -> &S {
        &self.session
    }

    /// Whether a (non-empty) token is stored. No server round-trip.
    pub fn is_authenticated(&self) -> bool {
        self.session.token().is_some()
    }

    fn bearer(&self) -> Result<String, ApiError> {
        self.session.token().ok_or(ApiError::MissingToken)
    }

    fn encode<B: Serialize>(body: &B) -> Result<serde_json::Value, ApiError> {
        serde_json::to_value(body).map_err(|e| ApiError::Encode(e.to_string()))
    }

    fn decode<R: DeserializeOwned>(request: &ApiRequest, body: &[u8]) -> Result<R, ApiError> {
        serde_json::from_slice(body).map_err(|e| {
            ApiError::Decode(format!("{} {}: {e}", request.method.as_str(), request.path))
        })
    }

    /// Send `request` and return the body of a successful response.
    async fn execute(&self, request: ApiRequest) -> Result<Vec<u8>, ApiError> {
        tracing::debug!(method = request.method.as_str(), path = %request.path, "api request");
        let response = self.transport.send(&request).await.inspect_err(|e| {
            tracing::warn!(method = request.method.as_str(), path = %request.path, "api transport error: {e}");
        })?;
        if !response.is_success() {
            let err = ApiError::from_response(response.status, &response.body);
            tracing::warn!(
                method = request.method.as_str(),
                path = %request.path,
                status = response.status,
                "api error: {err}"
            );
            return Err(err);
        }
        Ok(response.body)
    }

    fn build<B: Serialize>(
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<ApiRequest, ApiError> {
        let mut request = ApiRequest::new(method, path);
        if let Some(body) = body {
            request = request.with_body(Self::encode(body)?);
        }
        Ok(request)
    }

    /// Unauthenticated JSON call.
    pub(crate) async fn public_json<B: Serialize, R: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<R, ApiError> {
        let request = Self::build(method, path, body)?;
        let bytes = self.execute(request.clone()).await?;
        Self::decode(&request, &bytes)
    }

    /// Bearer-authenticated JSON call.
    pub(crate) async fn authed_json<B: Serialize, R: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<R, ApiError> {
        let request = Self::build(method, path, body)?.with_bearer(self.bearer()?);
        let bytes = self.execute(request.clone()).await?;
        Self::decode(&request, &bytes)
    }

    /// Bearer-authenticated call whose response body is ignored.
    pub(crate) async fn authed_empty<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<(), ApiError> {
        let request = Self::build(method, path, body)?.with_bearer(self.bearer()?);
        self.execute(request).await.map(|_| ())
    }

    /// Bearer-authenticated GET returning the raw body.
    pub(crate) async fn authed_bytes(&self, path: &str) -> Result<Vec<u8>, ApiError> {
        let request = ApiRequest::new(Method::Get, path).with_bearer(self.bearer()?);
        self.execute(request).await
    }
}

/// Placeholder body type for calls without one.
pub(crate) type NoBody = ();

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::RecordingTransport;
    use store::MemorySessionStore;

    #[tokio::test]
    async fn test_missing_token_sends_nothing() {
        let transport = RecordingTransport::new();
        let api = ApiClient::new(transport.clone(), MemorySessionStore::new());

        let result: Result<serde_json::Value, _> =
            api.authed_json(Method::Get, "/api/client", None::<&NoBody>).await;
        assert!(matches!(result, Err(ApiError::MissingToken)));
        assert!(transport.requests().is_empty());
        assert!(!api.is_authenticated());
    }

    #[tokio::test]
    async fn test_bearer_is_read_per_call() {
        let transport = RecordingTransport::new();
        transport.respond(Method::Get, "/api/client", 200, serde_json::json!([]));
        let session = MemorySessionStore::with_token("first");
        let api = ApiClient::new(transport.clone(), session.clone());

        let _: serde_json::Value = api
            .authed_json(Method::Get, "/api/client", None::<&NoBody>)
            .await
            .unwrap();
        session.save("second");
        let _: serde_json::Value = api
            .authed_json(Method::Get, "/api/client", None::<&NoBody>)
            .await
            .unwrap();

        let bearers: Vec<_> = transport
            .requests()
            .into_iter()
            .map(|r| r.bearer.unwrap_or_default())
            .collect();
        assert_eq!(bearers, vec!["first", "second"]);
    }

    #[tokio::test]
    async fn test_server_error_is_propagated() {
        let transport = RecordingTransport::new();
        transport.respond(
            Method::Get,
            "/api/client",
            401,
            serde_json::json!({ "message": "NOT_SESSION" }),
        );
        let api = ApiClient::new(transport, MemorySessionStore::with_token("stale"));

        let err = api
            .authed_json::<NoBody, serde_json::Value>(Method::Get, "/api/client", None)
            .await
            .unwrap_err();
        assert!(err.is_unauthorized());
        assert_eq!(err.to_string(), "NOT_SESSION");
    }

    #[tokio::test]
    async fn test_undecodable_body() {
        let transport = RecordingTransport::new();
        transport.respond_raw(
            Method::Get,
            "/api/client",
            crate::transport::ApiResponse::new(200, "<html>"),
        );
        let api = ApiClient::new(transport, MemorySessionStore::with_token("t"));

        let err = api
            .authed_json::<NoBody, Vec<serde_json::Value>>(Method::Get, "/api/client", None)
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Decode(ref msg) if msg.starts_with("GET /api/client")));
    }
}
