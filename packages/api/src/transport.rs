//! # Transport: the one place bytes leave the process
//!
//! [`ApiClient`](crate::ApiClient) describes each call as an [`ApiRequest`]
//! (method, path, optional bearer token, optional JSON body) and hands it to
//! a [`Transport`]. The production implementation is [`HttpTransport`]
//! (reqwest, which compiles to `fetch` on WASM); tests use
//! [`RecordingTransport`](crate::RecordingTransport).
//!
//! A transport only reports transport failures. Status handling belongs to
//! the client, so every transport returns the raw status and body.

use reqwest::header::AUTHORIZATION;

use crate::error::ApiError;

/// HTTP verbs used by the backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

/// A fully described API call.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Path below the base URL, starting with `/api/`.
    pub path: String,
    /// Token for the `Authorization: Bearer` header.
    pub bearer: Option<String>,
    pub body: Option<serde_json::Value>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            bearer: None,
            body: None,
        }
    }

    pub fn with_bearer(mut self, token: String) -> Self {
        self.bearer = Some(token);
        self
    }

    pub fn with_body(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// Raw response: status code and body bytes.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// A response carrying `value` as its JSON body.
    pub fn json(status: u16, value: &serde_json::Value) -> Self {
        Self::new(status, value.to_string())
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Async executor for [`ApiRequest`]s.
pub trait Transport {
    fn send(
        &self,
        request: &ApiRequest,
    ) -> impl std::future::Future<Output = Result<ApiResponse, ApiError>>;
}

/// reqwest-backed transport rooted at a base URL.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    http: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Transport for HttpTransport {
    async fn send(&self, request: &ApiRequest) -> Result<ApiResponse, ApiError> {
        let url = self.url(&request.path);
        let mut builder = match request.method {
            Method::Get => self.http.get(&url),
            Method::Post => self.http.post(&url),
            Method::Put => self.http.put(&url),
            Method::Delete => self.http.delete(&url),
        };
        if let Some(token) = &request.bearer {
            builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let resp = builder.send().await?;
        let status = resp.status().as_u16();
        let body = resp.bytes().await?.to_vec();
        Ok(ApiResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_is_normalised() {
        let transport = HttpTransport::new("https://bildy.test/");
        assert_eq!(transport.base_url(), "https://bildy.test");
        assert_eq!(transport.url("/api/client"), "https://bildy.test/api/client");
    }

    #[test]
    fn test_request_builder() {
        let request = ApiRequest::new(Method::Put, "/api/user/validation")
            .with_bearer("t0k".to_string())
            .with_body(serde_json::json!({ "code": "123456" }));
        assert_eq!(request.method.as_str(), "PUT");
        assert_eq!(request.bearer.as_deref(), Some("t0k"));
        assert_eq!(request.body, Some(serde_json::json!({ "code": "123456" })));
    }

    #[test]
    fn test_success_range() {
        assert!(ApiResponse::new(204, Vec::new()).is_success());
        assert!(!ApiResponse::new(301, Vec::new()).is_success());
        assert!(!ApiResponse::new(401, Vec::new()).is_success());
    }
}
