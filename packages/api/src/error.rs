//! Error type shared by every API operation.

/// Failure of a single API call.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The server answered with a non-success status.
    #[error("{message}")]
    Server { status: u16, message: String },

    /// The request never produced a response.
    #[error("{0}")]
    Network(String),

    /// An authenticated call was attempted without a stored token.
    #[error("Token is missing. Please log in again.")]
    MissingToken,

    #[error("encode: {0}")]
    Encode(String),

    #[error("decode: {0}")]
    Decode(String),
}

impl ApiError {
    /// Build a `Server` error from a raw response body.
    ///
    /// The backend reports failures as `{"message": "..."}`; anything else is
    /// passed through as text.
    pub fn from_response(status: u16, body: &[u8]) -> Self {
        let message = serde_json::from_slice::<serde_json::Value>(body)
            .ok()
            .and_then(|value| match value.get("message") {
                Some(serde_json::Value::String(s)) => Some(s.clone()),
                _ => None,
            })
            .or_else(|| {
                let text = String::from_utf8_lossy(body).trim().to_string();
                (!text.is_empty()).then_some(text)
            })
            .unwrap_or_else(|| format!("Request failed with status code {status}"));
        ApiError::Server { status, message }
    }

    /// HTTP status of a server error.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the backend rejected the credentials (401/403).
    pub fn is_unauthorized(&self) -> bool {
        matches!(self.status(), Some(401 | 403))
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Network(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_field_is_surfaced() {
        let err = ApiError::from_response(400, br#"{"message":"CIF already exists"}"#);
        assert_eq!(err.to_string(), "CIF already exists");
        assert_eq!(err.status(), Some(400));
        assert!(!err.is_unauthorized());
    }

    #[test]
    fn test_plain_text_body() {
        let err = ApiError::from_response(403, b"NOT_AUTHORIZED\n");
        assert_eq!(err.to_string(), "NOT_AUTHORIZED");
        assert!(err.is_unauthorized());
    }

    #[test]
    fn test_empty_body_falls_back_to_status() {
        let err = ApiError::from_response(502, b"");
        assert_eq!(err.to_string(), "Request failed with status code 502");
    }

    #[test]
    fn test_json_without_message_is_passed_through() {
        let err = ApiError::from_response(422, br#"{"errors":[{"msg":"Invalid value"}]}"#);
        assert_eq!(err.to_string(), r#"{"errors":[{"msg":"Invalid value"}]}"#);
    }
}
