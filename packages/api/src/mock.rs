use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::error::ApiError;
use crate::transport::{ApiRequest, ApiResponse, Method, Transport};

/// In-memory Transport for tests.
///
/// Responses are registered per method and path; every request is recorded
/// in order. Unregistered routes answer `404 {"message":"Not found"}`.
/// Clones share the same routes and log.
#[derive(Clone, Debug, Default)]
pub struct RecordingTransport {
    routes: Arc<Mutex<HashMap<(Method, String), ApiResponse>>>,
    log: Arc<Mutex<Vec<ApiRequest>>>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `method path` with `status` and a JSON body.
    pub fn respond(&self, method: Method, path: &str, status: u16, body: serde_json::Value) {
        self.respond_raw(method, path, ApiResponse::json(status, &body));
    }

    /// Answer `method path` with an arbitrary response.
    pub fn respond_raw(&self, method: Method, path: &str, response: ApiResponse) {
        if let Ok(mut routes) = self.routes.lock() {
            routes.insert((method, path.to_string()), response);
        }
    }

    /// Every request sent so far, oldest first.
    pub fn requests(&self) -> Vec<ApiRequest> {
        self.log.lock().map(|log| log.clone()).unwrap_or_default()
    }

    /// Number of requests sent to `method path`.
    pub fn count(&self, method: Method, path: &str) -> usize {
        self.requests()
            .iter()
            .filter(|r| r.method == method && r.path == path)
            .count()
    }
}

impl Transport for RecordingTransport {
    async fn send(&self, request: &ApiRequest) -> Result<ApiResponse, ApiError> {
        if let Ok(mut log) = self.log.lock() {
            log.push(request.clone());
        }
        let response = self
            .routes
            .lock()
            .ok()
            .and_then(|routes| routes.get(&(request.method, request.path.clone())).cloned());
        Ok(response.unwrap_or_else(|| {
            ApiResponse::json(404, &serde_json::json!({ "message": "Not found" }))
        }))
    }
}
