//! Project CRUD and the per-client project listing.

use store::SessionStore;

use crate::client::{ApiClient, NoBody};
use crate::error::ApiError;
use crate::models::{Project, ProjectInput};
use crate::transport::{Method, Transport};

impl<T: Transport, S: SessionStore> ApiClient<T, S> {
    pub async fn list_projects(&self) -> Result<Vec<Project>, ApiError> {
        self.authed_json(Method::Get, "/api/project", None::<&NoBody>)
            .await
    }

    /// Single project. The backend serves it under `/one/` because
    /// `/api/project/{id}` lists by client.
    pub async fn get_project(&self, id: &str) -> Result<Project, ApiError> {
        self.authed_json(Method::Get, &format!("/api/project/one/{id}"), None::<&NoBody>)
            .await
    }

    pub async fn list_projects_by_client(&self, client_id: &str) -> Result<Vec<Project>, ApiError> {
        self.authed_json(Method::Get, &format!("/api/project/{client_id}"), None::<&NoBody>)
            .await
    }

    pub async fn create_project(&self, input: &ProjectInput) -> Result<Project, ApiError> {
        self.authed_json(Method::Post, "/api/project", Some(input))
            .await
    }

    pub async fn update_project(&self, id: &str, input: &ProjectInput) -> Result<Project, ApiError> {
        self.authed_json(Method::Put, &format!("/api/project/{id}"), Some(input))
            .await
    }

    pub async fn delete_project(&self, id: &str) -> Result<(), ApiError> {
        self.authed_empty(Method::Delete, &format!("/api/project/{id}"), None::<&NoBody>)
            .await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use store::MemorySessionStore;

    use crate::mock::RecordingTransport;
    use crate::models::ProjectInput;
    use crate::transport::Method;
    use crate::ApiClient;

    #[tokio::test]
    async fn test_single_and_by_client_use_distinct_paths() {
        let transport = RecordingTransport::new();
        transport.respond(
            Method::Get,
            "/api/project/one/p1",
            200,
            json!({ "_id": "p1", "name": "Reforma", "clientId": "c1" }),
        );
        transport.respond(
            Method::Get,
            "/api/project/c1",
            200,
            json!([{ "_id": "p1", "name": "Reforma", "clientId": "c1" }]),
        );
        let api = ApiClient::new(transport.clone(), MemorySessionStore::with_token("jwt"));

        let project = api.get_project("p1").await.unwrap();
        assert_eq!(project.client_id, "c1");
        let by_client = api.list_projects_by_client("c1").await.unwrap();
        assert_eq!(by_client, vec![project]);
    }

    #[tokio::test]
    async fn test_create_update_delete() {
        let transport = RecordingTransport::new();
        transport.respond(Method::Post, "/api/project", 200, json!({ "_id": "p2", "name": "Nave" }));
        transport.respond(Method::Put, "/api/project/p2", 200, json!({ "_id": "p2", "name": "Nave B" }));
        transport.respond(Method::Delete, "/api/project/p2", 200, json!({}));
        let api = ApiClient::new(transport.clone(), MemorySessionStore::with_token("jwt"));

        let input = ProjectInput {
            name: "Nave".into(),
            client_id: "c1".into(),
            ..Default::default()
        };
        assert_eq!(api.create_project(&input).await.unwrap().id, "p2");
        assert_eq!(api.update_project("p2", &input).await.unwrap().name, "Nave B");
        api.delete_project("p2").await.unwrap();

        let methods: Vec<_> = transport.requests().iter().map(|r| r.method).collect();
        assert_eq!(methods, vec![Method::Post, Method::Put, Method::Delete]);
        assert_eq!(transport.requests()[0].body.as_ref().unwrap()["clientId"], "c1");
    }

    #[tokio::test]
    async fn test_list_error_is_untouched() {
        let transport = RecordingTransport::new();
        transport.respond(Method::Get, "/api/project", 500, json!({ "message": "ERROR_GET_PROJECTS" }));
        let api = ApiClient::new(transport, MemorySessionStore::with_token("jwt"));

        let err = api.list_projects().await.unwrap_err();
        assert_eq!(err.status(), Some(500));
        assert_eq!(err.to_string(), "ERROR_GET_PROJECTS");
    }
}
