//! Client CRUD.

use store::SessionStore;

use crate::client::{ApiClient, NoBody};
use crate::error::ApiError;
use crate::models::{Client, ClientInput};
use crate::transport::{Method, Transport};

impl<T: Transport, S: SessionStore> ApiClient<T, S> {
    pub async fn list_clients(&self) -> Result<Vec<Client>, ApiError> {
        self.authed_json(Method::Get, "/api/client", None::<&NoBody>)
            .await
    }

    pub async fn get_client(&self, id: &str) -> Result<Client, ApiError> {
        self.authed_json(Method::Get, &format!("/api/client/{id}"), None::<&NoBody>)
            .await
    }

    pub async fn create_client(&self, input: &ClientInput) -> Result<Client, ApiError> {
        self.authed_json(Method::Post, "/api/client", Some(input))
            .await
    }

    pub async fn update_client(&self, id: &str, input: &ClientInput) -> Result<Client, ApiError> {
        self.authed_json(Method::Put, &format!("/api/client/{id}"), Some(input))
            .await
    }

    pub async fn delete_client(&self, id: &str) -> Result<(), ApiError> {
        self.authed_empty(Method::Delete, &format!("/api/client/{id}"), None::<&NoBody>)
            .await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use store::MemorySessionStore;

    use crate::mock::RecordingTransport;
    use crate::models::{Address, ClientInput};
    use crate::transport::Method;
    use crate::ApiClient;

    fn api(transport: &RecordingTransport) -> ApiClient<RecordingTransport, MemorySessionStore> {
        ApiClient::new(transport.clone(), MemorySessionStore::with_token("jwt"))
    }

    #[tokio::test]
    async fn test_list_clients() {
        let transport = RecordingTransport::new();
        transport.respond(
            Method::Get,
            "/api/client",
            200,
            json!([{ "_id": "c1", "name": "ACME", "cif": "B1" }, { "_id": "c2", "name": "Globex" }]),
        );

        let clients = api(&transport).list_clients().await.unwrap();
        assert_eq!(clients.len(), 2);
        assert_eq!(clients[1].name, "Globex");
        assert_eq!(transport.requests()[0].bearer.as_deref(), Some("jwt"));
    }

    #[tokio::test]
    async fn test_create_client_sends_nested_address() {
        let transport = RecordingTransport::new();
        transport.respond(
            Method::Post,
            "/api/client",
            200,
            json!({ "_id": "c9", "name": "ACME", "cif": "B1" }),
        );
        let input = ClientInput {
            name: "ACME".into(),
            cif: "B1".into(),
            address: Address {
                street: "Mayor".into(),
                number: "3".into(),
                postal: "28001".into(),
                city: "Madrid".into(),
                province: "Madrid".into(),
            },
        };

        let created = api(&transport).create_client(&input).await.unwrap();
        assert_eq!(created.id, "c9");

        let request = &transport.requests()[0];
        assert_eq!(request.method, Method::Post);
        assert_eq!(
            request.body,
            Some(json!({
                "name": "ACME",
                "cif": "B1",
                "address": { "street": "Mayor", "number": "3", "postal": "28001", "city": "Madrid", "province": "Madrid" }
            }))
        );
    }

    #[tokio::test]
    async fn test_item_paths() {
        let transport = RecordingTransport::new();
        transport.respond(Method::Get, "/api/client/c1", 200, json!({ "_id": "c1", "name": "ACME" }));
        transport.respond(Method::Put, "/api/client/c1", 200, json!({ "_id": "c1", "name": "ACME 2" }));
        transport.respond(Method::Delete, "/api/client/c1", 200, json!({ "message": "deleted" }));
        let api = api(&transport);

        assert_eq!(api.get_client("c1").await.unwrap().name, "ACME");
        let updated = api
            .update_client("c1", &ClientInput { name: "ACME 2".into(), ..Default::default() })
            .await
            .unwrap();
        assert_eq!(updated.name, "ACME 2");
        api.delete_client("c1").await.unwrap();

        assert_eq!(transport.count(Method::Delete, "/api/client/c1"), 1);
        assert_eq!(transport.requests().len(), 3);
    }
}
