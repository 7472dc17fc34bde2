//! Delivery notes, scoped to a project, and their PDF rendering.

use store::SessionStore;

use crate::client::{ApiClient, NoBody};
use crate::error::ApiError;
use crate::models::{DeliveryNote, DeliveryNoteInput};
use crate::transport::{Method, Transport};

impl<T: Transport, S: SessionStore> ApiClient<T, S> {
    pub async fn list_delivery_notes(&self, project_id: &str) -> Result<Vec<DeliveryNote>, ApiError> {
        self.authed_json(
            Method::Get,
            &format!("/api/deliverynote/project/{project_id}"),
            None::<&NoBody>,
        )
        .await
    }

    pub async fn create_delivery_note(
        &self,
        input: &DeliveryNoteInput,
    ) -> Result<DeliveryNote, ApiError> {
        self.authed_json(Method::Post, "/api/deliverynote", Some(input))
            .await
    }

    pub async fn update_delivery_note(
        &self,
        id: &str,
        input: &DeliveryNoteInput,
    ) -> Result<DeliveryNote, ApiError> {
        self.authed_json(Method::Put, &format!("/api/deliverynote/{id}"), Some(input))
            .await
    }

    pub async fn delete_delivery_note(&self, id: &str) -> Result<(), ApiError> {
        self.authed_empty(Method::Delete, &format!("/api/deliverynote/{id}"), None::<&NoBody>)
            .await
    }

    /// The server-rendered PDF, as bytes.
    pub async fn download_delivery_note_pdf(&self, id: &str) -> Result<Vec<u8>, ApiError> {
        self.authed_bytes(&format!("/api/deliverynote/pdf/{id}"))
            .await
    }
}
