//! # Page workflows
//!
//! The load / save / delete-then-reload sequences behind every page, as
//! plain async functions over any [`ApiClient`]. Views call them from
//! `spawn`ed tasks and copy the result into signals; tests drive them with
//! [`api::RecordingTransport`].
//!
//! Failures come back as the page-level message `"<context>: <server
//! message>"`, already logged.
//!
//! | Page | Workflows |
//! |------|-----------|
//! | Onboarding | [`register`], [`validate_email`], [`login`] |
//! | Clients | [`load_clients`], [`select_client`], [`save_client`], [`delete_client`] |
//! | Projects | [`load_projects_page`], [`load_project`], [`select_project`], [`save_project`], [`delete_project`] |
//! | Delivery notes | [`load_notes_panel`], [`save_delivery_note`], [`delete_delivery_note`], [`download_delivery_note`] |

use api::{
    ApiClient, ApiError, AuthResponse, Client, ClientInput, Credentials, DeliveryNote,
    DeliveryNoteInput, Project, ProjectInput, RegisterRequest, Transport,
};
use store::SessionStore;

use crate::download::{pdf_filename, save_bytes};

pub const DELETE_CLIENT_PROMPT: &str = "Are you sure you want to delete this client?";
pub const DELETE_PROJECT_PROMPT: &str = "Are you sure you want to delete this project?";
pub const DELETE_NOTE_PROMPT: &str = "Are you sure you want to delete this delivery note?";

/// The user's answer to a destructive-action prompt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Confirmation {
    Accepted,
    Declined,
}

/// `"<context>: <message>"`, the form every page error takes.
pub fn describe_failure(context: &str, err: &ApiError) -> String {
    format!("{context}: {err}")
}

fn report(context: &str) -> impl FnOnce(ApiError) -> String + '_ {
    move |err| {
        let message = describe_failure(context, &err);
        tracing::warn!("{message}");
        message
    }
}

// Onboarding

pub async fn register<T: Transport, S: SessionStore>(
    api: &ApiClient<T, S>,
    request: &RegisterRequest,
) -> Result<AuthResponse, String> {
    api.register(request).await.map_err(report("Registration error"))
}

pub async fn validate_email<T: Transport, S: SessionStore>(
    api: &ApiClient<T, S>,
    code: &str,
) -> Result<(), String> {
    api.validate_email(code).await.map_err(report("Validation error"))
}

pub async fn login<T: Transport, S: SessionStore>(
    api: &ApiClient<T, S>,
    credentials: &Credentials,
) -> Result<AuthResponse, String> {
    api.login(credentials).await.map_err(report("Login error"))
}

// Clients

pub async fn load_clients<T: Transport, S: SessionStore>(
    api: &ApiClient<T, S>,
) -> Result<Vec<Client>, String> {
    api.list_clients().await.map_err(report("Failed to load clients"))
}

/// Projects of the selected client.
pub async fn select_client<T: Transport, S: SessionStore>(
    api: &ApiClient<T, S>,
    client_id: &str,
) -> Result<Vec<Project>, String> {
    api.list_projects_by_client(client_id)
        .await
        .map_err(report("Failed to load projects"))
}

/// Create (no `existing_id`) or update, then reload the list.
pub async fn save_client<T: Transport, S: SessionStore>(
    api: &ApiClient<T, S>,
    existing_id: Option<&str>,
    input: &ClientInput,
) -> Result<Vec<Client>, String> {
    match existing_id {
        Some(id) => {
            api.update_client(id, input)
                .await
                .map_err(report("Failed to update client"))?;
        }
        None => {
            api.create_client(input)
                .await
                .map_err(report("Failed to create client"))?;
        }
    }
    load_clients(api).await
}

/// `Ok(None)` when declined: nothing was sent.
pub async fn delete_client<T: Transport, S: SessionStore>(
    api: &ApiClient<T, S>,
    id: &str,
    confirmation: Confirmation,
) -> Result<Option<Vec<Client>>, String> {
    if confirmation == Confirmation::Declined {
        return Ok(None);
    }
    api.delete_client(id)
        .await
        .map_err(report("Failed to delete client"))?;
    load_clients(api).await.map(Some)
}

/// A page's main list plus the clients its form offers. Both lists are
/// always requested; `error` holds the first failure.
#[derive(Clone, Debug, PartialEq)]
pub struct PageData<T> {
    pub items: Vec<T>,
    pub clients: Vec<Client>,
    pub error: Option<String>,
}

impl<T> PageData<T> {
    fn from_results(items: Result<Vec<T>, String>, clients: Result<Vec<Client>, String>) -> Self {
        let mut error = None;
        let items = items.unwrap_or_else(|e| {
            error = Some(e);
            Vec::new()
        });
        let clients = clients.unwrap_or_else(|e| {
            error.get_or_insert(e);
            Vec::new()
        });
        Self {
            items,
            clients,
            error,
        }
    }
}

// Projects

pub async fn load_projects<T: Transport, S: SessionStore>(
    api: &ApiClient<T, S>,
) -> Result<Vec<Project>, String> {
    api.list_projects().await.map_err(report("Failed to load projects"))
}

/// Projects page on mount: every project, and clients for the form.
pub async fn load_projects_page<T: Transport, S: SessionStore>(
    api: &ApiClient<T, S>,
) -> PageData<Project> {
    let projects = load_projects(api).await;
    let clients = load_clients(api).await;
    PageData::from_results(projects, clients)
}

/// A project with its delivery notes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProjectOverview {
    pub project: Project,
    pub notes: Vec<DeliveryNote>,
}

pub async fn load_project<T: Transport, S: SessionStore>(
    api: &ApiClient<T, S>,
    id: &str,
) -> Result<Project, String> {
    api.get_project(id)
        .await
        .map_err(report("Failed to load project details"))
}

/// Fetch the project, then its notes.
pub async fn select_project<T: Transport, S: SessionStore>(
    api: &ApiClient<T, S>,
    id: &str,
) -> Result<ProjectOverview, String> {
    let project = load_project(api, id).await?;
    let notes = load_delivery_notes(api, id).await?;
    Ok(ProjectOverview { project, notes })
}

pub async fn save_project<T: Transport, S: SessionStore>(
    api: &ApiClient<T, S>,
    existing_id: Option<&str>,
    input: &ProjectInput,
) -> Result<Vec<Project>, String> {
    match existing_id {
        Some(id) => {
            api.update_project(id, input)
                .await
                .map_err(report("Failed to update project"))?;
        }
        None => {
            api.create_project(input)
                .await
                .map_err(report("Failed to create project"))?;
        }
    }
    load_projects(api).await
}

pub async fn delete_project<T: Transport, S: SessionStore>(
    api: &ApiClient<T, S>,
    id: &str,
    confirmation: Confirmation,
) -> Result<Option<Vec<Project>>, String> {
    if confirmation == Confirmation::Declined {
        return Ok(None);
    }
    api.delete_project(id)
        .await
        .map_err(report("Failed to delete project"))?;
    load_projects(api).await.map(Some)
}

// Delivery notes

pub async fn load_delivery_notes<T: Transport, S: SessionStore>(
    api: &ApiClient<T, S>,
    project_id: &str,
) -> Result<Vec<DeliveryNote>, String> {
    api.list_delivery_notes(project_id)
        .await
        .map_err(report("Failed to load delivery notes"))
}

/// Delivery-note panel on mount: the project's notes, and clients for the form.
pub async fn load_notes_panel<T: Transport, S: SessionStore>(
    api: &ApiClient<T, S>,
    project_id: &str,
) -> PageData<DeliveryNote> {
    let notes = load_delivery_notes(api, project_id).await;
    let clients = load_clients(api).await;
    PageData::from_results(notes, clients)
}

/// Create or update, then reload the notes of `input.project_id`.
pub async fn save_delivery_note<T: Transport, S: SessionStore>(
    api: &ApiClient<T, S>,
    existing_id: Option<&str>,
    input: &DeliveryNoteInput,
) -> Result<Vec<DeliveryNote>, String> {
    match existing_id {
        Some(id) => {
            api.update_delivery_note(id, input)
                .await
                .map_err(report("Failed to update delivery note"))?;
        }
        None => {
            api.create_delivery_note(input)
                .await
                .map_err(report("Failed to create delivery note"))?;
        }
    }
    load_delivery_notes(api, &input.project_id).await
}

pub async fn delete_delivery_note<T: Transport, S: SessionStore>(
    api: &ApiClient<T, S>,
    project_id: &str,
    id: &str,
    confirmation: Confirmation,
) -> Result<Option<Vec<DeliveryNote>>, String> {
    if confirmation == Confirmation::Declined {
        return Ok(None);
    }
    api.delete_delivery_note(id)
        .await
        .map_err(report("Failed to delete delivery note"))?;
    load_delivery_notes(api, project_id).await.map(Some)
}

/// Fetch the PDF and hand it to the platform as `deliverynote_<id>.pdf`.
pub async fn download_delivery_note<T: Transport, S: SessionStore>(
    api: &ApiClient<T, S>,
    id: &str,
) -> Result<(), String> {
    const CONTEXT: &str = "Failed to download delivery note";
    let bytes = api
        .download_delivery_note_pdf(id)
        .await
        .map_err(report(CONTEXT))?;
    let filename = pdf_filename(id);
    save_bytes(&filename, &bytes).map_err(|e| {
        let message = format!("{CONTEXT}: {e}");
        tracing::warn!("{message}");
        message
    })?;
    tracing::info!(bytes = bytes.len(), "saved {filename}");
    Ok(())
}
