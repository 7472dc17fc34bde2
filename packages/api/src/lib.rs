//! # API crate: typed access to the Bildy backend
//!
//! Every request the front end makes goes through [`ApiClient`]. It turns a
//! domain operation into exactly one HTTP call against the configured base
//! URL, attaches the bearer token held by the injected
//! [`store::SessionStore`], and hands back the parsed response body.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`ApiClient`] itself: request execution, status handling, token lookup |
//! | [`transport`] | The [`Transport`] seam and its reqwest implementation [`HttpTransport`] |
//! | [`mock`] | [`RecordingTransport`], an in-memory transport for tests |
//! | [`error`] | [`ApiError`], the single error type of the crate |
//! | [`models`] | Wire types: clients, projects, delivery notes, onboarding payloads |
//!
//! ## Operations
//!
//! Grouped by resource, each in its own `impl ApiClient` block:
//!
//! - **Onboarding** ([`onboarding`]): `register`, `login`, `validate_email`, `logout`
//! - **Clients** ([`clients`]): `list_clients`, `get_client`, `create_client`, `update_client`, `delete_client`
//! - **Projects** ([`projects`]): `list_projects`, `get_project`, `list_projects_by_client`,
//!   `create_project`, `update_project`, `delete_project`
//! - **Delivery notes** ([`delivery_notes`]): `list_delivery_notes`, `create_delivery_note`,
//!   `update_delivery_note`, `delete_delivery_note`, `download_delivery_note_pdf`
//!
//! Registration and login are the only unauthenticated calls; both write the
//! returned token to the session store. Nothing is retried.

pub mod client;
pub mod clients;
pub mod delivery_notes;
pub mod error;
pub mod mock;
pub mod models;
pub mod onboarding;
pub mod projects;
pub mod transport;

pub use client::ApiClient;
pub use error::ApiError;
pub use mock::RecordingTransport;
pub use models::{
    Address, AuthResponse, Client, ClientInput, Credentials, DeliveryNote, DeliveryNoteInput,
    NoteFormat, Project, ProjectInput, RegisterRequest, UserInfo,
};
pub use transport::{ApiRequest, ApiResponse, HttpTransport, Method, Transport};
