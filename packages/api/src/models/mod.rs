//! # Wire models
//!
//! Records exchanged with the backend. Field names follow the backend's JSON
//! (camelCase, Mongo `_id`). Read types carry server-owned fields with
//! `#[serde(default)]` so partial documents still decode; the `*Input` types
//! carry only what the forms edit and are what create/update calls send.

mod address;
pub use address::Address;

mod client;
pub use client::{Client, ClientInput};

mod project;
pub use project::{Project, ProjectInput};

mod delivery_note;
pub use delivery_note::{DeliveryNote, DeliveryNoteInput, NoteFormat};

mod user;
pub use user::{AuthResponse, Credentials, RegisterRequest, UserInfo, ValidationCode};
