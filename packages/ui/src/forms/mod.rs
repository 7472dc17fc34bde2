//! Entity and onboarding forms.
//!
//! Each entity module pairs a `const` [`FormSchema`] with two conversions
//! (record → [`FormValues`] for edit mode, [`FormValues`] → typed input for
//! submission) and a thin component over [`EntityForm`].

mod schema;
pub use schema::{
    FieldErrors, FieldKind, FieldSpec, FormSchema, FormSection, FormValues, Rule, SelectOption,
    SelectOptions, ShownWhen,
};

mod entity_form;
pub use entity_form::EntityForm;

mod address;
pub use address::{
    address_from, address_values, CLIENT_ADDRESS_SECTION, PROJECT_ADDRESS_SECTION,
};

mod client;
pub use client::{client_input, client_values, ClientForm, CLIENT_FORM};

mod project;
pub use project::{project_input, project_values, ProjectForm, PROJECT_FORM};

mod delivery_note;
pub use delivery_note::{
    delivery_note_input, delivery_note_values, DeliveryNoteForm, DELIVERY_NOTE_FORM,
};

mod onboarding;
pub use onboarding::{
    credentials, register_request, validation_code, LOGIN_FORM, REGISTER_FORM, VALIDATE_FORM,
};
