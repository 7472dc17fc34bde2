use api::{Client, DeliveryNote, DeliveryNoteInput, NoteFormat};
use dioxus::prelude::*;

use super::entity_form::EntityForm;
use super::schema::{
    FieldKind, FieldSpec, FormSchema, FormSection, FormValues, Rule, SelectOption, SelectOptions,
};

/// Material and hours are mutually exclusive; `format` decides which one is
/// shown, validated and sent.
pub const DELIVERY_NOTE_FORM: FormSchema = FormSchema {
    sections: &[FormSection {
        heading: None,
        fields: &[
            FieldSpec::new("clientId", "Client", FieldKind::Select)
                .rules(&[Rule::Required("Client is required")]),
            FieldSpec::new("projectId", "Project ID", FieldKind::ReadOnly),
            FieldSpec::new("format", "Format", FieldKind::Select)
                .choices(&[("material", "Material"), ("hours", "Hours")])
                .rules(&[Rule::Required("Format is required")]),
            FieldSpec::new("material", "Type of Material", FieldKind::Text)
                .rules(&[Rule::Required("Material type is required")])
                .shown_when("format", "material"),
            FieldSpec::new("hours", "Hours Worked", FieldKind::Number)
                .rules(&[Rule::Positive("Valid hours worked is required")])
                .shown_when("format", "hours"),
            FieldSpec::new("description", "Description", FieldKind::TextArea)
                .rules(&[Rule::Required("Description is required")]),
            FieldSpec::new("workdate", "Work Date", FieldKind::Date)
                .rules(&[Rule::Required("Work date is required")]),
        ],
    }],
};

/// Form state for a note of `project_id`. New notes default to the
/// material format and to `client_id`.
pub fn delivery_note_values(
    existing: Option<&DeliveryNote>,
    project_id: &str,
    client_id: &str,
) -> FormValues {
    match existing {
        Some(note) => FormValues::new()
            .with("clientId", note.client_id.clone())
            .with("projectId", project_id)
            .with("format", note.format.as_str())
            .with("material", note.material.clone().unwrap_or_default())
            .with("hours", note.hours.map(|h| h.to_string()).unwrap_or_default())
            .with("description", note.description.clone())
            .with("workdate", note.workdate.clone()),
        None => FormValues::new()
            .with("clientId", client_id)
            .with("projectId", project_id)
            .with("format", NoteFormat::default().as_str()),
    }
}

pub fn delivery_note_input(values: &FormValues) -> DeliveryNoteInput {
    let format = values.get("format").parse::<NoteFormat>().unwrap_or_default();
    let (material, hours) = match format {
        NoteFormat::Material => (Some(values.get("material").to_string()), None),
        NoteFormat::Hours => (None, values.get("hours").trim().parse::<f64>().ok()),
    };
    DeliveryNoteInput {
        client_id: values.get("clientId").to_string(),
        project_id: values.get("projectId").to_string(),
        format,
        material,
        hours,
        description: values.get("description").to_string(),
        workdate: values.get("workdate").to_string(),
    }
}

/// Create or update a delivery note of one project.
#[component]
pub fn DeliveryNoteForm(
    existing: Option<DeliveryNote>,
    project_id: String,
    /// Client preselected for new notes (the project's owner).
    client_id: String,
    clients: Vec<Client>,
    #[props(default)] busy: bool,
    on_submit: EventHandler<DeliveryNoteInput>,
    on_cancel: EventHandler<()>,
) -> Element {
    let key = existing.as_ref().map(|n| n.id.clone()).unwrap_or_default();
    let choices: Vec<SelectOption> = clients
        .iter()
        .map(|client| SelectOption::new(client.id.clone(), client.name.clone()))
        .collect();
    let options = SelectOptions::from([("clientId", choices)]);

    rsx! {
        EntityForm {
            key: "{key}",
            schema: DELIVERY_NOTE_FORM,
            initial: delivery_note_values(existing.as_ref(), &project_id, &client_id),
            title: "Delivery Note Form".to_string(),
            options,
            submit_label: "Save Delivery Note".to_string(),
            busy,
            on_submit: move |values: FormValues| on_submit.call(delivery_note_input(&values)),
            on_cancel,
        }
    }
}
