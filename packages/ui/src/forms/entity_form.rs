use dioxus::prelude::*;

use super::schema::{FieldErrors, FieldKind, FieldSpec, FormSchema, FormValues, SelectOption, SelectOptions};

/// Generic form over a [`FormSchema`].
///
/// Starts from `initial`, validates on submit and shows the first failing
/// message under each field. `on_submit` only fires with a clean form.
/// Callers give the form a `key` tied to the record being edited so that
/// switching records starts from fresh state.
#[component]
pub fn EntityForm(
    schema: FormSchema,
    initial: FormValues,
    #[props(default)] title: String,
    #[props(default)] options: SelectOptions,
    #[props(default = "Save".to_string())] submit_label: String,
    #[props(default)] busy: bool,
    on_submit: EventHandler<FormValues>,
    on_cancel: Option<EventHandler<()>>,
) -> Element {
    let mut values = use_signal(|| initial.clone());
    let mut errors = use_signal(FieldErrors::new);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let current = values();
        let found = schema.validate(&current);
        let clean = found.is_empty();
        errors.set(found);
        if clean {
            on_submit.call(current);
        } else {
            tracing::debug!("form blocked by {} field error(s)", errors.read().len());
        }
    };

    let current = values();

    rsx! {
        form {
            class: "entity-form",
            onsubmit: handle_submit,

            if !title.is_empty() {
                h2 { class: "entity-form-title", "{title}" }
            }

            for (index, section) in schema.sections.iter().enumerate() {
                div {
                    key: "{index}",
                    class: "entity-form-section",
                    if let Some(heading) = section.heading {
                        h3 { class: "entity-form-heading", "{heading}" }
                    }
                    div {
                        class: if section.heading.is_some() { "entity-form-grid" } else { "entity-form-stack" },
                        for field in section.fields.iter().filter(|f| schema.is_visible(f, &current)) {
                            FieldInput {
                                key: "{field.key}",
                                field: *field,
                                value: current.get(field.key).to_string(),
                                error: errors.read().get(field.key).cloned(),
                                options: options.get(field.key).cloned().unwrap_or_default(),
                                on_change: move |value: String| {
                                    values.write().set(field.key, value);
                                    errors.write().remove(field.key);
                                },
                            }
                        }
                    }
                }
            }

            div {
                class: "entity-form-actions",
                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: busy,
                    if busy { "Saving..." } else { "{submit_label}" }
                }
                if let Some(cancel) = on_cancel {
                    button {
                        class: "btn",
                        r#type: "button",
                        onclick: move |_| cancel.call(()),
                        "Cancel"
                    }
                }
            }
        }
    }
}

#[component]
fn FieldInput(
    field: FieldSpec,
    value: String,
    error: Option<String>,
    options: Vec<SelectOption>,
    on_change: EventHandler<String>,
) -> Element {
    let id = format!("field-{}", field.key.replace('.', "-"));

    let control = match field.kind {
        FieldKind::TextArea => rsx! {
            textarea {
                id: "{id}",
                class: "field-control",
                placeholder: field.placeholder,
                value: "{value}",
                oninput: move |evt: FormEvent| on_change.call(evt.value()),
            }
        },
        FieldKind::Select => rsx! {
            select {
                id: "{id}",
                class: "field-control",
                value: "{value}",
                onchange: move |evt: FormEvent| on_change.call(evt.value()),
                if field.choices.is_empty() {
                    option { value: "", disabled: true, "Select a {field.label}" }
                }
                for (choice, label) in field.choices.iter() {
                    option { key: "{choice}", value: "{choice}", "{label}" }
                }
                for opt in options.iter() {
                    option { key: "{opt.value}", value: "{opt.value}", "{opt.label}" }
                }
            }
        },
        FieldKind::ReadOnly => rsx! {
            input {
                id: "{id}",
                class: "field-control field-readonly",
                readonly: true,
                value: "{value}",
            }
        },
        kind => rsx! {
            input {
                id: "{id}",
                class: "field-control",
                r#type: kind.input_type(),
                placeholder: field.placeholder,
                value: "{value}",
                oninput: move |evt: FormEvent| on_change.call(evt.value()),
            }
        },
    };

    rsx! {
        div {
            class: "field",
            label { class: "field-label", r#for: "{id}", "{field.label}" }
            {control}
            if let Some(message) = error {
                div { class: "field-error", "{message}" }
            }
        }
    }
}
