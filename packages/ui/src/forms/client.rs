use api::{Client, ClientInput};
use dioxus::prelude::*;

use super::address::{address_from, address_values, CLIENT_ADDRESS_SECTION};
use super::entity_form::EntityForm;
use super::schema::{FieldKind, FieldSpec, FormSchema, FormSection, FormValues, Rule};

pub const CLIENT_FORM: FormSchema = FormSchema {
    sections: &[
        FormSection {
            heading: None,
            fields: CLIENT_FIELDS,
        },
        CLIENT_ADDRESS_SECTION,
    ],
};

const CLIENT_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("name", "Client Name", FieldKind::Text)
        .rules(&[Rule::Required("Client name is required")]),
    FieldSpec::new("cif", "CIF", FieldKind::Text).rules(&[Rule::Required("CIF is required")]),
];

/// Form state for `existing`, or an empty form.
pub fn client_values(existing: Option<&Client>) -> FormValues {
    let client = existing.cloned().unwrap_or_default();
    let values = FormValues::new()
        .with("name", client.name)
        .with("cif", client.cif);
    address_values(values, &client.address)
}

pub fn client_input(values: &FormValues) -> ClientInput {
    ClientInput {
        name: values.get("name").to_string(),
        cif: values.get("cif").to_string(),
        address: address_from(values),
    }
}

/// Create or update a client.
#[component]
pub fn ClientForm(
    existing: Option<Client>,
    #[props(default)] busy: bool,
    on_submit: EventHandler<ClientInput>,
    on_cancel: EventHandler<()>,
) -> Element {
    let title = if existing.is_some() { "Update Client" } else { "Create Client" };
    let key = existing.as_ref().map(|c| c.id.clone()).unwrap_or_default();

    rsx! {
        EntityForm {
            key: "{key}",
            schema: CLIENT_FORM,
            initial: client_values(existing.as_ref()),
            title: title.to_string(),
            submit_label: "Save Client".to_string(),
            busy,
            on_submit: move |values: FormValues| on_submit.call(client_input(&values)),
            on_cancel,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> FormValues {
        FormValues::new()
            .with("name", "ACME")
            .with("cif", "B12345678")
            .with("address.street", "Mayor")
            .with("address.number", "3")
            .with("address.postal", "28001")
            .with("address.city", "Madrid")
            .with("address.province", "Madrid")
    }

    #[test]
    fn test_empty_form_reports_every_required_field() {
        let errors = CLIENT_FORM.validate(&client_values(None));
        assert_eq!(errors.get("name").map(String::as_str), Some("Client name is required"));
        assert_eq!(errors.get("cif").map(String::as_str), Some("CIF is required"));
        assert_eq!(errors.get("address.street").map(String::as_str), Some("Street is required"));
        assert_eq!(errors.get("address.number").map(String::as_str), Some("Number is required"));
        assert_eq!(errors.get("address.postal").map(String::as_str), Some("Postal code is required"));
        assert_eq!(errors.get("address.city").map(String::as_str), Some("City is required"));
        assert_eq!(errors.get("address.province").map(String::as_str), Some("Province is required"));
        assert_eq!(errors.len(), 7);
    }

    #[test]
    fn test_only_empty_name_blocks() {
        let values = filled().with("name", "   ");
        let errors = CLIENT_FORM.validate(&values);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("name").map(String::as_str), Some("Client name is required"));
    }

    #[test]
    fn test_non_numeric_number_is_rejected() {
        let errors = CLIENT_FORM.validate(&filled().with("address.number", "3B"));
        assert_eq!(
            errors.get("address.number").map(String::as_str),
            Some("Number must be a whole number")
        );
    }

    #[test]
    fn test_input_from_values() {
        let values = filled();
        assert!(CLIENT_FORM.validate(&values).is_empty());
        let input = client_input(&values);
        assert_eq!(input.name, "ACME");
        assert_eq!(input.address.number, "3");
        assert_eq!(input.address.postal, "28001");
    }

    #[test]
    fn test_edit_mode_prefills() {
        let client = Client {
            id: "c1".into(),
            name: "ACME".into(),
            cif: "B1".into(),
            ..Default::default()
        };
        let values = client_values(Some(&client));
        assert_eq!(values.get("name"), "ACME");
        assert_eq!(client_input(&values), ClientInput::from(&client));
    }
}
