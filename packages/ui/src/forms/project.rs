use api::{Client, Project, ProjectInput};
use dioxus::prelude::*;

use super::address::{address_from, address_values, PROJECT_ADDRESS_SECTION};
use super::entity_form::EntityForm;
use super::schema::{
    FieldKind, FieldSpec, FormSchema, FormSection, FormValues, Rule, SelectOption, SelectOptions,
};

pub const PROJECT_FORM: FormSchema = FormSchema {
    sections: &[
        FormSection {
            heading: None,
            fields: &[
                FieldSpec::new("name", "Project Name", FieldKind::Text)
                    .rules(&[Rule::Required("Project name is required")]),
                FieldSpec::new("projectCode", "Project Code", FieldKind::Text)
                    .rules(&[Rule::Required("Project code is required")]),
                FieldSpec::new("email", "Email", FieldKind::Email).rules(&[
                    Rule::Required("Email is required"),
                    Rule::Email("Invalid email address"),
                ]),
            ],
        },
        PROJECT_ADDRESS_SECTION,
        FormSection {
            heading: None,
            fields: &[
                FieldSpec::new("code", "Internal Code", FieldKind::Text)
                    .rules(&[Rule::Required("Internal code is required")]),
                FieldSpec::new("clientId", "Client", FieldKind::Select)
                    .rules(&[Rule::Required("Client is required")]),
            ],
        },
    ],
};

pub fn project_values(existing: Option<&Project>) -> FormValues {
    let project = existing.cloned().unwrap_or_default();
    let values = FormValues::new()
        .with("name", project.name)
        .with("projectCode", project.project_code)
        .with("email", project.email)
        .with("code", project.code)
        .with("clientId", project.client_id);
    address_values(values, &project.address)
}

pub fn project_input(values: &FormValues) -> ProjectInput {
    ProjectInput {
        name: values.get("name").to_string(),
        project_code: values.get("projectCode").to_string(),
        email: values.get("email").to_string(),
        address: address_from(values),
        code: values.get("code").to_string(),
        client_id: values.get("clientId").to_string(),
    }
}

fn client_options(clients: &[Client]) -> SelectOptions {
    let choices = clients
        .iter()
        .map(|client| SelectOption::new(client.id.clone(), client.name.clone()))
        .collect();
    SelectOptions::from([("clientId", choices)])
}

/// Create or update a project; the owning client is picked from `clients`.
#[component]
pub fn ProjectForm(
    existing: Option<Project>,
    clients: Vec<Client>,
    #[props(default)] busy: bool,
    on_submit: EventHandler<ProjectInput>,
    on_cancel: EventHandler<()>,
) -> Element {
    let title = if existing.is_some() { "Edit Project" } else { "Create Project" };
    let key = existing.as_ref().map(|p| p.id.clone()).unwrap_or_default();

    rsx! {
        EntityForm {
            key: "{key}",
            schema: PROJECT_FORM,
            initial: project_values(existing.as_ref()),
            title: title.to_string(),
            options: client_options(&clients),
            submit_label: "Save Project".to_string(),
            busy,
            on_submit: move |values: FormValues| on_submit.call(project_input(&values)),
            on_cancel,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_messages() {
        let errors = PROJECT_FORM.validate(&project_values(None));
        for (key, message) in [
            ("name", "Project name is required"),
            ("projectCode", "Project code is required"),
            ("email", "Email is required"),
            ("code", "Internal code is required"),
            ("clientId", "Client is required"),
            ("address.city", "City is required"),
        ] {
            assert_eq!(errors.get(key).map(String::as_str), Some(message), "{key}");
        }
    }

    #[test]
    fn test_invalid_email() {
        let values = project_values(None).with("email", "obra-at-acme");
        let errors = PROJECT_FORM.validate(&values);
        assert_eq!(errors.get("email").map(String::as_str), Some("Invalid email address"));
    }

    #[test]
    fn test_free_text_address_is_kept() {
        let values = project_values(None)
            .with("name", "Reforma")
            .with("projectCode", "PRJ-1")
            .with("email", "obra@acme.es")
            .with("code", "INT-7")
            .with("clientId", "c1")
            .with("address.street", "Luna")
            .with("address.number", "12B")
            .with("address.postal", "08001")
            .with("address.city", "Barcelona")
            .with("address.province", "Barcelona");
        assert!(PROJECT_FORM.validate(&values).is_empty());

        let input = project_input(&values);
        assert_eq!(input.address.number, "12B");
        assert_eq!(input.address.postal, "08001");
    }

    #[test]
    fn test_edit_roundtrip() {
        let project = Project {
            id: "p1".into(),
            name: "Reforma".into(),
            project_code: "PRJ-1".into(),
            email: "obra@acme.es".into(),
            code: "INT-7".into(),
            client_id: "c1".into(),
            ..Default::default()
        };
        let input = project_input(&project_values(Some(&project)));
        assert_eq!(input.project_code, "PRJ-1");
        assert_eq!(input.client_id, "c1");
    }

    #[test]
    fn test_client_options() {
        let clients = vec![Client {
            id: "c1".into(),
            name: "ACME".into(),
            ..Default::default()
        }];
        let options = client_options(&clients);
        assert_eq!(options["clientId"], vec![SelectOption::new("c1", "ACME")]);
    }
}
