use api::Project;
use dioxus::prelude::*;

use crate::actions;
use crate::session::use_api;
use crate::status::{ErrorBanner, Spinner};
use crate::views::{changed_id, DeliveryNotesPanel};
use crate::VIEWS_CSS;

#[component]
pub fn ProjectDetailView(id: String, on_back: EventHandler<()>) -> Element {
    let api = use_api();
    let mut project_id = use_signal(|| id.clone());
    let next = changed_id(&project_id.peek(), &id);
    if let Some(next) = next {
        project_id.set(next);
    }

    let project = use_resource(move || async move { actions::load_project(&api(), &project_id()).await });

    let body = match &*project.read() {
        None => rsx! { Spinner {} },
        Some(Err(message)) => rsx! {
            ErrorBanner { message: Some(message.clone()) }
        },
        Some(Ok(project)) => rsx! {
            ProjectCard { project: project.clone() }
            {rsx! {
                DeliveryNotesPanel { key: "{project.id}", project: project.clone() }
            }}
        },
    };

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }

        div {
            class: "detail-page",
            button {
                class: "btn btn-link",
                onclick: move |_| on_back.call(()),
                "← Back"
            }
            h1 { class: "view-title", "Project Details" }
            {body}
        }
    }
}

#[component]
fn ProjectCard(project: Project) -> Element {
    let optional = [
        ("Begins", project.begin.clone()),
        ("Ends", project.end.clone()),
        ("Notes", project.notes.clone()),
        ("Created", project.created_at.clone()),
        ("Updated", project.updated_at.clone()),
    ];

    rsx! {
        div {
            class: "panel detail-card",
            h2 { class: "panel-title", "{project.name}" }
            p { span { class: "field-name", "Code: " } "{project.project_code}" }
            p { span { class: "field-name", "Internal Code: " } "{project.code}" }
            p { span { class: "field-name", "Email: " } "{project.email}" }
            p { span { class: "field-name", "Address: " } "{project.address.one_line()}" }
            for (label, value) in optional {
                if let Some(value) = value {
                    p { span { class: "field-name", "{label}: " } "{value}" }
                }
            }
        }
    }
}
