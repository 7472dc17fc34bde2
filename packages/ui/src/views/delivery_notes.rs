use api::Project;
use dioxus::prelude::*;

use crate::actions;
use crate::session::use_api;
use crate::status::{EmptyState, ErrorBanner, Spinner};
use crate::views::DeliveryNotesPanel;
use crate::VIEWS_CSS;

/// Pick a project, then manage its delivery notes.
#[component]
pub fn DeliveryNotesView() -> Element {
    let api = use_api();
    let mut projects = use_signal(Vec::<Project>::new);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);
    let mut chosen = use_signal(String::new);

    let _loader = use_resource(move || async move {
        match actions::load_projects(&api()).await {
            Ok(list) => projects.set(list),
            Err(e) => error.set(Some(e)),
        }
        loading.set(false);
    });

    let chosen_id = chosen();
    let current = projects.read().iter().find(|p| p.id == chosen_id).cloned();

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }

        div {
            class: "detail-page",
            h1 { class: "view-title", "Delivery Notes" }
            ErrorBanner { message: error() }

            if loading() {
                Spinner {}
            } else {
                label {
                    class: "field",
                    span { class: "field-label", "Project" }
                    select {
                        class: "field-control",
                        value: "{chosen}",
                        onchange: move |evt: FormEvent| chosen.set(evt.value()),
                        option { value: "", "Select a project" }
                        for project in projects() {
                            option {
                                key: "{project.id}",
                                value: "{project.id}",
                                "{project.name} ({project.project_code})"
                            }
                        }
                    }
                }

                if let Some(project) = current {
                    DeliveryNotesPanel { key: "{project.id}", project }
                } else {
                    EmptyState {
                        title: "No project selected",
                        hint: "Choose a project to see and manage its delivery notes.",
                    }
                }
            }
        }
    }
}
