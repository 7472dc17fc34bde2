use api::{Client, Project, ProjectInput};
use dioxus::prelude::*;

use crate::actions::{self, Confirmation, ProjectOverview, DELETE_PROJECT_PROMPT};
use crate::forms::ProjectForm;
use crate::icons::{FaArrowRight, FaPen, FaPlus, FaTrash};
use crate::session::use_api;
use crate::status::{EmptyState, ErrorBanner, Spinner};
use crate::views::{ConfirmDialog, Editor};
use crate::Icon;
use crate::VIEWS_CSS;

/// All projects on the left; the selected one with a short summary of its
/// delivery notes on the right.
#[component]
pub fn ProjectsView(on_open_project: EventHandler<String>) -> Element {
    let api = use_api();
    let mut projects = use_signal(Vec::<Project>::new);
    let mut clients = use_signal(Vec::<Client>::new);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);
    let mut overview = use_signal(|| Option::<ProjectOverview>::None);
    let mut editor = use_signal(|| Editor::<Project>::Closed);
    let mut saving = use_signal(|| false);
    let mut pending_delete = use_signal(|| Option::<String>::None);

    let _loader = use_resource(move || async move {
        let page = actions::load_projects_page(&api()).await;
        projects.set(page.items);
        clients.set(page.clients);
        if page.error.is_some() {
            error.set(page.error);
        }
        loading.set(false);
    });

    let mut select = move |id: String| {
        editor.set(Editor::Closed);
        overview.set(None);
        spawn(async move {
            match actions::select_project(&api(), &id).await {
                Ok(found) => {
                    overview.set(Some(found));
                    error.set(None);
                }
                Err(e) => error.set(Some(e)),
            }
        });
    };

    let save = move |input: ProjectInput| {
        let existing_id = match editor() {
            Editor::Edit(project) => Some(project.id),
            _ => None,
        };
        saving.set(true);
        spawn(async move {
            match actions::save_project(&api(), existing_id.as_deref(), &input).await {
                Ok(list) => {
                    projects.set(list);
                    editor.set(Editor::Closed);
                    overview.set(None);
                    error.set(None);
                }
                Err(e) => error.set(Some(e)),
            }
            saving.set(false);
        });
    };

    let answer_delete = move |answer: Confirmation| {
        let Some(id) = pending_delete.write().take() else {
            return;
        };
        spawn(async move {
            match actions::delete_project(&api(), &id, answer).await {
                Ok(Some(list)) => {
                    projects.set(list);
                    overview.set(None);
                }
                Ok(None) => {}
                Err(e) => error.set(Some(e)),
            }
        });
    };

    let form = match editor() {
        Editor::Closed => rsx! {},
        Editor::Create => rsx! {
            ProjectForm {
                existing: None,
                clients: clients(),
                busy: saving(),
                on_submit: save,
                on_cancel: move |_| editor.set(Editor::Closed),
            }
        },
        Editor::Edit(project) => rsx! {
            ProjectForm {
                existing: Some(project),
                clients: clients(),
                busy: saving(),
                on_submit: save,
                on_cancel: move |_| editor.set(Editor::Closed),
            }
        },
    };

    let selected_id = overview().map(|o| o.project.id);

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }

        div {
            class: "split-page",

            section {
                class: "panel panel-list",
                h2 { class: "panel-title", "Projects" }
                ErrorBanner { message: error() }

                button {
                    class: "btn btn-primary btn-block",
                    onclick: move |_| {
                        if editor().is_open() {
                            editor.set(Editor::Closed);
                        } else {
                            overview.set(None);
                            editor.set(Editor::Create);
                        }
                    },
                    if editor().is_open() {
                        "Cancel"
                    } else {
                        Icon { icon: FaPlus, width: 12, height: 12 }
                        span { "Add New Project" }
                    }
                }

                {form}

                if loading() {
                    Spinner {}
                } else if projects.read().is_empty() {
                    p { class: "view-muted", "No projects yet." }
                } else {
                    ul {
                        class: "item-list",
                        for project in projects() {
                            li {
                                key: "{project.id}",
                                class: if selected_id.as_deref() == Some(project.id.as_str()) { "item active" } else { "item" },
                                onclick: {
                                    let id = project.id.clone();
                                    move |_| select(id.clone())
                                },
                                span { class: "item-title", "{project.name}" }
                                span { class: "item-meta", "{project.project_code}" }
                            }
                        }
                    }
                }
            }

            section {
                class: "panel panel-detail",
                if let Some(ProjectOverview { project, notes }) = overview() {
                    h2 { class: "panel-title", "{project.name}" }
                    p { span { class: "field-name", "Code: " } "{project.project_code}" }
                    p { span { class: "field-name", "Internal Code: " } "{project.code}" }
                    p { span { class: "field-name", "Email: " } "{project.email}" }
                    p { span { class: "field-name", "Address: " } "{project.address.one_line()}" }
                    div {
                        class: "row-actions",
                        button {
                            class: "btn btn-primary",
                            onclick: {
                                let id = project.id.clone();
                                move |_| on_open_project.call(id.clone())
                            },
                            span { "Open" }
                            Icon { icon: FaArrowRight, width: 12, height: 12 }
                        }
                        button {
                            class: "btn btn-warning",
                            onclick: {
                                let project = project.clone();
                                move |_| editor.set(Editor::Edit(project.clone()))
                            },
                            Icon { icon: FaPen, width: 12, height: 12 }
                            span { "Edit" }
                        }
                        button {
                            class: "btn btn-danger",
                            onclick: {
                                let id = project.id.clone();
                                move |_| pending_delete.set(Some(id.clone()))
                            },
                            Icon { icon: FaTrash, width: 12, height: 12 }
                            span { "Delete" }
                        }
                    }

                    h3 { class: "view-section-title", "Delivery Notes" }
                    if notes.is_empty() {
                        p { class: "view-muted", "No delivery notes available." }
                    } else {
                        ul {
                            class: "item-list",
                            for note in notes {
                                li {
                                    key: "{note.id}",
                                    class: "item",
                                    span { class: "item-title", "{note.workdate}" }
                                    span { class: "item-meta", "{note.format.label()}: {note.quantity()}" }
                                }
                            }
                        }
                    }
                } else {
                    EmptyState {
                        title: "No project selected",
                        hint: "Select a project from the left panel to view its details and delivery notes.",
                    }
                }
            }
        }

        if pending_delete().is_some() {
            ConfirmDialog {
                message: DELETE_PROJECT_PROMPT.to_string(),
                on_answer: answer_delete,
            }
        }
    }
}
