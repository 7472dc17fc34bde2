use api::{Client, ClientInput, Project};
use dioxus::prelude::*;

use crate::actions::{self, Confirmation, DELETE_CLIENT_PROMPT};
use crate::forms::ClientForm;
use crate::icons::{FaPen, FaPlus, FaTrash};
use crate::session::use_api;
use crate::status::{EmptyState, ErrorBanner, Spinner};
use crate::views::{ConfirmDialog, Editor};
use crate::Icon;
use crate::VIEWS_CSS;

/// Client list on the left; the selected client, its address and its
/// projects on the right.
#[component]
pub fn ClientsView(on_open_project: EventHandler<String>) -> Element {
    let api = use_api();
    let mut clients = use_signal(Vec::<Client>::new);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);
    let mut selected = use_signal(|| Option::<Client>::None);
    let mut projects = use_signal(Vec::<Project>::new);
    let mut editor = use_signal(|| Editor::<Client>::Closed);
    let mut saving = use_signal(|| false);
    let mut pending_delete = use_signal(|| Option::<String>::None);

    let _loader = use_resource(move || async move {
        match actions::load_clients(&api()).await {
            Ok(list) => clients.set(list),
            Err(e) => error.set(Some(e)),
        }
        loading.set(false);
    });

    let mut select = move |client: Client| {
        let id = client.id.clone();
        selected.set(Some(client));
        editor.set(Editor::Closed);
        projects.set(Vec::new());
        spawn(async move {
            match actions::select_client(&api(), &id).await {
                Ok(list) => projects.set(list),
                Err(e) => error.set(Some(e)),
            }
        });
    };

    let save = move |input: ClientInput| {
        let existing_id = match editor() {
            Editor::Edit(client) => Some(client.id),
            _ => None,
        };
        saving.set(true);
        spawn(async move {
            match actions::save_client(&api(), existing_id.as_deref(), &input).await {
                Ok(list) => {
                    clients.set(list);
                    editor.set(Editor::Closed);
                    if existing_id.is_some() {
                        selected.set(None);
                        projects.set(Vec::new());
                    }
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
            match actions::delete_client(&api(), &id, answer).await {
                Ok(Some(list)) => {
                    clients.set(list);
                    selected.set(None);
                    projects.set(Vec::new());
                }
                Ok(None) => {}
                Err(e) => error.set(Some(e)),
            }
        });
    };

    let form = match editor() {
        Editor::Closed => rsx! {},
        Editor::Create => rsx! {
            ClientForm {
                existing: None,
                busy: saving(),
                on_submit: save,
                on_cancel: move |_| editor.set(Editor::Closed),
            }
        },
        Editor::Edit(client) => rsx! {
            ClientForm {
                existing: Some(client),
                busy: saving(),
                on_submit: save,
                on_cancel: move |_| editor.set(Editor::Closed),
            }
        },
    };

    let selected_id = selected().map(|c| c.id);

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }

        div {
            class: "split-page",

            section {
                class: "panel panel-list",
                h2 { class: "panel-title", "Clients" }
                ErrorBanner { message: error() }

                button {
                    class: "btn btn-primary btn-block",
                    onclick: move |_| {
                        if editor().is_open() {
                            editor.set(Editor::Closed);
                        } else {
                            selected.set(None);
                            editor.set(Editor::Create);
                        }
                    },
                    if editor().is_open() {
                        "Cancel"
                    } else {
                        Icon { icon: FaPlus, width: 12, height: 12 }
                        span { "Add New Client" }
                    }
                }

                {form}

                if loading() {
                    Spinner {}
                } else if clients.read().is_empty() {
                    p { class: "view-muted", "No clients yet." }
                } else {
                    ul {
                        class: "item-list",
                        for client in clients() {
                            li {
                                key: "{client.id}",
                                class: if selected_id.as_deref() == Some(client.id.as_str()) { "item active" } else { "item" },
                                onclick: {
                                    let client = client.clone();
                                    move |_| select(client.clone())
                                },
                                "{client.name}"
                            }
                        }
                    }
                }
            }

            section {
                class: "panel panel-detail",
                if let Some(client) = selected() {
                    h2 { class: "panel-title", "{client.name}" }
                    p { span { class: "field-name", "ID: " } "{client.id}" }
                    p { span { class: "field-name", "CIF: " } "{client.cif}" }
                    p { span { class: "field-name", "Address: " } "{client.address.one_line()}" }
                    div {
                        class: "row-actions",
                        button {
                            class: "btn btn-warning",
                            onclick: {
                                let client = client.clone();
                                move |_| editor.set(Editor::Edit(client.clone()))
                            },
                            Icon { icon: FaPen, width: 12, height: 12 }
                            span { "Edit" }
                        }
                        button {
                            class: "btn btn-danger",
                            onclick: {
                                let id = client.id.clone();
                                move |_| pending_delete.set(Some(id.clone()))
                            },
                            Icon { icon: FaTrash, width: 12, height: 12 }
                            span { "Delete" }
                        }
                    }

                    h3 { class: "view-section-title", "Projects" }
                    if projects.read().is_empty() {
                        p {
                            class: "view-muted",
                            "This client does not have any projects yet. You can add one from the Projects section."
                        }
                    } else {
                        ul {
                            class: "item-list",
                            for project in projects() {
                                li {
                                    key: "{project.id}",
                                    class: "item",
                                    onclick: {
                                        let id = project.id.clone();
                                        move |_| on_open_project.call(id.clone())
                                    },
                                    p { span { class: "field-name", "Name: " } "{project.name}" }
                                    p { span { class: "field-name", "Code: " } "{project.project_code}" }
                                    p { span { class: "field-name", "Internal Code: " } "{project.code}" }
                                }
                            }
                        }
                    }
                } else {
                    EmptyState {
                        title: "No client selected",
                        hint: "Please select a client from the left panel to view details or add a new client.",
                    }
                }
            }
        }

        if pending_delete().is_some() {
            ConfirmDialog {
                message: DELETE_CLIENT_PROMPT.to_string(),
                on_answer: answer_delete,
            }
        }
    }
}
