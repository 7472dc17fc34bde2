use api::{Client, DeliveryNote, DeliveryNoteInput, Project};
use dioxus::prelude::*;

use crate::actions::{self, Confirmation, DELETE_NOTE_PROMPT};
use crate::forms::DeliveryNoteForm;
use crate::icons::{FaFilePdf, FaPen, FaPlus, FaTrash};
use crate::session::use_api;
use crate::status::{ErrorBanner, Spinner};
use crate::views::{changed_id, ConfirmDialog, Editor};
use crate::Icon;

/// Delivery notes of one project: list, inline form, delete and PDF
/// download. A new `project` reloads the list.
#[component]
pub fn DeliveryNotesPanel(project: Project) -> Element {
    let api = use_api();
    let mut project_id = use_signal(|| project.id.clone());
    let mut notes = use_signal(Vec::<DeliveryNote>::new);
    let mut clients = use_signal(Vec::<Client>::new);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);
    let mut editor = use_signal(|| Editor::<DeliveryNote>::Closed);
    let mut saving = use_signal(|| false);
    let mut downloading = use_signal(|| Option::<String>::None);
    let mut pending_delete = use_signal(|| Option::<String>::None);

    let next = changed_id(&project_id.peek(), &project.id);
    if let Some(next) = next {
        editor.set(Editor::Closed);
        pending_delete.set(None);
        notes.set(Vec::new());
        loading.set(true);
        project_id.set(next);
    }

    let _loader = use_resource(move || async move {
        let panel = actions::load_notes_panel(&api(), &project_id()).await;
        notes.set(panel.items);
        clients.set(panel.clients);
        error.set(panel.error);
        loading.set(false);
    });

    let save = move |input: DeliveryNoteInput| {
        let existing_id = match editor() {
            Editor::Edit(note) => Some(note.id),
            _ => None,
        };
        saving.set(true);
        spawn(async move {
            match actions::save_delivery_note(&api(), existing_id.as_deref(), &input).await {
                Ok(list) => {
                    notes.set(list);
                    editor.set(Editor::Closed);
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
            match actions::delete_delivery_note(&api(), &project_id(), &id, answer).await {
                Ok(Some(list)) => notes.set(list),
                Ok(None) => {}
                Err(e) => error.set(Some(e)),
            }
        });
    };

    let mut download = move |id: String| {
        downloading.set(Some(id.clone()));
        spawn(async move {
            if let Err(e) = actions::download_delivery_note(&api(), &id).await {
                error.set(Some(e));
            }
            downloading.set(None);
        });
    };

    let form = match editor() {
        Editor::Closed => rsx! {},
        Editor::Create => rsx! {
            DeliveryNoteForm {
                existing: None,
                project_id: project.id.clone(),
                client_id: project.client_id.clone(),
                clients: clients(),
                busy: saving(),
                on_submit: save,
                on_cancel: move |_| editor.set(Editor::Closed),
            }
        },
        Editor::Edit(note) => rsx! {
            DeliveryNoteForm {
                existing: Some(note),
                project_id: project.id.clone(),
                client_id: project.client_id.clone(),
                clients: clients(),
                busy: saving(),
                on_submit: save,
                on_cancel: move |_| editor.set(Editor::Closed),
            }
        },
    };

    rsx! {
        section {
            class: "notes-panel",
            div {
                class: "notes-panel-header",
                h3 { class: "view-section-title", "Delivery Notes" }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| {
                        if editor().is_open() {
                            editor.set(Editor::Closed);
                        } else {
                            editor.set(Editor::Create);
                        }
                    },
                    if editor().is_open() {
                        "Cancel"
                    } else {
                        Icon { icon: FaPlus, width: 12, height: 12 }
                        span { "Add Delivery Note" }
                    }
                }
            }

            ErrorBanner { message: error() }

            {form}

            if loading() {
                Spinner {}
            } else if notes.read().is_empty() {
                p { class: "view-muted", "No delivery notes available." }
            } else {
                ul {
                    class: "item-list",
                    for note in notes() {
                        li {
                            key: "{note.id}",
                            class: "item note-row",
                            div {
                                class: "note-summary",
                                p { span { class: "field-name", "Date: " } "{note.workdate}" }
                                p { span { class: "field-name", "{note.format.label()}: " } "{note.quantity()}" }
                                if !note.description.is_empty() {
                                    p { class: "view-muted", "{note.description}" }
                                }
                            }
                            div {
                                class: "row-actions",
                                button {
                                    class: "btn",
                                    disabled: downloading().as_deref() == Some(note.id.as_str()),
                                    onclick: {
                                        let id = note.id.clone();
                                        move |_| download(id.clone())
                                    },
                                    Icon { icon: FaFilePdf, width: 12, height: 12 }
                                    span { "Download PDF" }
                                }
                                button {
                                    class: "btn btn-warning",
                                    onclick: {
                                        let note = note.clone();
                                        move |_| editor.set(Editor::Edit(note.clone()))
                                    },
                                    Icon { icon: FaPen, width: 12, height: 12 }
                                    span { "Edit" }
                                }
                                button {
                                    class: "btn btn-danger",
                                    onclick: {
                                        let id = note.id.clone();
                                        move |_| pending_delete.set(Some(id.clone()))
                                    },
                                    Icon { icon: FaTrash, width: 12, height: 12 }
                                    span { "Delete" }
                                }
                            }
                        }
                    }
                }
            }
        }

        if pending_delete().is_some() {
            ConfirmDialog {
                message: DELETE_NOTE_PROMPT.to_string(),
                on_answer: answer_delete,
            }
        }
    }
}
