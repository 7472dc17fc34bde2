use dioxus::prelude::*;

use crate::actions::Confirmation;

/// A full-screen overlay that centers its children in a modal card.
/// Clicking outside the card triggers `on_close`.
#[component]
pub fn ModalOverlay(on_close: EventHandler<()>, children: Element) -> Element {
    rsx! {
        div {
            class: "modal-backdrop",
            onclick: move |_| on_close.call(()),
            div {
                class: "modal-card",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                {children}
            }
        }
    }
}

/// Yes/no prompt for destructive actions. Dismissing counts as declining.
#[component]
pub fn ConfirmDialog(
    message: String,
    #[props(default = "Delete".to_string())] confirm_label: String,
    on_answer: EventHandler<Confirmation>,
) -> Element {
    rsx! {
        ModalOverlay {
            on_close: move |_| on_answer.call(Confirmation::Declined),
            div {
                class: "confirm-dialog",
                p { class: "confirm-message", "{message}" }
                div {
                    class: "confirm-actions",
                    button {
                        class: "btn",
                        onclick: move |_| on_answer.call(Confirmation::Declined),
                        "Cancel"
                    }
                    button {
                        class: "btn btn-danger",
                        onclick: move |_| on_answer.call(Confirmation::Accepted),
                        "{confirm_label}"
                    }
                }
            }
        }
    }
}
