use dioxus::prelude::*;

/// Page-level error line. Renders nothing without a message.
#[component]
pub fn ErrorBanner(message: Option<String>) -> Element {
    rsx! {
        if let Some(message) = message {
            div {
                class: "error-banner",
                role: "alert",
                "{message}"
            }
        }
    }
}

#[component]
pub fn Spinner() -> Element {
    rsx! {
        div {
            class: "spinner-wrap",
            div { class: "spinner" }
        }
    }
}

#[component]
pub fn EmptyState(title: String, #[props(default)] hint: String) -> Element {
    rsx! {
        div {
            class: "empty-state",
            h2 { class: "empty-state-title", "{title}" }
            if !hint.is_empty() {
                p { class: "empty-state-hint", "{hint}" }
            }
        }
    }
}
