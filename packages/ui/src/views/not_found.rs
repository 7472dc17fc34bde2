use dioxus::prelude::*;

use crate::VIEWS_CSS;

/// Shown for any path the router does not know.
#[component]
pub fn NotFoundView(on_home: EventHandler<()>) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }

        div {
            class: "landing",
            h1 { class: "landing-code", "404" }
            p { class: "landing-subtitle", "Page Not Found" }
            button {
                class: "btn btn-primary",
                onclick: move |_| on_home.call(()),
                "Go Back Home"
            }
        }
    }
}
