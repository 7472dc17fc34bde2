use dioxus::prelude::*;

use crate::VIEWS_CSS;

#[component]
pub fn HomeView(on_register: EventHandler<()>, on_login: EventHandler<()>) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }

        div {
            class: "landing",
            h1 { class: "landing-title", "Welcome to Bildy Wrapper" }
            p { class: "landing-subtitle", "Choose an option to proceed:" }
            div {
                class: "landing-actions",
                button {
                    class: "btn btn-primary",
                    onclick: move |_| on_register.call(()),
                    "Register"
                }
                button {
                    class: "btn btn-secondary",
                    onclick: move |_| on_login.call(()),
                    "Login"
                }
            }
        }
    }
}
