use dioxus::prelude::*;

use crate::icons::FaHelmetSafety;
use crate::Icon;
use crate::VIEWS_CSS;

/// Top bar. Platform crates pass their router links and the logout button
/// as children.
#[component]
pub fn Navbar(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        header {
            class: "navbar",
            div {
                class: "navbar-brand",
                Icon { icon: FaHelmetSafety, width: 18, height: 18 }
                span { "Bildy Wrapper" }
            }
            nav {
                class: "navbar-links",
                {children}
            }
        }
    }
}

#[component]
pub fn Footer() -> Element {
    rsx! {
        footer {
            class: "footer",
            p { "© 2024 Bildy Wrapper. All rights reserved." }
        }
    }
}
