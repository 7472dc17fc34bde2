use dioxus::prelude::*;
use ui::views::{HomeView, NotFoundView};

use crate::Route;

#[component]
pub fn Home() -> Element {
    let nav = use_navigator();

    rsx! {
        HomeView {
            on_register: move |_| {
                nav.push(Route::Register {});
            },
            on_login: move |_| {
                nav.push(Route::Login {});
            },
        }
    }
}

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let nav = use_navigator();
    tracing::debug!("no route for /{}", segments.join("/"));

    rsx! {
        NotFoundView {
            on_home: move |_| {
                nav.replace(Route::Home {});
            },
        }
    }
}
