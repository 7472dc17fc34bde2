use dioxus::prelude::*;
use ui::views::{ProjectDetailView, ProjectsView};

use crate::Route;

#[component]
pub fn Projects() -> Element {
    let nav = use_navigator();

    rsx! {
        ProjectsView {
            on_open_project: move |id: String| {
                nav.push(Route::ProjectDetail { id });
            },
        }
    }
}

#[component]
pub fn ProjectDetail(id: String) -> Element {
    let nav = use_navigator();

    rsx! {
        ProjectDetailView {
            id,
            on_back: move |_| {
                if nav.can_go_back() {
                    nav.go_back();
                } else {
                    nav.push(Route::Projects {});
                }
            },
        }
    }
}
