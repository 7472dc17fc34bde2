use dioxus::prelude::*;
use ui::views::ClientsView;

use crate::Route;

#[component]
pub fn Clients() -> Element {
    let nav = use_navigator();

    rsx! {
        ClientsView {
            on_open_project: move |id: String| {
                nav.push(Route::ProjectDetail { id });
            },
        }
    }
}
