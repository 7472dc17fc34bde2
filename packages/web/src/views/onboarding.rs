//! Register → validate → login → clients.

use dioxus::prelude::*;
use ui::views::{LoginView, RegisterView, ValidateView};

use crate::Route;

#[component]
pub fn Register() -> Element {
    let nav = use_navigator();

    rsx! {
        RegisterView {
            on_registered: move |_| {
                nav.push(Route::Validate {});
            },
        }
    }
}

#[component]
pub fn Validate() -> Element {
    let nav = use_navigator();

    rsx! {
        ValidateView {
            on_validated: move |_| {
                nav.push(Route::Login {});
            },
        }
    }
}

#[component]
pub fn Login() -> Element {
    let nav = use_navigator();

    rsx! {
        LoginView {
            on_logged_in: move |_| {
                nav.replace(Route::Clients {});
            },
        }
    }
}
