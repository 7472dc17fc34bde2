use dioxus::prelude::*;
use ui::{use_session, AuthGate, Footer, LogoutButton, Navbar};

use crate::Route;

/// Header and footer around every page.
#[component]
pub fn Shell() -> Element {
    let nav = use_navigator();
    let session = use_session();

    rsx! {
        div {
            class: "app-shell",
            Navbar {
                if session.read().authenticated {
                    Link { to: Route::Clients {}, "Clients" }
                    Link { to: Route::Projects {}, "Projects" }
                    Link { to: Route::DeliveryNotes {}, "Delivery Notes" }
                    LogoutButton {
                        on_logged_out: move |_| {
                            nav.push(Route::Home {});
                        },
                    }
                } else {
                    Link { to: Route::Login {}, "Login" }
                    Link { to: Route::Register {}, "Register" }
                }
            }
            main {
                class: "app-main",
                Outlet::<Route> {}
            }
            Footer {}
        }
    }
}

/// Pages that need a stored token; anyone else goes back to the landing page.
#[component]
pub fn Protected() -> Element {
    let nav = use_navigator();

    rsx! {
        AuthGate {
            on_unauthenticated: move |_| {
                nav.replace(Route::Home {});
            },
            Outlet::<Route> {}
        }
    }
}
