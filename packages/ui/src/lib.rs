//! Shared UI for the Bildy admin front end: session context, the route
//! gate, schema-driven forms, the request workflows behind each page and
//! the page components themselves. Platform crates only add routing.

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod actions;
pub mod download;
pub mod forms;
pub mod views;

pub const VIEWS_CSS: Asset = asset!("/assets/styling/views.css");

mod session;
pub use session::{make_api, use_api, use_session, Api, LogoutButton, PlatformSession, SessionProvider, SessionState};

mod gate;
pub use gate::{AuthGate, GateDecision};

mod navbar;
pub use navbar::{Footer, Navbar};

mod status;
pub use status::{EmptyState, ErrorBanner, Spinner};
