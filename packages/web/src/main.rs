use dioxus::prelude::*;

use store::AppConfig;
use ui::SessionProvider;
use views::{
    Clients, DeliveryNotes, Home, Login, NotFound, ProjectDetail, Projects, Protected, Register,
    Shell, Validate,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
        #[route("/")]
        Home {},
        #[route("/onboarding/register")]
        Register {},
        #[route("/onboarding/login")]
        Login {},
        #[route("/onboarding/validate")]
        Validate {},
        #[layout(Protected)]
            #[route("/clients")]
            Clients {},
            #[route("/projects")]
            Projects {},
            #[route("/projects/:id")]
            ProjectDetail { id: String },
            #[route("/delivery-notes")]
            DeliveryNotes {},
        #[end_layout]
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Shipped next to the crate as `bildy.toml`.
const BUNDLED_CONFIG: &str = include_str!("../bildy.toml");

fn main() {
    dioxus::launch(App);
}

fn load_config() -> AppConfig {
    match AppConfig::from_toml(BUNDLED_CONFIG) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("ignoring invalid {}: {e}", AppConfig::filename());
            AppConfig::default()
        }
    }
}

#[component]
fn App() -> Element {
    let config = use_hook(load_config);

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        SessionProvider {
            config,
            Router::<Route> {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_config_parses() {
        let config = AppConfig::from_toml(BUNDLED_CONFIG).unwrap();
        assert_eq!(config.base_url(), "https://bildy-rpmaya.koyeb.app");
        assert_eq!(config.session.token_key, "jwt");
    }

    #[test]
    fn test_routes_render_paths() {
        assert_eq!(Route::Clients {}.to_string(), "/clients");
        assert_eq!(
            Route::ProjectDetail { id: "p1".into() }.to_string(),
            "/projects/p1"
        );
        assert_eq!(Route::Validate {}.to_string(), "/onboarding/validate");
    }

    #[test]
    fn test_unknown_path_is_not_found() {
        let route: Route = "/nowhere/at/all".parse().unwrap();
        assert!(matches!(route, Route::NotFound { .. }));
    }
}
