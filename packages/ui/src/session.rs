//! Session context: the API client every view talks through, and the
//! signed-in state the header reacts to.

use api::{ApiClient, AuthResponse, HttpTransport, UserInfo};
use dioxus::prelude::*;
use store::{AppConfig, SessionStore};

/// Token storage for the current platform.
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformSession = store::LocalStorageSession;
#[cfg(all(target_arch = "wasm32", not(feature = "web")))]
pub type PlatformSession = store::MemorySessionStore;
#[cfg(not(target_arch = "wasm32"))]
pub type PlatformSession = store::FileSessionStore;

/// The client shared through context.
pub type Api = ApiClient<HttpTransport, PlatformSession>;

fn platform_session(token_key: &str) -> PlatformSession {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::LocalStorageSession::new(token_key)
    }
    #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
    {
        let _ = token_key;
        store::MemorySessionStore::new()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        store::FileSessionStore::in_data_dir(token_key)
    }
}

/// Build the platform client for `config`.
pub fn make_api(config: &AppConfig) -> Api {
    ApiClient::new(
        HttpTransport::new(config.base_url()),
        platform_session(&config.session.token_key),
    )
}

/// Whether a token is held, plus whatever the backend told us about the user.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    pub authenticated: bool,
    pub user: Option<UserInfo>,
}

impl SessionState {
    pub fn signed_in(response: &AuthResponse) -> Self {
        Self {
            authenticated: true,
            user: response.user.clone(),
        }
    }
}

/// The shared client. Read it with `api()` inside tasks.
pub fn use_api() -> Signal<Api> {
    use_context::<Signal<Api>>()
}

pub fn use_session() -> Signal<SessionState> {
    use_context::<Signal<SessionState>>()
}

/// Makes the client and session state available to everything below it.
#[component]
pub fn SessionProvider(config: AppConfig, children: Element) -> Element {
    let api = use_context_provider(|| Signal::new(make_api(&config)));
    use_context_provider(|| {
        Signal::new(SessionState {
            authenticated: api.read().session().token().is_some(),
            user: None,
        })
    });

    rsx! {
        {children}
    }
}

/// Clears the stored token and reports back so the caller can navigate.
#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
    on_logged_out: EventHandler<()>,
) -> Element {
    let api = use_api();
    let mut session = use_session();

    let onclick = move |_| {
        api.read().logout();
        session.set(SessionState::default());
        on_logged_out.call(());
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_make_api_uses_configured_backend() {
        let config = AppConfig::new("https://bildy.test/").with_token_key("bildy_test_unused");
        let api = make_api(&config);
        assert_eq!(api.transport().base_url(), "https://bildy.test");
    }

    #[test]
    fn test_signed_in_keeps_user() {
        let response = AuthResponse {
            token: "t".into(),
            user: Some(UserInfo {
                email: "ana@bildy.es".into(),
                ..Default::default()
            }),
        };
        let state = SessionState::signed_in(&response);
        assert!(state.authenticated);
        assert_eq!(state.user.map(|u| u.email).as_deref(), Some("ana@bildy.es"));
    }
}
