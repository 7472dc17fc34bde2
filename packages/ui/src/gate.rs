//! Route guard for pages that need a session token.

use dioxus::prelude::*;
use store::SessionStore;

use crate::session::use_api;

/// What the gate does with its children.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateDecision {
    Render,
    Redirect,
}

impl GateDecision {
    /// Any non-empty token passes. Expiry is the backend's business.
    pub fn for_token(token: Option<&str>) -> Self {
        match token {
            Some(token) if !token.is_empty() => GateDecision::Render,
            _ => GateDecision::Redirect,
        }
    }
}

/// Renders `children` only when a token is stored at mount time. Otherwise
/// renders nothing and calls `on_unauthenticated` once.
#[component]
pub fn AuthGate(on_unauthenticated: EventHandler<()>, children: Element) -> Element {
    let api = use_api();
    let decision = use_hook(|| GateDecision::for_token(api.read().session().token().as_deref()));

    use_effect(move || {
        if decision == GateDecision::Redirect {
            tracing::info!("no session token, leaving protected page");
            on_unauthenticated.call(());
        }
    });

    match decision {
        GateDecision::Render => rsx! {
            {children}
        },
        GateDecision::Redirect => rsx! {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::MemorySessionStore;

    #[test]
    fn test_missing_or_empty_token_redirects() {
        assert_eq!(GateDecision::for_token(None), GateDecision::Redirect);
        assert_eq!(GateDecision::for_token(Some("")), GateDecision::Redirect);
    }

    #[test]
    fn test_any_token_renders() {
        assert_eq!(GateDecision::for_token(Some("x")), GateDecision::Render);
        assert_eq!(
            GateDecision::for_token(Some("definitely.not.a.jwt")),
            GateDecision::Render
        );
    }

    #[test]
    fn test_logout_flips_decision() {
        let session = MemorySessionStore::with_token("jwt");
        assert_eq!(
            GateDecision::for_token(session.token().as_deref()),
            GateDecision::Render
        );
        session.clear();
        assert_eq!(
            GateDecision::for_token(session.token().as_deref()),
            GateDecision::Redirect
        );
    }
}
