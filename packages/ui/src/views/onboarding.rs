//! Register, validate and login pages. Each reports success through its
//! handler and leaves navigation to the router.

use dioxus::prelude::*;

use crate::actions;
use crate::forms::{credentials, register_request, validation_code, EntityForm, FormValues, LOGIN_FORM, REGISTER_FORM, VALIDATE_FORM};
use crate::session::{use_api, use_session, SessionState};
use crate::status::ErrorBanner;
use crate::VIEWS_CSS;

#[component]
fn OnboardingCard(title: String, error: Option<String>, children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }

        div {
            class: "onboarding-page",
            div {
                class: "onboarding-card",
                h1 { class: "onboarding-title", "{title}" }
                ErrorBanner { message: error }
                {children}
            }
        }
    }
}

/// Sign-up. The backend answers with a token, so the user is signed in
/// and only has to confirm the emailed code next.
#[component]
pub fn RegisterView(on_registered: EventHandler<()>) -> Element {
    let api = use_api();
    let mut session = use_session();
    let mut error = use_signal(|| Option::<String>::None);
    let mut busy = use_signal(|| false);

    let submit = move |values: FormValues| {
        let request = register_request(&values);
        busy.set(true);
        spawn(async move {
            match actions::register(&api(), &request).await {
                Ok(response) => {
                    session.set(SessionState::signed_in(&response));
                    error.set(None);
                    on_registered.call(());
                }
                Err(e) => error.set(Some(e)),
            }
            busy.set(false);
        });
    };

    rsx! {
        OnboardingCard {
            title: "Register",
            error: error(),
            EntityForm {
                schema: REGISTER_FORM,
                initial: FormValues::new(),
                submit_label: "Sign Up".to_string(),
                busy: busy(),
                on_submit: submit,
                on_cancel: None::<EventHandler<()>>,
            }
        }
    }
}

/// Confirms the code sent by email, using the token stored at sign-up.
#[component]
pub fn ValidateView(on_validated: EventHandler<()>) -> Element {
    let api = use_api();
    let mut error = use_signal(|| Option::<String>::None);
    let mut busy = use_signal(|| false);

    let submit = move |values: FormValues| {
        let code = validation_code(&values);
        busy.set(true);
        spawn(async move {
            match actions::validate_email(&api(), &code).await {
                Ok(()) => {
                    error.set(None);
                    on_validated.call(());
                }
                Err(e) => error.set(Some(e)),
            }
            busy.set(false);
        });
    };

    rsx! {
        OnboardingCard {
            title: "Email Validation",
            error: error(),
            p { class: "view-muted", "Enter the code we sent to your email address." }
            EntityForm {
                schema: VALIDATE_FORM,
                initial: FormValues::new(),
                submit_label: "Validate".to_string(),
                busy: busy(),
                on_submit: submit,
                on_cancel: None::<EventHandler<()>>,
            }
        }
    }
}

#[component]
pub fn LoginView(on_logged_in: EventHandler<()>) -> Element {
    let api = use_api();
    let mut session = use_session();
    let mut error = use_signal(|| Option::<String>::None);
    let mut busy = use_signal(|| false);

    let submit = move |values: FormValues| {
        let credentials = credentials(&values);
        busy.set(true);
        spawn(async move {
            match actions::login(&api(), &credentials).await {
                Ok(response) => {
                    session.set(SessionState::signed_in(&response));
                    error.set(None);
                    on_logged_in.call(());
                }
                Err(e) => error.set(Some(e)),
            }
            busy.set(false);
        });
    };

    rsx! {
        OnboardingCard {
            title: "Login",
            error: error(),
            EntityForm {
                schema: LOGIN_FORM,
                initial: FormValues::new(),
                submit_label: "Log In".to_string(),
                busy: busy(),
                on_submit: submit,
                on_cancel: None::<EventHandler<()>>,
            }
        }
    }
}
