//! Sign-in page: email + password form posting to the sign-in service.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page owns the credential form state and the error line. Submission is
//! delegated to [`SigninFlow`] wired with browser ports: `gloo-net` fetch,
//! the app-wide auth signal, `localStorage`, and the router's navigate hook.

#[cfg(test)]
#[path = "signin_test.rs"]
mod signin_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::back_button::BackButton;
use crate::components::button::Button;
use crate::components::field::{Field, PasswordField};
use crate::components::title::Title;
use crate::net::api::BrowserTransport;
use crate::net::signin::SigninFlow;
use crate::state::auth::AuthState;
use crate::state::credentials::{Credentials, CredentialsAction};
use crate::util::storage::LocalStorage;

/// Error line after a submit: a failure replaces it, a success leaves it alone.
fn record_outcome(previous: Option<String>, outcome: Option<String>) -> Option<String> {
    outcome.or(previous)
}

/// Whether the error line renders; an empty message counts as no error.
fn shows_error(error: Option<&String>) -> bool {
    error.is_some_and(|message| !message.is_empty())
}

#[component]
pub fn SigninPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let credentials = RwSignal::new(Credentials::default());
    let error = RwSignal::new(None::<String>);

    let dispatch = move |action: CredentialsAction| {
        credentials.update(|c| *c = std::mem::take(c).reduce(action));
    };
    let on_email = Callback::new(move |email: String| dispatch(CredentialsAction::SetEmail(email)));
    let on_password = Callback::new(move |password: String| dispatch(CredentialsAction::SetPassword(password)));

    // No in-flight guard: every click issues its own request.
    let on_continue = move || {
        let creds = credentials.get_untracked();
        let navigate = navigate.clone();
        let flow = SigninFlow::new(BrowserTransport, auth, LocalStorage, move |path: &str| {
            navigate(path, NavigateOptions::default());
        });
        leptos::task::spawn_local(async move {
            let outcome = flow.submit(&creds).await;
            error.update(|e| *e = record_outcome(e.take(), outcome));
        });
    };

    view! {
        <div>
            <BackButton/>
            <div class="signin-page">
                <Title title="Sign In" description="Select login method"/>
                <div class="field-block">
                    <Field
                        label="Email:"
                        input_type="email"
                        placeholder="Enter your email ..."
                        value=Signal::derive(move || credentials.get().email)
                        on_input=on_email
                    />
                    <PasswordField
                        label="Password:"
                        placeholder="Enter your password ..."
                        value=Signal::derive(move || credentials.get().password)
                        on_input=on_password
                    />
                    <span class="signin-page__recovery">
                        "Forgot your password? "
                        <a href="/recovery">"Restore"</a>
                    </span>
                </div>
                <div>
                    <Button text="Continue" dark=true on_click=on_continue/>
                    <Show when=move || error.with(|e| shows_error(e.as_ref()))>
                        <p class="error-message">{move || error.get().unwrap_or_default()}</p>
                    </Show>
                </div>
            </div>
        </div>
    }
}
