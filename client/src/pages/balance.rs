//! Balance route: landing target after a successful sign-in.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::state::auth::AuthState;

#[component]
pub fn BalancePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let params = use_params_map();
    let account_id = move || params.read().get("id").unwrap_or_default();

    view! {
        <div class="balance-page">
            <h1>"Balance"</h1>
            <p class="balance-page__account">"Account " {account_id}</p>
            <Show when=move || !auth.get().is_authenticated()>
                <p class="balance-page__hint">
                    "No active session. "
                    <a href="/signin">"Sign in"</a>
                </p>
            </Show>
        </div>
    }
}
