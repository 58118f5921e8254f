//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{balance::BalancePage, signin::SigninPage};
use crate::state::auth::AuthState;
use crate::util::storage::LocalStorage;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the auth context and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    provide_context(auth);

    // Pick up a session persisted by an earlier sign-in. Runs only in the browser.
    Effect::new(move || {
        let restored = AuthState::restore(&LocalStorage);
        if restored.is_authenticated() {
            auth.set(restored);
        }
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/wallet.css"/>
        <Title text="Wallet"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=SigninPage/>
                <Route path=StaticSegment("signin") view=SigninPage/>
                <Route path=(StaticSegment("balance"), ParamSegment("id")) view=BalancePage/>
            </Routes>
        </Router>
    }
}
