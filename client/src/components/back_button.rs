//! Top-left back arrow that steps back in browser history.

use leptos::prelude::*;

use crate::util::navigation::history_back;

#[component]
pub fn BackButton() -> impl IntoView {
    view! {
        <div class="back-button">
            <button class="back-button__icon" type="button" title="Back" on:click=move |_| history_back()>
                "\u{2190}"
            </button>
        </div>
    }
}
