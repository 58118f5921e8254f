//! Primary action button.

use leptos::prelude::*;

#[component]
pub fn Button<F>(#[prop(into)] text: String, #[prop(optional)] dark: bool, on_click: F) -> impl IntoView
where
    F: Fn() + 'static,
{
    let class = if dark { "button button--dark" } else { "button" };
    view! {
        <button class=class type="button" on:click=move |_| on_click()>
            {text}
        </button>
    }
}
