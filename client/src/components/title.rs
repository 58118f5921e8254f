//! Screen heading with a one-line description.

use leptos::prelude::*;

#[component]
pub fn Title(#[prop(into)] title: String, #[prop(into)] description: String) -> impl IntoView {
    view! {
        <div class="title">
            <h1 class="title__heading">{title}</h1>
            <p class="title__description">{description}</p>
        </div>
    }
}
