//! Labeled text inputs.
//!
//! Both fields are controlled: the parent owns the value and receives every
//! edit through `on_input`.

use leptos::prelude::*;

/// Plain labeled input.
#[component]
pub fn Field(
    #[prop(into)] label: String,
    #[prop(into)] input_type: String,
    #[prop(into)] placeholder: String,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
) -> impl IntoView {
    view! {
        <label class="field">
            <span class="field__label">{label}</span>
            <input
                class="field__input"
                type=input_type
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </label>
    }
}

/// Password input with a show/hide toggle.
#[component]
pub fn PasswordField(
    #[prop(into)] label: String,
    #[prop(into)] placeholder: String,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
) -> impl IntoView {
    let visible = RwSignal::new(false);

    view! {
        <label class="field">
            <span class="field__label">{label}</span>
            <span class="field__row">
                <input
                    class="field__input"
                    type=move || if visible.get() { "text" } else { "password" }
                    placeholder=placeholder
                    prop:value=move || value.get()
                    on:input=move |ev| on_input.run(event_target_value(&ev))
                />
                <button
                    class="field__toggle"
                    type="button"
                    title=move || if visible.get() { "Hide password" } else { "Show password" }
                    on:click=move |_| visible.update(|v| *v = !*v)
                >
                    {move || if visible.get() { "Hide" } else { "Show" }}
                </button>
            </span>
        </label>
    }
}
