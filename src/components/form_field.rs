//! Form Field Component
//!
//! Labelled text input bound to a signal, with its validation message.

use leptos::prelude::*;
use storefront_core::{FormErrors, Key};

use crate::context::use_app_context;

#[component]
pub fn FormField(
    label: Key,
    /// Input name, also the key into `errors`
    field: &'static str,
    value: RwSignal<String>,
    errors: RwSignal<FormErrors>,
    #[prop(default = "text")] input_type: &'static str,
) -> impl IntoView {
    let ctx = use_app_context();
    let error = move || errors.with(|errors| errors.get(field));

    view! {
        <div class="mb-3">
            <label class="form-label" for=field>{move || ctx.t(label)}</label>
            <input
                id=field
                name=field
                type=input_type
                class=move || if error().is_some() { "form-control is-invalid" } else { "form-control" }
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
            {move || error().map(|message| view! { <div class="invalid-feedback">{message}</div> })}
        </div>
    }
}
