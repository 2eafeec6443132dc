//! Delete Confirm Button Component
//!
//! Inline delete confirmation with confirm/cancel actions.

use leptos::prelude::*;
use storefront_core::Key;

use crate::context::use_app_context;

/// Inline delete confirmation button
///
/// Shows a Delete button initially. When clicked, shows "Delete?" with ✓/✗ buttons.
///
/// # Arguments
/// * `disabled` - Disables the initial button (e.g. while a request is in flight)
/// * `on_confirm` - Callback to execute when user confirms deletion
#[component]
pub fn DeleteConfirmButton(
    #[prop(into, optional)] disabled: Signal<bool>,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let ctx = use_app_context();
    let (confirm_delete, set_confirm_delete) = signal(false);

    view! {
        <Show when=move || !confirm_delete.get()>
            <button
                class="btn btn-danger me-2"
                disabled=move || disabled.get()
                on:click=move |_| set_confirm_delete.set(true)
            >
                {move || ctx.t(Key::Delete)}
            </button>
        </Show>
        <Show when=move || confirm_delete.get()>
            <span class="delete-confirm">
                <span class="delete-confirm-text">{move || format!("{}?", ctx.t(Key::Delete))}</span>
                <button
                    class="btn btn-danger btn-sm"
                    on:click=move |_| {
                        set_confirm_delete.set(false);
                        on_confirm.run(());
                    }
                >
                    "✓"
                </button>
                <button
                    class="btn btn-secondary btn-sm"
                    on:click=move |_| set_confirm_delete.set(false)
                >
                    "✗"
                </button>
            </span>
        </Show>
    }
}
