//! Error Banner Component

use leptos::prelude::*;

/// Inline danger alert, hidden while `message` is None
#[component]
pub fn ErrorBanner(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    move || {
        message.get().map(|message| {
            view! { <div class="alert alert-danger" role="alert">{message}</div> }
        })
    }
}
