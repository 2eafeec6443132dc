use leptos::prelude::*;
use storefront_core::Route;

use crate::context::{use_app_context, use_go};

/// Clears the session and returns home
#[component]
pub fn Logout() -> impl IntoView {
    let ctx = use_app_context();
    let go = use_go();

    Effect::new(move |_| {
        ctx.log_out();
        tracing::info!("logged out");
        go(Route::Home);
    });

    view! { <p>"Logging out..."</p> }
}
