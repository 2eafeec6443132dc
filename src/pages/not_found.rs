use leptos::prelude::*;
use leptos_router::components::A;
use storefront_core::{Key, Route};

use crate::context::use_app_context;

#[component]
pub fn NotFound() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="container text-center">
            <h2>"404 - Not Found"</h2>
            <A href=Route::Home.path()>{move || ctx.t(Key::Home)}</A>
        </div>
    }
}
