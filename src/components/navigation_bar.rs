//! Navigation Bar Component
//!
//! Top bar with route links, language selector and cart button.

use leptos::prelude::*;
use leptos_router::components::A;
use storefront_core::{Key, Language, Route};

use crate::context::{use_app_context, use_go};

#[component]
pub fn NavigationBar() -> impl IntoView {
    let ctx = use_app_context();
    let go = use_go();

    view! {
        <nav class="navbar navbar-light bg-light p-2 mb-3">
            <span class="navbar-brand text-info">
                <A href=Route::Home.path()>{move || ctx.t(Key::Home)}</A>
            </span>

            <ul class="nav me-auto">
                <li class="nav-item">
                    <A href=Route::Catalog(None).path()>{move || ctx.t(Key::Browse)}</A>
                </li>
                {move || if ctx.is_logged_in() {
                    view! {
                        <li class="nav-item"><A href=Route::Logout.path()>{move || ctx.t(Key::LogOut)}</A></li>
                        <li class="nav-item"><A href=Route::ViewUser.path()>{move || ctx.t(Key::Account)}</A></li>
                    }.into_any()
                } else {
                    view! {
                        <li class="nav-item"><A href=Route::Login.path()>{move || ctx.t(Key::LogIn)}</A></li>
                        <li class="nav-item"><A href=Route::SignUp.path()>{move || ctx.t(Key::SignUp)}</A></li>
                    }.into_any()
                }}
                <Show when=move || ctx.is_admin()>
                    <li class="nav-item">
                        <A href=Route::AddProduct.path()>{move || ctx.t(Key::AddProduct)}</A>
                    </li>
                </Show>
            </ul>

            <div class="language-selector">
                {Language::ALL.iter().map(|&language| view! {
                    <button
                        class=move || if ctx.language() == language { "btn btn-secondary me-2 active" } else { "btn btn-secondary me-2" }
                        on:click=move |_| ctx.set_language(language)
                    >
                        {language.native_name()}
                    </button>
                }).collect_view()}
            </div>

            <Show when=move || ctx.is_logged_in()>
                <button
                    class="btn btn-light"
                    aria-label="cart"
                    on:click={
                        let go = go.clone();
                        move |_| go(Route::Cart)
                    }
                >
                    {move || ctx.t(Key::Cart)}
                    " "
                    <span class="badge bg-secondary">{move || ctx.cart_count()}</span>
                </button>
            </Show>
        </nav>
    }
}
