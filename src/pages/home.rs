//! Home Page
//!
//! Greets the user and lists product categories.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use storefront_core::{Key, Route};

use crate::context::use_app_context;

#[component]
pub fn HomePage() -> impl IntoView {
    let ctx = use_app_context();
    let (categories, set_categories) = signal(Vec::<String>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);

    // Load categories on mount
    Effect::new(move |_| {
        spawn_local(async move {
            match ctx.api.fetch_categories().await {
                Ok(loaded) => set_categories.set(loaded),
                Err(e) => {
                    tracing::warn!(error = %e, "unable to get categories");
                    set_error.set(Some("Error fetching data".to_string()));
                }
            }
            set_loading.set(false);
        });
    });

    view! {
        <div class="container bg-light">
            {move || {
                let session = ctx.session();
                session.is_logged_in.then(|| format!("{}, {}!", ctx.t(Key::Hello), session.username))
            }}
            {move || if loading.get() {
                view! { <div class="spinner-border" role="status"><span class="visually-hidden">{ctx.t(Key::Loading)}</span></div> }.into_any()
            } else if let Some(message) = error.get() {
                view! { <div class="alert alert-danger">{message}</div> }.into_any()
            } else {
                view! {
                    <div class="row">
                        <For
                            each=move || categories.get()
                            key=|category| category.clone()
                            children=move |category| {
                                let href = Route::Catalog(Some(category.clone())).path();
                                view! { <div class="col"><A href=href>{category}</A></div> }
                            }
                        />
                    </div>
                }.into_any()
            }}
        </div>
    }
}
