//! Product Page
//!
//! Product detail. Shoppers add it to the cart; the admin edits or deletes it.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_params_map;
use storefront_core::{Key, Product, ProductId, Route};

use crate::components::{format_price, DeleteConfirmButton, ErrorBanner, SuccessModal};
use crate::context::{use_app_context, use_go};

#[component]
pub fn ProductPage() -> impl IntoView {
    let ctx = use_app_context();
    let go = use_go();
    let params = use_params_map();
    let product_id = move || params.read().get("id").and_then(|id| id.parse::<ProductId>().ok());

    let (product, set_product) = signal(None::<Product>);
    let (error, set_error) = signal(None::<String>);
    let (submitting, set_submitting) = signal(false);
    let (deleted, set_deleted) = signal(false);

    Effect::new(move |_| match product_id() {
        Some(id) => spawn_local(async move {
            match ctx.api.fetch_product(id).await {
                Ok(loaded) => set_product.set(Some(loaded)),
                Err(e) => {
                    tracing::warn!(%id, error = %e, "error fetching product");
                    set_error.set(Some(ctx.t(Key::ProductFetchFailed).to_string()));
                }
            }
        }),
        None => set_error.set(Some(ctx.t(Key::ProductFetchFailed).to_string())),
    });

    let delete_product = move |_: ()| {
        let Some(id) = product_id() else { return };
        set_submitting.set(true);
        spawn_local(async move {
            match ctx.api.delete_product(id).await {
                Ok(()) => {
                    tracing::info!(%id, "product deleted");
                    set_deleted.set(true);
                }
                Err(e) => set_error.set(Some(e.to_string())),
            }
            set_submitting.set(false);
        });
    };

    let actions = move || {
        let Some(id) = product_id() else {
            return ().into_any();
        };
        if ctx.is_admin() {
            let go = go.clone();
            view! {
                <div class="d-flex">
                    <button
                        class="btn btn-warning me-2"
                        disabled=move || submitting.get()
                        on:click=move |_| go(Route::EditProduct(id))
                    >
                        {move || ctx.t(Key::Edit)}
                    </button>
                    <DeleteConfirmButton disabled=submitting on_confirm=delete_product />
                </div>
            }
            .into_any()
        } else if ctx.is_logged_in() {
            view! {
                <div class="d-flex">
                    <button class="btn btn-primary me-2" on:click=move |_| ctx.add_to_cart(id)>
                        {move || ctx.t(Key::AddToCart)}
                    </button>
                    <span class="align-self-center">{move || format!("× {}", ctx.cart().count_of(id))}</span>
                </div>
            }
            .into_any()
        } else {
            let go = go.clone();
            view! {
                <div class="d-flex">
                    <button class="btn btn-primary me-2" on:click=move |_| go(Route::Login)>
                        {move || ctx.t(Key::AddToCart)}
                    </button>
                </div>
            }
            .into_any()
        }
    };

    view! {
        <div class="row w-75 mx-auto">
            <ErrorBanner message=error />
            {move || product.get().map(|product| view! {
                <div class="col">
                    <img src=product.image alt="product picture" class="rounded" style="max-height: 20rem;" />
                </div>
                <div class="col d-flex flex-column align-items-center">
                    <h2 aria-label="product title">{product.title}</h2>
                    <h3 aria-label="product price">{move || format!("{} {}", ctx.t(Key::PriceFrom), format_price(product.price))}</h3>
                    <h4 aria-label="product description">{product.description}</h4>
                    {actions.clone()}
                </div>
            })}
            <SuccessModal
                show=deleted
                message=Signal::derive(move || ctx.t(Key::ProductDeleted).to_string())
                redirect=Route::Catalog(None)
            />
        </div>
    }
}
