//! Cart Page
//!
//! Cart lines joined against the product list, with quantity controls and checkout.

use leptos::prelude::*;
use leptos::task::spawn_local;
use storefront_core::{reconcile, CheckoutRequest, Key, Product, Route};

use crate::api;
use crate::components::{format_price, ErrorBanner, SuccessModal};
use crate::context::{use_app_context, use_go};

#[component]
pub fn CartPage() -> impl IntoView {
    let ctx = use_app_context();
    let go = use_go();

    let (products, set_products) = signal(Vec::<Product>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);
    let (submitting, set_submitting) = signal(false);
    let (ordered, set_ordered) = signal(false);

    Effect::new(move |_| {
        if !ctx.is_logged_in() && !ordered.get_untracked() {
            go(Route::Login);
        }
    });

    Effect::new(move |_| {
        spawn_local(async move {
            match ctx.api.fetch_all_products().await {
                Ok(loaded) => set_products.set(loaded),
                Err(e) => {
                    tracing::warn!(error = %e, "error fetching products for cart");
                    set_error.set(Some(ctx.t(Key::ProductFetchFailed).to_string()));
                }
            }
            set_loading.set(false);
        });
    });

    let summary = Memo::new(move |_| {
        let cart = ctx.cart();
        products.with(|products| reconcile(&cart, products))
    });

    let check_out = move |_| {
        let Some(user_id) = ctx.session_untracked().active_user() else {
            return;
        };
        let order = summary.with_untracked(|summary| CheckoutRequest::new(user_id, api::order_date(), summary));
        set_error.set(None);
        set_submitting.set(true);
        spawn_local(async move {
            match ctx.api.check_out(&order).await {
                Ok(()) => {
                    tracing::info!(%user_id, items = order.products.len(), "order placed");
                    ctx.clear_cart();
                    set_ordered.set(true);
                }
                Err(e) => set_error.set(Some(e.to_string())),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="container">
            <h2>{move || ctx.t(Key::Cart)}</h2>
            <ErrorBanner message=error />
            <Show
                when=move || !loading.get()
                fallback=move || view! {
                    <div class="spinner-border" role="status">
                        <span class="visually-hidden">{ctx.t(Key::Loading)}</span>
                    </div>
                }
            >
                <ul class="list-group mb-3">
                    // Count is part of the key so quantity changes re-render the row
                    <For
                        each=move || summary.get().lines
                        key=|line| (line.product.id, line.count)
                        children=move |line| {
                            let id = line.product.id;
                            let subtotal = format_price(line.subtotal());
                            view! {
                                <li class="list-group-item d-flex align-items-center">
                                    <img src=line.product.image.clone() alt="" style="max-height: 3rem;" class="me-3" />
                                    <span class="me-auto">{line.product.title.clone()}</span>
                                    <span class="me-3">
                                        {move || format!("{} {}", format_price(line.product.price), ctx.t(Key::Each))}
                                    </span>
                                    <div class="btn-group me-3" role="group">
                                        <button class="btn btn-outline-secondary btn-sm" on:click=move |_| ctx.remove_from_cart(id)>"−"</button>
                                        <span class="btn btn-light btn-sm disabled">{line.count}</span>
                                        <button class="btn btn-outline-secondary btn-sm" on:click=move |_| ctx.add_to_cart(id)>"+"</button>
                                    </div>
                                    <strong>{subtotal}</strong>
                                </li>
                            }
                        }
                    />
                </ul>
                <h4 aria-label="cart total">{move || format!("{}: {}", ctx.t(Key::Total), format_price(summary.with(|s| s.total)))}</h4>
            </Show>

            <div class="d-flex">
                <button
                    class="btn btn-secondary me-2"
                    disabled=move || ctx.cart_count() == 0
                    on:click=move |_| ctx.clear_cart()
                >
                    {move || ctx.t(Key::ClearCart)}
                </button>
                <button
                    class="btn btn-primary"
                    disabled=move || submitting.get() || summary.with(|s| s.lines.is_empty())
                    on:click=check_out
                >
                    {move || ctx.t(Key::CheckOut)}
                </button>
            </div>

            <SuccessModal
                show=ordered
                message=Signal::derive(move || ctx.t(Key::OrderSuccessful).to_string())
                redirect=Route::Catalog(None)
            />
        </div>
    }
}
