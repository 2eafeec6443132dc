//! Product Card Component
//!
//! Catalog tile: image, price and a link to the product page.

use leptos::prelude::*;
use leptos_router::components::A;
use storefront_core::{Decimal, Product, Route};

/// "$109.95"
pub fn format_price(price: Decimal) -> String {
    format!("${:.2}", price)
}

#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let href = Route::ViewProduct(product.id).path();

    view! {
        <div class="card product-card shadow border-info">
            <img class="card-img-top" src=product.image alt=product.title.clone() />
            <div class="card-body">
                <h5 class="card-title">{format_price(product.price)}</h5>
                <p class="card-text">
                    <A href=href>{product.title}</A>
                </p>
            </div>
        </div>
    }
}
