//! Catalog Page
//!
//! Paged, sortable product listing, optionally filtered by the `:category` route param.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_params_map;
use percent_encoding::percent_decode_str;
use storefront_core::{CatalogPager, Key, PageRequest, SortOrder};

use crate::components::{ErrorBanner, ProductCard};
use crate::context::use_app_context;

#[component]
pub fn Catalog() -> impl IntoView {
    let ctx = use_app_context();
    let params = use_params_map();
    let category = move || {
        params
            .read()
            .get("category")
            .map(|raw| percent_decode_str(&raw).decode_utf8_lossy().into_owned())
    };

    let pager = RwSignal::new(CatalogPager::new(None));
    let (error, set_error) = signal(None::<String>);

    let fetch = move |request: PageRequest| {
        spawn_local(async move {
            match ctx.api.fetch_catalog_page(&request).await {
                Ok(products) => {
                    tracing::debug!(page = request.page, count = products.len(), "catalog page loaded");
                    pager.write().accept(&request, products);
                }
                Err(e) => {
                    pager.write().fail(&request);
                    set_error.set(Some(format!("Error fetching data: {}", e)));
                }
            }
        });
    };

    // Restart the listing whenever the category changes
    Effect::new(move |_| {
        let category = category();
        set_error.set(None);
        let request = pager.write().set_category(category);
        fetch(request);
    });

    let change_sort = move |order: SortOrder| {
        if pager.with_untracked(|p| p.sort()) != order {
            set_error.set(None);
            let request = pager.write().set_sort(order);
            fetch(request);
        }
    };

    let load_more = move |_| {
        if let Some(request) = pager.write().next_request() {
            fetch(request);
        }
    };

    let sort_label = move || match pager.with(|p| p.sort()) {
        SortOrder::Asc => ctx.t(Key::Ascending),
        SortOrder::Desc => ctx.t(Key::Descending),
    };

    view! {
        <div class="container mx-auto">
            <ErrorBanner message=error />

            <div class="d-flex justify-content-between mb-3">
                <div class="btn-group" role="group">
                    <span class="btn btn-secondary disabled">{move || format!("{}: {}", ctx.t(Key::Order), sort_label())}</span>
                    <button class="btn btn-outline-secondary" on:click=move |_| change_sort(SortOrder::Asc)>
                        {move || ctx.t(Key::Ascending)}
                    </button>
                    <button class="btn btn-outline-secondary" on:click=move |_| change_sort(SortOrder::Desc)>
                        {move || ctx.t(Key::Descending)}
                    </button>
                </div>
            </div>

            <Show
                when=move || !pager.with(|p| p.is_loading())
                fallback=move || view! {
                    <div class="spinner-border" role="status">
                        <span class="visually-hidden">{ctx.t(Key::Loading)}</span>
                    </div>
                }
            >
                <div class="d-flex flex-wrap mx-auto justify-content-center">
                    // Pages may repeat products, so key on position as well
                    <For
                        each=move || pager.with(|p| p.products().into_iter().enumerate().collect::<Vec<_>>())
                        key=|(index, product)| (*index, product.id)
                        children=move |(_, product)| view! { <ProductCard product=product /> }
                    />
                </div>
            </Show>

            <Show when=move || pager.with(|p| p.has_next_page() && p.page_count() > 0)>
                <div class="d-flex justify-content-center">
                    <button
                        class="btn btn-primary"
                        disabled=move || pager.with(|p| p.is_fetching())
                        on:click=load_more
                    >
                        {move || if pager.with(|p| p.is_fetching()) { ctx.t(Key::Loading) } else { ctx.t(Key::LoadMore) }}
                    </button>
                </div>
            </Show>
        </div>
    }
}
