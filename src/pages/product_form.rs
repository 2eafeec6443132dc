//! Product Form Page
//!
//! Admin form for `/add-product` and `/edit-product/:id`.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_params_map;
use storefront_core::{FormErrors, Key, ProductDraft, ProductId, Route, SubmitGate};

use crate::components::{ErrorBanner, FormField, SuccessModal};
use crate::context::use_app_context;

#[component]
pub fn ProductForm() -> impl IntoView {
    let ctx = use_app_context();
    let params = use_params_map();
    // None on /add-product
    let editing = move || params.read().get("id").and_then(|id| id.parse::<ProductId>().ok());

    let title = RwSignal::new(String::new());
    let price = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let image = RwSignal::new(String::new());
    let category = RwSignal::new(String::new());
    let errors = RwSignal::new(FormErrors::default());

    let (error, set_error) = signal(None::<String>);
    let gate = RwSignal::new(SubmitGate::default());
    let (saved, set_saved) = signal(None::<ProductId>);

    let fill = move |draft: ProductDraft| {
        title.set(draft.title);
        price.set(draft.price);
        description.set(draft.description);
        image.set(draft.image);
        category.set(draft.category);
    };

    Effect::new(move |_| match editing() {
        Some(id) => spawn_local(async move {
            match ctx.api.fetch_product(id).await {
                Ok(product) => fill(ProductDraft::from_product(&product)),
                Err(e) => {
                    tracing::warn!(%id, error = %e, "error fetching product");
                    set_error.set(Some(ctx.t(Key::ProductFetchFailed).to_string()));
                }
            }
        }),
        None => fill(ProductDraft::default()),
    });

    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let draft = ProductDraft {
            title: title.get_untracked(),
            price: price.get_untracked(),
            description: description.get_untracked(),
            image: image.get_untracked(),
            category: category.get_untracked(),
        };
        let product = match draft.validate() {
            Ok(product) => product,
            Err(invalid) => {
                errors.set(invalid);
                return;
            }
        };
        errors.set(FormErrors::default());
        if !gate.try_update(|gate| gate.try_begin()).unwrap_or(false) {
            return;
        }
        set_error.set(None);

        let target = editing();
        spawn_local(async move {
            let result = match target {
                Some(id) => ctx.api.update_product(id, &product).await,
                None => ctx.api.create_product(&product).await,
            };
            match result {
                Ok(stored) => {
                    tracing::info!(id = %stored.id, "product saved");
                    set_saved.set(Some(stored.id));
                }
                Err(e) => set_error.set(Some(e.to_string())),
            }
            gate.update(|gate| gate.finish());
        });
    };

    let heading = move || {
        if editing().is_some() {
            format!("{} {}", ctx.t(Key::Edit), ctx.t(Key::Product))
        } else {
            ctx.t(Key::AddProduct).to_string()
        }
    };
    let message = Signal::derive(move || {
        if editing().is_some() {
            ctx.t(Key::ProductUpdated).to_string()
        } else {
            ctx.t(Key::ProductAdded).to_string()
        }
    });
    let redirect = Signal::derive(move || match saved.get() {
        Some(id) => Route::ViewProduct(id),
        None => Route::Catalog(None),
    });

    view! {
        <div class="container w-50">
            <h2>{heading}</h2>
            <ErrorBanner message=error />
            <Show when=move || gate.with(|gate| gate.is_submitting())>
                <div class="alert alert-info">{move || ctx.t(Key::Submitting)}</div>
            </Show>
            <form on:submit=submit novalidate=true>
                <FormField label=Key::Title field="title" value=title errors=errors />
                <FormField label=Key::Price field="price" input_type="number" value=price errors=errors />
                <FormField label=Key::Description field="description" value=description errors=errors />
                <FormField label=Key::Image field="image" input_type="url" value=image errors=errors />
                <FormField label=Key::Category field="category" value=category errors=errors />
                <button type="submit" class="btn btn-primary w-100" disabled=move || gate.with(|gate| gate.is_submitting())>
                    {move || ctx.t(Key::Submit)}
                </button>
            </form>
            <SuccessModal show=Signal::derive(move || saved.get().is_some()) message=message redirect=redirect />
        </div>
    }
}
