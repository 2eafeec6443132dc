//! View User Page
//!
//! Profile of the logged-in account, with edit and delete.

use leptos::prelude::*;
use leptos::task::spawn_local;
use storefront_core::{Key, Route, User};

use crate::components::{DeleteConfirmButton, ErrorBanner, SuccessModal};
use crate::context::{use_app_context, use_go};

#[component]
pub fn ViewUser() -> impl IntoView {
    let ctx = use_app_context();
    let go = use_go();

    let (user, set_user) = signal(None::<User>);
    let (error, set_error) = signal(None::<String>);
    let (submitting, set_submitting) = signal(false);
    let (deleted, set_deleted) = signal(false);

    Effect::new({
        let go = go.clone();
        move |_| {
            // Deleting the account logs out; the modal handles navigation then
            let Some(id) = ctx.session().active_user() else {
                if !deleted.get_untracked() {
                    go(Route::Login);
                }
                return;
            };
            spawn_local(async move {
                match ctx.api.fetch_user(id).await {
                    Ok(loaded) => set_user.set(Some(loaded)),
                    Err(e) => {
                        tracing::warn!(%id, error = %e, "error fetching user");
                        set_error.set(Some("Error fetching user data.".to_string()));
                    }
                }
            });
        }
    });

    let delete_account = move |_: ()| {
        let Some(id) = ctx.session_untracked().active_user() else { return };
        set_submitting.set(true);
        spawn_local(async move {
            match ctx.api.delete_user(id).await {
                Ok(()) => {
                    tracing::info!(%id, "account deleted");
                    set_deleted.set(true);
                    ctx.log_out();
                }
                Err(e) => set_error.set(Some(e.to_string())),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="container w-50">
            <h2>{move || ctx.t(Key::UserProfile)}</h2>
            <ErrorBanner message=error />
            {move || user.get().map(|user| view! {
                <dl class="row">
                    <dt class="col-sm-3">{move || ctx.t(Key::Username)}</dt>
                    <dd class="col-sm-9">{user.username.clone()}</dd>
                    <dt class="col-sm-3">{move || ctx.t(Key::Email)}</dt>
                    <dd class="col-sm-9">{user.email.clone()}</dd>
                    <dt class="col-sm-3">{move || ctx.t(Key::Name)}</dt>
                    <dd class="col-sm-9">{user.full_name()}</dd>
                    <dt class="col-sm-3">{move || ctx.t(Key::Address)}</dt>
                    <dd class="col-sm-9">{user.address_line()}</dd>
                    <dt class="col-sm-3">{move || ctx.t(Key::Phone)}</dt>
                    <dd class="col-sm-9">{user.phone.clone()}</dd>
                </dl>
            })}
            <div class="d-flex">
                <button
                    class="btn btn-warning me-2"
                    disabled=move || submitting.get() || deleted.get()
                    on:click=move |_| go(Route::EditUser)
                >
                    {move || ctx.t(Key::Edit)}
                </button>
                <DeleteConfirmButton
                    disabled=Signal::derive(move || submitting.get() || deleted.get())
                    on_confirm=delete_account
                />
            </div>
            <SuccessModal
                show=deleted
                message=Signal::derive(move || ctx.t(Key::AccountDeleted).to_string())
                redirect=Route::Login
            />
        </div>
    }
}
