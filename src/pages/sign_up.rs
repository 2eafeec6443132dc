//! Sign Up Page

use leptos::prelude::*;
use leptos::task::spawn_local;
use storefront_core::{Key, Route, SubmitGate, UserDraft};

use crate::components::{ErrorBanner, SuccessModal, UserForm};
use crate::context::use_app_context;

#[component]
pub fn SignUp() -> impl IntoView {
    let ctx = use_app_context();
    let (error, set_error) = signal(None::<String>);
    let gate = RwSignal::new(SubmitGate::default());
    let (created, set_created) = signal(false);

    let on_submit = move |draft: UserDraft| {
        if created.get_untracked() {
            return;
        }
        let Ok(user) = draft.validate() else { return };
        if !gate.try_update(|gate| gate.try_begin()).unwrap_or(false) {
            return;
        }
        set_error.set(None);
        spawn_local(async move {
            match ctx.api.create_user(&user).await {
                Ok(id) => {
                    tracing::info!(%id, username = %user.username, "account created");
                    set_created.set(true);
                }
                Err(e) => set_error.set(Some(e.to_string())),
            }
            gate.update(|gate| gate.finish());
        });
    };

    view! {
        <div class="container w-50">
            <h2>{move || ctx.t(Key::SignUp)}</h2>
            <ErrorBanner message=error />
            <fieldset disabled=move || gate.with(|gate| gate.is_submitting())>
                <UserForm with_profile=true button_label=Key::SignUp on_submit=on_submit />
            </fieldset>
            <SuccessModal
                show=created
                message=Signal::derive(move || ctx.t(Key::AccountCreated).to_string())
                redirect=Route::Home
            />
        </div>
    }
}
