//! Edit User Page

use leptos::prelude::*;
use leptos::task::spawn_local;
use storefront_core::{Key, Route, Session, SubmitGate, UserDraft};

use crate::components::{ErrorBanner, UserForm};
use crate::context::{use_app_context, use_go};

#[component]
pub fn EditUser() -> impl IntoView {
    let ctx = use_app_context();
    let go = use_go();

    let (draft, set_draft) = signal(None::<UserDraft>);
    let (error, set_error) = signal(None::<String>);
    let gate = RwSignal::new(SubmitGate::default());

    Effect::new({
        let go = go.clone();
        move |_| {
            let Some(id) = ctx.session().active_user() else {
                go(Route::Login);
                return;
            };
            spawn_local(async move {
                match ctx.api.fetch_user(id).await {
                    Ok(user) => set_draft.set(Some(UserDraft::from_user(&user))),
                    Err(e) => {
                        tracing::warn!(%id, error = %e, "error fetching user");
                        set_error.set(Some("Error fetching user data.".to_string()));
                    }
                }
            });
        }
    });

    let on_submit = move |submitted: UserDraft| {
        let Some(id) = ctx.session_untracked().active_user() else { return };
        let Ok(user) = submitted.validate() else { return };
        if !gate.try_update(|gate| gate.try_begin()).unwrap_or(false) {
            return;
        }
        set_error.set(None);
        let go = go.clone();
        spawn_local(async move {
            match ctx.api.update_user(id, &user).await {
                Ok(()) => {
                    ctx.log_in(Session::logged_in(id, user.username));
                    go(Route::ViewUser);
                }
                Err(e) => set_error.set(Some(e.to_string())),
            }
            gate.update(|gate| gate.finish());
        });
    };

    view! {
        <div class="container w-50">
            <h2>{move || ctx.t(Key::EditUser)}</h2>
            <ErrorBanner message=error />
            // Remount the form once the stored values arrive
            {move || draft.get().map(|prefill| {
                let on_submit = on_submit.clone();
                view! {
                    <fieldset disabled=move || gate.with(|gate| gate.is_submitting())>
                        <UserForm prefill=prefill with_profile=true button_label=Key::Update on_submit=on_submit />
                    </fieldset>
                }
            })}
        </div>
    }
}
