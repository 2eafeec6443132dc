//! Login Page
//!
//! Looks the username up in the public user list; passwords are not checked.

use leptos::prelude::*;
use leptos::task::spawn_local;
use storefront_core::{session, Key, Route, UserDraft};

use crate::components::{ErrorBanner, UserForm};
use crate::context::{use_app_context, use_go};

#[component]
pub fn Login() -> impl IntoView {
    let ctx = use_app_context();
    let go = use_go();
    let (error, set_error) = signal(None::<String>);

    // Already logged in, or just logged in
    Effect::new(move |_| {
        if ctx.is_logged_in() {
            go(Route::Home);
        }
    });

    let on_submit = move |draft: UserDraft| {
        set_error.set(None);
        spawn_local(async move {
            let result = ctx.api.fetch_users().await.map_err(|e| e.to_string()).and_then(|users| {
                session::login(&users, draft.username.trim()).map_err(|e| e.to_string())
            });
            match result {
                Ok(session) => ctx.log_in(session),
                Err(message) => {
                    tracing::info!(username = %draft.username, %message, "login rejected");
                    set_error.set(Some(message));
                }
            }
        });
    };

    view! {
        <div class="container w-25">
            <h2>{move || ctx.t(Key::LogIn)}</h2>
            <ErrorBanner message=error />
            <UserForm button_label=Key::LogIn on_submit=on_submit />
        </div>
    }
}
