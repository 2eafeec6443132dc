//! User Form Component
//!
//! Username/password form shared by login, sign-up and account editing.
//! Profile fields are shown only for sign-up and editing.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use storefront_core::{FormErrors, Key, UserDraft};

use super::FormField;
use crate::context::use_app_context;

#[component]
pub fn UserForm(
    /// Values to start from when editing
    #[prop(optional)]
    prefill: Option<UserDraft>,
    /// Show email, name and phone inputs
    #[prop(optional)]
    with_profile: bool,
    button_label: Key,
    /// Receives the draft once it passes validation
    #[prop(into)]
    on_submit: Callback<UserDraft>,
) -> impl IntoView {
    let ctx = use_app_context();
    let initial = prefill.unwrap_or_default();

    let username = RwSignal::new(initial.username);
    let password = RwSignal::new(initial.password);
    let email = RwSignal::new(initial.email);
    let firstname = RwSignal::new(initial.firstname);
    let lastname = RwSignal::new(initial.lastname);
    let phone = RwSignal::new(initial.phone);
    let errors = RwSignal::new(FormErrors::default());

    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let draft = UserDraft {
            username: username.get_untracked(),
            password: password.get_untracked(),
            email: email.get_untracked(),
            firstname: firstname.get_untracked(),
            lastname: lastname.get_untracked(),
            phone: phone.get_untracked(),
        };
        match draft.validate() {
            Ok(_) => {
                errors.set(FormErrors::default());
                on_submit.run(draft);
            }
            Err(invalid) => errors.set(invalid),
        }
    };

    view! {
        <form on:submit=submit novalidate=true>
            <FormField label=Key::Username field="username" value=username errors=errors />
            <FormField label=Key::Password field="password" input_type="password" value=password errors=errors />
            <Show when=move || with_profile>
                <FormField label=Key::Email field="email" input_type="email" value=email errors=errors />
                <FormField label=Key::FirstName field="firstname" value=firstname errors=errors />
                <FormField label=Key::LastName field="lastname" value=lastname errors=errors />
                <FormField label=Key::Phone field="phone" input_type="tel" value=phone errors=errors />
            </Show>
            <button type="submit" class="btn btn-primary w-100">{move || ctx.t(button_label)}</button>
        </form>
    }
}
