//! Success Modal Component
//!
//! Confirmation dialog shown after a successful request; closing it navigates away.

use leptos::prelude::*;
use storefront_core::{Key, Route};

use crate::context::{use_app_context, use_go};

#[component]
pub fn SuccessModal(
    #[prop(into)] show: Signal<bool>,
    #[prop(into)] message: Signal<String>,
    /// Where closing the modal leads
    #[prop(into)]
    redirect: Signal<Route>,
) -> impl IntoView {
    let ctx = use_app_context();
    let go = use_go();

    view! {
        <Show when=move || show.get()>
            <div class="modal-backdrop show"></div>
            <div class="modal d-block" role="dialog">
                <div class="modal-dialog">
                    <div class="modal-content">
                        <div class="modal-header">
                            <h5 class="modal-title">{move || ctx.t(Key::Success)}</h5>
                        </div>
                        <div class="modal-body">{move || message.get()}</div>
                        <div class="modal-footer">
                            <button
                                class="btn btn-secondary"
                                on:click={
                                    let go = go.clone();
                                    move |_| go(redirect.get_untracked())
                                }
                            >
                                {move || ctx.t(Key::Close)}
                            </button>
                        </div>
                    </div>
                </div>
            </div>
        </Show>
    }
}
