//! Storefront App
//!
//! Router shell: navigation bar above the routed page.

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::NavigationBar;
use crate::config::ClientConfig;
use crate::context::AppContext;
use crate::pages::{
    CartPage, Catalog, EditUser, HomePage, Login, Logout, NotFound, ProductForm, ProductPage, SignUp, ViewUser,
};

#[component]
pub fn App(config: ClientConfig) -> impl IntoView {
    // Provide context to all children
    provide_context(AppContext::hydrate(config));

    view! {
        <Router>
            <NavigationBar />
            <main>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/catalog") view=Catalog />
                    <Route path=path!("/catalog/:category") view=Catalog />
                    <Route path=path!("/add-product") view=ProductForm />
                    <Route path=path!("/edit-product/:id") view=ProductForm />
                    <Route path=path!("/view-product/:id") view=ProductPage />
                    <Route path=path!("/cart") view=CartPage />
                    <Route path=path!("/login") view=Login />
                    <Route path=path!("/logout") view=Logout />
                    <Route path=path!("/sign-up") view=SignUp />
                    <Route path=path!("/view-user") view=ViewUser />
                    <Route path=path!("/edit-user") view=EditUser />
                </Routes>
            </main>
        </Router>
    }
}
