//! Application Context
//!
//! Shared state provided via Leptos Context API.
//! Every session/cart mutation is mirrored to localStorage here, so views
//! never touch storage directly.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use reactive_stores::Store;
use storefront_core::persist;
use storefront_core::{session, Cart, Key, Language, ProductId, Route, Session, StorageError};

use crate::api::ApiClient;
use crate::config::ClientConfig;
use crate::storage::{self, LocalStore};
use crate::store::{AppState, AppStateStoreFields, AppStore};

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    store: AppStore,
    storage: LocalStore,
    pub config: ClientConfig,
    pub api: ApiClient,
}

impl AppContext {
    /// Build the store from whatever was persisted on this device
    pub fn hydrate(config: ClientConfig) -> Self {
        let storage = LocalStore;
        let session = session::bootstrap(&storage).unwrap_or_default();
        let cart = persist::load_cart(&storage);
        let language = persist::load_language(&storage)
            .or_else(|| storage::navigator_language().map(|tag| Language::from_tag(&tag)))
            .unwrap_or_default();

        tracing::info!(
            logged_in = session.is_logged_in,
            cart_items = cart.len(),
            ?language,
            "hydrated client state"
        );

        Self {
            store: Store::new(AppState {
                session,
                cart,
                language,
            }),
            storage,
            config,
            api: ApiClient::new(config.api_base),
        }
    }

    // ========================
    // Session
    // ========================

    pub fn session(&self) -> Session {
        self.store.session().get()
    }

    pub fn session_untracked(&self) -> Session {
        self.store.session().get_untracked()
    }

    pub fn is_logged_in(&self) -> bool {
        self.store.session().read().is_logged_in
    }

    pub fn is_admin(&self) -> bool {
        self.store.session().read().is_admin(self.config.admin_username)
    }

    pub fn log_in(&self, session: Session) {
        if let Err(e) = persist::save_session(&self.storage, &session) {
            tracing::error!(error = %e, "failed to persist session");
        }
        tracing::info!(username = %session.username, "logged in");
        *self.store.session().write() = session;
    }

    pub fn log_out(&self) {
        persist::clear_session(&self.storage);
        *self.store.session().write() = Session::default();
    }

    // ========================
    // Cart
    // ========================

    pub fn cart(&self) -> Cart {
        self.store.cart().get()
    }

    pub fn cart_count(&self) -> usize {
        self.store.cart().read().len()
    }

    pub fn add_to_cart(&self, id: ProductId) {
        let result = persist::add_to_cart(&self.storage, &mut self.store.cart().write(), id);
        log_cart_save(result);
    }

    pub fn remove_from_cart(&self, id: ProductId) {
        let result = persist::remove_from_cart(&self.storage, &mut self.store.cart().write(), id);
        log_cart_save(result.map(|_| ()));
    }

    pub fn clear_cart(&self) {
        let result = persist::clear_cart(&self.storage, &mut self.store.cart().write());
        log_cart_save(result);
    }

    // ========================
    // Language
    // ========================

    pub fn language(&self) -> Language {
        self.store.language().get()
    }

    /// Translate `key` into the current language
    pub fn t(&self, key: Key) -> &'static str {
        self.language().t(key)
    }

    pub fn set_language(&self, language: Language) {
        if let Err(e) = persist::save_language(&self.storage, language) {
            tracing::warn!(error = %e, "failed to persist language");
        }
        *self.store.language().write() = language;
    }
}

fn log_cart_save(result: Result<(), StorageError>) {
    if let Err(e) = result {
        tracing::error!(error = %e, "failed to persist cart");
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

/// Navigate to a typed route. Must be called inside the router.
pub fn use_go() -> impl Fn(Route) + Clone + 'static {
    let navigate = use_navigate();
    move |route: Route| navigate(&route.path(), Default::default())
}
