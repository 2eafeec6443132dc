//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.
//! Mutations go through `AppContext`, which also persists them.

use reactive_stores::Store;
use storefront_core::{Cart, Language, Session};

/// Session, cart and UI language, with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Current identity (empty when logged out)
    pub session: Session,
    /// Product ids in the cart, duplicates are quantity
    pub cart: Cart,
    pub language: Language,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;
