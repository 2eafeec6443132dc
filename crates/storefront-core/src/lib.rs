//! Storefront Core
//!
//! Browser-independent logic shared by the storefront UI.
//! This crate has NO browser dependencies, so everything here is testable natively.

pub mod cart;
pub mod catalog;
pub mod endpoints;
pub mod error;
pub mod forms;
pub mod i18n;
pub mod models;
pub mod persist;
pub mod route;
pub mod session;

pub use cart::{reconcile, Cart, CartLine, CartSummary, CheckoutItem, CheckoutRequest};
pub use catalog::{CatalogPager, PageRequest, SortOrder, MAX_PAGES, PAGE_SIZE};
pub use endpoints::Endpoints;
pub use error::{LoginError, StorageError};
pub use forms::{FormErrors, ProductDraft, SubmitGate, UserDraft};
pub use i18n::{Key, Language};
pub use models::{Created, NewProduct, NewUser, Product, ProductId, User, UserId};
pub use persist::{KeyValueStore, MemoryStore};
pub use route::Route;
pub use session::Session;

pub use rust_decimal::Decimal;
