//! UI Components
//!
//! Reusable Leptos components.

mod delete_confirm_button;
mod error_banner;
mod form_field;
mod navigation_bar;
mod product_card;
mod success_modal;
mod user_form;

pub use delete_confirm_button::DeleteConfirmButton;
pub use error_banner::ErrorBanner;
pub use form_field::FormField;
pub use navigation_bar::NavigationBar;
pub use product_card::{format_price, ProductCard};
pub use success_modal::SuccessModal;
pub use user_form::UserForm;
