//! Route Pages
//!
//! One component per route.

mod cart;
mod catalog;
mod edit_user;
mod home;
mod login;
mod logout;
mod not_found;
mod product_form;
mod product_page;
mod sign_up;
mod view_user;

pub use cart::CartPage;
pub use catalog::Catalog;
pub use edit_user::EditUser;
pub use home::HomePage;
pub use login::Login;
pub use logout::Logout;
pub use not_found::NotFound;
pub use product_form::ProductForm;
pub use product_page::ProductPage;
pub use sign_up::SignUp;
pub use view_user::ViewUser;
