//! Route Paths
//!
//! Typed navigation targets for links and redirects.

use std::fmt;

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use crate::models::ProductId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Catalog(Option<String>),
    AddProduct,
    EditProduct(ProductId),
    ViewProduct(ProductId),
    Cart,
    Login,
    Logout,
    SignUp,
    ViewUser,
    EditUser,
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Catalog(None) => "/catalog".to_string(),
            Route::Catalog(Some(category)) => {
                format!("/catalog/{}", utf8_percent_encode(category, NON_ALPHANUMERIC))
            }
            Route::AddProduct => "/add-product".to_string(),
            Route::EditProduct(id) => format!("/edit-product/{}", id),
            Route::ViewProduct(id) => format!("/view-product/{}", id),
            Route::Cart => "/cart".to_string(),
            Route::Login => "/login".to_string(),
            Route::Logout => "/logout".to_string(),
            Route::SignUp => "/sign-up".to_string(),
            Route::ViewUser => "/view-user".to_string(),
            Route::EditUser => "/edit-user".to_string(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(Route::Home.path(), "/");
        assert_eq!(Route::Catalog(None).path(), "/catalog");
        assert_eq!(Route::ViewProduct(ProductId(3)).path(), "/view-product/3");
        assert_eq!(Route::EditProduct(ProductId(3)).to_string(), "/edit-product/3");
        assert_eq!(Route::SignUp.path(), "/sign-up");
    }

    #[test]
    fn test_category_segment_is_encoded() {
        assert_eq!(
            Route::Catalog(Some("men's clothing".to_string())).path(),
            "/catalog/men%27s%20clothing"
        );
    }
}
