//! Form Drafts and Validation
//!
//! Raw text captured by the product and user forms, validated into API bodies.

use std::collections::BTreeMap;
use std::str::FromStr;

use rust_decimal::Decimal;

use crate::models::{Name, NewProduct, NewUser, Product, User};

/// Per-field validation messages
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormErrors(BTreeMap<&'static str, &'static str>);

impl FormErrors {
    pub fn get(&self, field: &str) -> Option<&'static str> {
        self.0.get(field).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn require(&mut self, field: &'static str, value: &str, message: &'static str) {
        if value.trim().is_empty() {
            self.0.insert(field, message);
        }
    }

    fn insert(&mut self, field: &'static str, message: &'static str) {
        self.0.insert(field, message);
    }

    fn into_result<T>(self, value: impl FnOnce() -> T) -> Result<T, FormErrors> {
        if self.is_empty() {
            Ok(value())
        } else {
            Err(self)
        }
    }
}

/// Single in-flight submission per form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SubmitGate {
    in_flight: bool,
}

impl SubmitGate {
    /// Returns false while a previous submission is still pending
    pub fn try_begin(&mut self) -> bool {
        if self.in_flight {
            return false;
        }
        self.in_flight = true;
        true
    }

    pub fn finish(&mut self) {
        self.in_flight = false;
    }

    pub fn is_submitting(&self) -> bool {
        self.in_flight
    }
}

// ========================
// Product Form
// ========================

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProductDraft {
    pub title: String,
    pub price: String,
    pub description: String,
    pub image: String,
    pub category: String,
}

impl ProductDraft {
    /// Prefill for editing
    pub fn from_product(product: &Product) -> Self {
        Self {
            title: product.title.clone(),
            price: product.price.to_string(),
            description: product.description.clone(),
            image: product.image.clone(),
            category: product.category.clone(),
        }
    }

    pub fn validate(&self) -> Result<NewProduct, FormErrors> {
        let mut errors = FormErrors::default();
        errors.require("title", &self.title, "Title is required");
        errors.require("image", &self.image, "Image is required");

        let price = Decimal::from_str(self.price.trim())
            .ok()
            .filter(|price| price.is_sign_positive() && !price.is_zero());
        if price.is_none() {
            errors.insert("price", "Price must be a positive number");
        }

        errors.into_result(|| NewProduct {
            title: self.title.trim().to_string(),
            price: price.unwrap_or_default(),
            description: self.description.trim().to_string(),
            image: self.image.trim().to_string(),
            category: self.category.trim().to_string(),
        })
    }
}

// ========================
// User Forms
// ========================

/// Login, sign-up and edit-account form.
///
/// Only the credentials are required; profile fields are optional text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UserDraft {
    pub username: String,
    pub password: String,
    pub email: String,
    pub firstname: String,
    pub lastname: String,
    pub phone: String,
}

impl UserDraft {
    pub fn from_user(user: &User) -> Self {
        Self {
            username: user.username.clone(),
            password: user.password.clone(),
            email: user.email.clone(),
            firstname: user.name.firstname.clone(),
            lastname: user.name.lastname.clone(),
            phone: user.phone.clone(),
        }
    }

    pub fn validate(&self) -> Result<NewUser, FormErrors> {
        let mut errors = FormErrors::default();
        errors.require("username", &self.username, "Username is required");
        errors.require("password", &self.password, "Password is required");
        errors.into_result(|| NewUser {
            username: self.username.trim().to_string(),
            password: self.password.clone(),
            email: self.email.trim().to_string(),
            name: Name {
                firstname: self.firstname.trim().to_string(),
                lastname: self.lastname.trim().to_string(),
            },
            phone: self.phone.trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_product() -> ProductDraft {
        ProductDraft {
            title: "Test product".to_string(),
            price: "13.5".to_string(),
            description: "lorem ipsum set".to_string(),
            image: "https://i.pravatar.cc".to_string(),
            category: "electronic".to_string(),
        }
    }

    #[test]
    fn test_valid_product_draft() {
        let product = valid_product().validate().unwrap();
        assert_eq!(product.price, Decimal::new(135, 1));
        assert_eq!(product.title, "Test product");
    }

    #[test]
    fn test_product_price_must_be_positive() {
        for price in ["", "0", "-4", "abc", "0.00"] {
            let draft = ProductDraft {
                price: price.to_string(),
                ..valid_product()
            };
            let errors = draft.validate().unwrap_err();
            assert_eq!(errors.get("price"), Some("Price must be a positive number"), "price {price:?}");
        }
    }

    #[test]
    fn test_product_required_fields() {
        let errors = ProductDraft::default().validate().unwrap_err();
        assert_eq!(errors.get("title"), Some("Title is required"));
        assert_eq!(errors.get("image"), Some("Image is required"));
        assert!(errors.get("description").is_none());
    }

    #[test]
    fn test_user_draft_requires_credentials() {
        let errors = UserDraft {
            username: "johnd".to_string(),
            password: "   ".to_string(),
            ..Default::default()
        }
        .validate()
        .unwrap_err();
        assert!(errors.get("username").is_none());
        assert_eq!(errors.get("password"), Some("Password is required"));
    }

    #[test]
    fn test_submit_gate_rejects_second_submission() {
        let mut gate = SubmitGate::default();
        assert!(gate.try_begin());
        assert!(gate.is_submitting());
        assert!(!gate.try_begin());

        gate.finish();
        assert!(!gate.is_submitting());
        assert!(gate.try_begin());
    }

    #[test]
    fn test_user_draft_builds_body() {
        let draft = UserDraft {
            username: " mor_2314 ".to_string(),
            password: "83r5^_".to_string(),
            firstname: "david".to_string(),
            ..Default::default()
        };
        let user = draft.validate().unwrap();
        assert_eq!(user.username, "mor_2314");
        assert_eq!(user.name.firstname, "david");
        assert!(user.email.is_empty());
    }
}
