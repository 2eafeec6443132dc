//! Shopping Cart
//!
//! The cart is an ordered list of product ids; duplicates are quantity.
//! Line items are derived by reconciling the ids against a fresh product list.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{Product, ProductId, UserId};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    ids: Vec<ProductId>,
}

impl Cart {
    pub fn from_ids(ids: Vec<ProductId>) -> Self {
        Self { ids }
    }

    pub fn ids(&self) -> &[ProductId] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn count_of(&self, id: ProductId) -> usize {
        self.ids.iter().filter(|&&x| x == id).count()
    }

    pub fn add(&mut self, id: ProductId) {
        self.ids.push(id);
    }

    /// Remove the most recently added occurrence of `id`.
    ///
    /// Returns false (and leaves the cart untouched) when `id` is absent.
    pub fn remove(&mut self, id: ProductId) -> bool {
        match self.ids.iter().rposition(|&x| x == id) {
            Some(index) => {
                self.ids.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }
}

// ========================
// Reconciliation
// ========================

#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub product: Product,
    pub count: u32,
}

impl CartLine {
    pub fn subtotal(&self) -> Decimal {
        self.product.price * Decimal::from(self.count)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CartSummary {
    pub lines: Vec<CartLine>,
    pub total: Decimal,
}

/// Join cart ids against `products`.
///
/// Lines follow product-list order. Ids with no matching product are dropped.
pub fn reconcile(cart: &Cart, products: &[Product]) -> CartSummary {
    let mut counts: HashMap<ProductId, u32> = HashMap::new();
    for id in cart.ids() {
        *counts.entry(*id).or_default() += 1;
    }

    let lines: Vec<CartLine> = products
        .iter()
        .filter_map(|product| {
            counts.get(&product.id).map(|&count| CartLine {
                product: product.clone(),
                count,
            })
        })
        .collect();

    if lines.len() < counts.len() {
        tracing::debug!(
            missing = counts.len() - lines.len(),
            "cart references products not in catalog"
        );
    }

    let total = lines.iter().map(CartLine::subtotal).sum();
    CartSummary { lines, total }
}

// ========================
// Checkout
// ========================

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutItem {
    pub product_id: ProductId,
    pub quantity: u32,
}

/// Body for `POST /carts`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutRequest {
    pub user_id: UserId,
    pub date: String,
    pub products: Vec<CheckoutItem>,
}

impl CheckoutRequest {
    pub fn new(user_id: UserId, date: impl Into<String>, summary: &CartSummary) -> Self {
        Self {
            user_id,
            date: date.into(),
            products: summary
                .lines
                .iter()
                .map(|line| CheckoutItem {
                    product_id: line.product.id,
                    quantity: line.count,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_product(id: u32, price: i64) -> Product {
        Product {
            id: ProductId(id),
            title: format!("Product {}", id),
            price: Decimal::from(price),
            description: String::new(),
            category: "electronics".to_string(),
            image: String::new(),
            rating: None,
        }
    }

    fn cart_of(ids: &[u32]) -> Cart {
        Cart::from_ids(ids.iter().copied().map(ProductId).collect())
    }

    #[test]
    fn test_reconcile_counts_duplicates() {
        let cart = cart_of(&[1, 1, 3]);
        let products = vec![make_product(1, 10), make_product(2, 99), make_product(3, 5)];

        let summary = reconcile(&cart, &products);

        assert_eq!(summary.lines.len(), 2);
        assert_eq!(summary.lines[0].product.id, ProductId(1));
        assert_eq!(summary.lines[0].count, 2);
        assert_eq!(summary.lines[0].subtotal(), Decimal::from(20));
        assert_eq!(summary.lines[1].product.id, ProductId(3));
        assert_eq!(summary.lines[1].count, 1);
        assert_eq!(summary.total, Decimal::from(25));
    }

    #[test]
    fn test_reconcile_drops_unknown_ids() {
        let cart = cart_of(&[42, 3]);
        let summary = reconcile(&cart, &[make_product(3, 5)]);
        assert_eq!(summary.lines.len(), 1);
        assert_eq!(summary.total, Decimal::from(5));
    }

    #[test]
    fn test_reconcile_empty_cart() {
        let summary = reconcile(&Cart::default(), &[make_product(1, 10)]);
        assert!(summary.lines.is_empty());
        assert_eq!(summary.total, Decimal::ZERO);
    }

    #[test]
    fn test_remove_absent_id_is_noop() {
        let mut cart = cart_of(&[1]);
        assert!(!cart.remove(ProductId(2)));
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_checkout_payload() {
        let cart = cart_of(&[1, 1, 3]);
        let summary = reconcile(&cart, &[make_product(1, 10), make_product(3, 5)]);
        let request = CheckoutRequest::new(UserId(7), "2020-02-03", &summary);

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "userId": 7,
                "date": "2020-02-03",
                "products": [
                    {"productId": 1, "quantity": 2},
                    {"productId": 3, "quantity": 1}
                ]
            })
        );
    }
}
