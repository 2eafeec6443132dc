//! Storefront Models
//!
//! Data structures matching the remote store API.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

// ========================
// Identifiers
// ========================

/// Product identifier
///
/// Deserializes from a JSON number or a numeric string, so cart entries
/// written as strings by older clients still compare equal to API ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ProductId(pub u32);

/// User identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct UserId(pub u32);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Number(u32),
    Text(String),
}

fn parse_raw_id<E: serde::de::Error>(raw: RawId) -> Result<u32, E> {
    match raw {
        RawId::Number(n) => Ok(n),
        RawId::Text(s) => s
            .trim()
            .parse()
            .map_err(|_| E::custom(format!("invalid id: {s:?}"))),
    }
}

impl<'de> Deserialize<'de> for ProductId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        parse_raw_id(RawId::deserialize(deserializer)?).map(Self)
    }
}

impl<'de> Deserialize<'de> for UserId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        parse_raw_id(RawId::deserialize(deserializer)?).map(Self)
    }
}

/// Accepts `null`, `""`, a number or a numeric string.
pub(crate) fn optional_user_id<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<UserId>, D::Error> {
    match Option::<RawId>::deserialize(deserializer)? {
        None => Ok(None),
        Some(RawId::Text(s)) if s.trim().is_empty() => Ok(None),
        Some(raw) => parse_raw_id(raw).map(|id| Some(UserId(id))),
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ProductId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

// ========================
// Products
// ========================

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Rating {
    pub rate: f64,
    pub count: u32,
}

/// Product as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub rating: Option<Rating>,
}

/// Body for `POST /products` and `PUT /products/{id}`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewProduct {
    pub title: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub description: String,
    pub image: String,
    pub category: String,
}

// ========================
// Users
// ========================

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Name {
    #[serde(default)]
    pub firstname: String,
    #[serde(default)]
    pub lastname: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Geolocation {
    #[serde(default)]
    pub lat: String,
    #[serde(default)]
    pub long: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Address {
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub street: String,
    #[serde(default)]
    pub number: u32,
    #[serde(default)]
    pub zipcode: String,
    #[serde(default)]
    pub geolocation: Option<Geolocation>,
}

/// User account as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub username: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub name: Name,
    #[serde(default)]
    pub address: Address,
    #[serde(default)]
    pub phone: String,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.name.firstname, self.name.lastname)
            .trim()
            .to_string()
    }

    /// "7682 new road, kilcoole, 12926-3874"
    pub fn address_line(&self) -> String {
        let a = &self.address;
        format!("{} {}, {}, {}", a.number, a.street, a.city, a.zipcode)
    }
}

/// Body for `POST /users` and `PUT /users/{id}`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewUser {
    pub username: String,
    pub password: String,
    pub email: String,
    pub name: Name,
    pub phone: String,
}

/// Minimal response of create endpoints (`{"id": 11}`)
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Created<Id> {
    pub id: Id,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_from_api_json() {
        let json = r#"{
            "id": 1,
            "title": "Fjallraven - Foldsack No. 1 Backpack, Fits 15 Laptops",
            "price": 109.95,
            "description": "Your perfect pack for everyday use",
            "category": "men's clothing",
            "image": "https://fakestoreapi.com/img/81fPKd-2AYL._AC_SL1500_.jpg",
            "rating": {"rate": 3.9, "count": 120}
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, ProductId(1));
        assert_eq!(product.price, Decimal::new(10995, 2));
        assert_eq!(product.rating.unwrap().count, 120);
    }

    #[test]
    fn test_ids_accept_numeric_strings() {
        let ids: Vec<ProductId> = serde_json::from_str(r#"[1, "3", " 7 "]"#).unwrap();
        assert_eq!(ids, vec![ProductId(1), ProductId(3), ProductId(7)]);
        assert!(serde_json::from_str::<ProductId>(r#""abc""#).is_err());
    }

    #[test]
    fn test_ids_serialize_as_numbers() {
        assert_eq!(serde_json::to_string(&ProductId(4)).unwrap(), "4");
        assert_eq!(serde_json::to_string(&UserId(2)).unwrap(), "2");
    }

    #[test]
    fn test_user_display_helpers() {
        let json = r#"{
            "id": 1, "username": "johnd", "email": "john@gmail.com",
            "name": {"firstname": "john", "lastname": "doe"},
            "address": {"city": "kilcoole", "street": "new road", "number": 7682, "zipcode": "12926-3874",
                        "geolocation": {"lat": "-37.3159", "long": "81.1496"}},
            "phone": "1-570-236-7033"
        }"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.full_name(), "john doe");
        assert_eq!(user.address_line(), "7682 new road, kilcoole, 12926-3874");
        assert!(user.password.is_empty());
    }
}
