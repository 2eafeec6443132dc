//! On-Device Persistence
//!
//! Session, cart and language are mirrored to a string key-value store
//! (browser localStorage in the UI, `MemoryStore` in tests).

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::cart::Cart;
use crate::error::StorageError;
use crate::i18n::Language;
use crate::models::ProductId;
use crate::session::Session;

pub const SESSION_KEY: &str = "userSession";
pub const CART_KEY: &str = "cart";
pub const LANGUAGE_KEY: &str = "language";

/// String key-value backend
pub trait KeyValueStore {
    fn read_raw(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn write_raw(&self, key: &str, value: String) -> Result<(), StorageError>;
    fn remove(&self, key: &str);

    /// Read and decode a JSON value. Missing keys are `Ok(None)`.
    fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError>
    where
        Self: Sized,
    {
        match self.read_raw(key)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    fn save<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StorageError>
    where
        Self: Sized,
    {
        self.write_raw(key, serde_json::to_string(value)?)
    }
}

/// In-memory store
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
    writes: Cell<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw stored value, for comparing persisted state
    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    pub fn insert_raw(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
    }

    /// Number of `write_raw` calls so far
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }
}

impl KeyValueStore for MemoryStore {
    fn read_raw(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.raw(key))
    }

    fn write_raw(&self, key: &str, value: String) -> Result<(), StorageError> {
        self.writes.set(self.writes.get() + 1);
        self.entries.borrow_mut().insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

// ========================
// Session
// ========================

/// Persisted session, if any. Unreadable blobs count as absent.
pub fn load_session<S: KeyValueStore>(store: &S) -> Option<Session> {
    match store.load::<Session>(SESSION_KEY) {
        Ok(session) => session,
        Err(e) => {
            tracing::warn!(error = %e, "discarding unreadable session");
            None
        }
    }
}

pub fn save_session<S: KeyValueStore>(store: &S, session: &Session) -> Result<(), StorageError> {
    store.save(SESSION_KEY, session)
}

pub fn clear_session<S: KeyValueStore>(store: &S) {
    store.remove(SESSION_KEY);
}

// ========================
// Cart
// ========================

/// Persisted cart. Entries that are not product ids are dropped.
pub fn load_cart<S: KeyValueStore>(store: &S) -> Cart {
    let entries = match store.load::<Vec<serde_json::Value>>(CART_KEY) {
        Ok(entries) => entries.unwrap_or_default(),
        Err(e) => {
            tracing::warn!(error = %e, "discarding unreadable cart");
            Vec::new()
        }
    };

    let ids = entries
        .into_iter()
        .filter_map(|entry| match serde_json::from_value::<ProductId>(entry.clone()) {
            Ok(id) => Some(id),
            Err(_) => {
                tracing::debug!(%entry, "dropping invalid cart entry");
                None
            }
        })
        .collect();
    Cart::from_ids(ids)
}

pub fn save_cart<S: KeyValueStore>(store: &S, cart: &Cart) -> Result<(), StorageError> {
    store.save(CART_KEY, &cart.ids())
}

/// Add one unit of `id` and save the cart
pub fn add_to_cart<S: KeyValueStore>(store: &S, cart: &mut Cart, id: ProductId) -> Result<(), StorageError> {
    cart.add(id);
    save_cart(store, cart)
}

/// Remove one unit of `id`. Storage is only written when the cart changed.
pub fn remove_from_cart<S: KeyValueStore>(store: &S, cart: &mut Cart, id: ProductId) -> Result<bool, StorageError> {
    if !cart.remove(id) {
        return Ok(false);
    }
    save_cart(store, cart)?;
    Ok(true)
}

pub fn clear_cart<S: KeyValueStore>(store: &S, cart: &mut Cart) -> Result<(), StorageError> {
    cart.clear();
    save_cart(store, cart)
}

// ========================
// Language
// ========================

pub fn load_language<S: KeyValueStore>(store: &S) -> Option<Language> {
    store.load::<Language>(LANGUAGE_KEY).ok().flatten()
}

pub fn save_language<S: KeyValueStore>(store: &S, language: Language) -> Result<(), StorageError> {
    store.save(LANGUAGE_KEY, &language)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserId;

    #[test]
    fn test_missing_keys_load_as_empty() {
        let store = MemoryStore::new();
        assert!(load_session(&store).is_none());
        assert!(load_cart(&store).is_empty());
        assert!(load_language(&store).is_none());
    }

    #[test]
    fn test_session_round_trip_uses_camel_case_blob() {
        let store = MemoryStore::new();
        let session = Session::logged_in(UserId(1), "johnd");
        save_session(&store, &session).unwrap();

        assert_eq!(
            store.raw(SESSION_KEY).unwrap(),
            r#"{"userId":1,"username":"johnd","isLoggedIn":true}"#
        );
        assert_eq!(load_session(&store), Some(session));

        clear_session(&store);
        assert!(load_session(&store).is_none());
    }

    #[test]
    fn test_corrupt_session_is_ignored() {
        let store = MemoryStore::new();
        store.insert_raw(SESSION_KEY, "{not json");
        assert!(load_session(&store).is_none());
    }

    #[test]
    fn test_legacy_string_cart_entries_are_normalized() {
        let store = MemoryStore::new();
        store.insert_raw(CART_KEY, r#"["1", 1, "3", null, "x"]"#);

        let cart = load_cart(&store);
        assert_eq!(cart.ids(), &[ProductId(1), ProductId(1), ProductId(3)]);

        save_cart(&store, &cart).unwrap();
        assert_eq!(store.raw(CART_KEY).unwrap(), "[1,1,3]");
    }

    #[test]
    fn test_add_then_remove_restores_persisted_cart() {
        let store = MemoryStore::new();
        store.insert_raw(CART_KEY, "[1,2,1]");
        let mut cart = load_cart(&store);
        let before = cart.clone();

        add_to_cart(&store, &mut cart, ProductId(1)).unwrap();
        assert_eq!(store.raw(CART_KEY).unwrap(), "[1,2,1,1]");

        assert!(remove_from_cart(&store, &mut cart, ProductId(1)).unwrap());
        assert_eq!(cart, before);
        assert_eq!(store.raw(CART_KEY).unwrap(), "[1,2,1]");
        assert_eq!(store.write_count(), 2);
    }

    #[test]
    fn test_remove_absent_id_skips_write() {
        let store = MemoryStore::new();
        store.insert_raw(CART_KEY, "[1]");
        let mut cart = load_cart(&store);

        assert!(!remove_from_cart(&store, &mut cart, ProductId(2)).unwrap());
        assert_eq!(store.write_count(), 0);
        assert_eq!(store.raw(CART_KEY).unwrap(), "[1]");
    }

    #[test]
    fn test_clear_cart_writes_empty_list() {
        let store = MemoryStore::new();
        let mut cart = Cart::from_ids(vec![ProductId(1), ProductId(3)]);

        clear_cart(&store, &mut cart).unwrap();
        assert!(cart.is_empty());
        assert_eq!(store.raw(CART_KEY).unwrap(), "[]");
        assert_eq!(store.write_count(), 1);
    }

    #[test]
    fn test_language_round_trip() {
        let store = MemoryStore::new();
        save_language(&store, Language::Ja).unwrap();
        assert_eq!(load_language(&store), Some(Language::Ja));
    }
}
