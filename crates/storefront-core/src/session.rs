//! Session
//!
//! Client-held record of the logged-in identity. There is no server
//! session: login is a lookup of the username in the public user list.

use serde::{Deserialize, Serialize};

use crate::error::LoginError;
use crate::models::{optional_user_id, User, UserId};
use crate::persist::{self, KeyValueStore};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    #[serde(default, deserialize_with = "optional_user_id")]
    pub user_id: Option<UserId>,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub is_logged_in: bool,
}

impl Session {
    pub fn logged_in(user_id: UserId, username: impl Into<String>) -> Self {
        Self {
            user_id: Some(user_id),
            username: username.into(),
            is_logged_in: true,
        }
    }

    /// Admin accounts may edit and delete products instead of buying them
    pub fn is_admin(&self, admin_username: &str) -> bool {
        self.is_logged_in && self.username == admin_username
    }

    /// Logged-in user id
    pub fn active_user(&self) -> Option<UserId> {
        self.user_id.filter(|_| self.is_logged_in)
    }
}

/// Find `username` in the fetched user list and build a session for it
pub fn login(users: &[User], username: &str) -> Result<Session, LoginError> {
    users
        .iter()
        .find(|user| user.username == username)
        .map(|user| Session::logged_in(user.id, user.username.clone()))
        .ok_or(LoginError::UserNotFound)
}

/// Session to adopt at startup: the persisted one, when it is logged in.
///
/// Reads storage only; never touches the network.
pub fn bootstrap<S: KeyValueStore>(store: &S) -> Option<Session> {
    persist::load_session(store).filter(|session| session.is_logged_in)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Address, Name};
    use crate::persist::{MemoryStore, SESSION_KEY};

    fn make_user(id: u32, username: &str) -> User {
        User {
            id: UserId(id),
            username: username.to_string(),
            password: String::new(),
            email: format!("{username}@example.com"),
            name: Name::default(),
            address: Address::default(),
            phone: String::new(),
        }
    }

    #[test]
    fn test_login_finds_exact_username() {
        let users = vec![make_user(1, "johnd"), make_user(2, "mor_2314")];
        let session = login(&users, "mor_2314").unwrap();
        assert_eq!(session, Session::logged_in(UserId(2), "mor_2314"));
    }

    #[test]
    fn test_login_unknown_username_stays_logged_out() {
        let users = vec![make_user(1, "johnd")];
        let mut session = Session::default();

        match login(&users, "JohnD") {
            Ok(found) => session = found,
            Err(e) => assert_eq!(e.to_string(), "User not found"),
        }
        assert!(!session.is_logged_in);
        assert_eq!(session.active_user(), None);
    }

    #[test]
    fn test_bootstrap_adopts_persisted_session() {
        let store = MemoryStore::new();
        store.insert_raw(SESSION_KEY, r#"{"userId":3,"username":"kevinryan","isLoggedIn":true}"#);

        let session = bootstrap(&store).unwrap();
        assert_eq!(session.active_user(), Some(UserId(3)));
        assert_eq!(session.username, "kevinryan");
    }

    #[test]
    fn test_bootstrap_ignores_logged_out_blob() {
        let store = MemoryStore::new();
        store.insert_raw(SESSION_KEY, r#"{"userId":"","username":"","isLoggedIn":false}"#);
        assert!(bootstrap(&store).is_none());
    }

    #[test]
    fn test_admin_requires_login() {
        let mut session = Session::logged_in(UserId(1), "johnd");
        assert!(session.is_admin("johnd"));
        assert!(!session.is_admin("admin"));
        session.is_logged_in = false;
        assert!(!session.is_admin("johnd"));
    }
}
