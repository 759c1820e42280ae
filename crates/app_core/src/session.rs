//! Admin session
//!
//! The login check is a placeholder with a fixed demo account. It is not an
//! authentication system and guards nothing beyond hiding the admin pages.

use crate::error::AppError;
use crate::repository::keys;
use app_db::KeyValueStore;
use serde_json::Value;

/// Whether the admin pages are unlocked
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Session {
    authenticated: bool,
}

impl Session {
    pub fn authenticated() -> Self {
        Self {
            authenticated: true,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    pub fn login(&mut self) {
        self.authenticated = true;
    }

    pub fn logout(&mut self) {
        self.authenticated = false;
    }
}

/// Credential check for the admin login form
pub trait Authenticator {
    fn verify(&self, email: &str, password: &str) -> bool;
}

/// Accepts only the demo account
pub struct MockAuthenticator;

impl MockAuthenticator {
    pub const EMAIL: &'static str = "admin@demo.com";
    pub const PASSWORD: &'static str = "password";
}

impl Authenticator for MockAuthenticator {
    fn verify(&self, email: &str, password: &str) -> bool {
        tracing::warn!("Using the demo authenticator; admin login is not protected");
        email == Self::EMAIL && password == Self::PASSWORD
    }
}

/// Persists the session flag across restarts
pub struct SessionStore<S> {
    store: S,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn load(&self) -> Result<Session, AppError> {
        let flag = self.store.read(keys::AUTH)?;
        Ok(Session {
            authenticated: flag.as_ref().and_then(Value::as_str) == Some("true"),
        })
    }

    pub fn save(&self, session: &Session) -> Result<(), AppError> {
        if session.is_authenticated() {
            self.store.write(keys::AUTH, &Value::from("true"))?;
        } else {
            self.store.remove(keys::AUTH)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use app_db::MemoryStore;
    use std::sync::Arc;

    #[test]
    fn test_mock_credentials() {
        let auth = MockAuthenticator;
        assert!(auth.verify("admin@demo.com", "password"));
        assert!(!auth.verify("admin@demo.com", "Password"));
        assert!(!auth.verify("someone@demo.com", "password"));
    }

    #[test]
    fn test_session_persistence() {
        let store = Arc::new(MemoryStore::new());
        let sessions = SessionStore::new(Arc::clone(&store));
        assert!(!sessions.load().unwrap().is_authenticated());

        let mut session = Session::default();
        session.login();
        sessions.save(&session).unwrap();
        assert!(sessions.load().unwrap().is_authenticated());
        assert!(store.contains(keys::AUTH).unwrap());

        session.logout();
        sessions.save(&session).unwrap();
        assert!(!sessions.load().unwrap().is_authenticated());
        assert!(store.is_empty());
    }

    #[test]
    fn test_only_true_string_counts() {
        let store = MemoryStore::new();
        store.write(keys::AUTH, &Value::Bool(true)).unwrap();
        assert!(!SessionStore::new(store).load().unwrap().is_authenticated());
    }
}
