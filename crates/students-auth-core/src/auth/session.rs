use std::sync::Arc;

use tracing::debug;

use super::store::{KeyValueStore, StoreError};

/// Storage key holding the session token
pub const TOKEN_KEY: &str = "token";

/// Token lifecycle on top of a key-value store: set on login, cleared on logout.
///
/// Clone is cheap and shares the underlying store.
#[derive(Clone)]
pub struct SessionStore {
    store: Arc<dyn KeyValueStore>,
}

impl SessionStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Overwrite the stored token
    pub fn save_token(&self, token: &str) -> Result<(), StoreError> {
        self.store.set_item(TOKEN_KEY, token)?;
        debug!("Session token saved");
        Ok(())
    }

    /// Get the stored token, if any
    pub fn token(&self) -> Result<Option<String>, StoreError> {
        self.store.get_item(TOKEN_KEY)
    }

    pub fn is_logged_in(&self) -> bool {
        matches!(self.token(), Ok(Some(_)))
    }

    /// Remove the stored token
    pub fn clear(&self) -> Result<(), StoreError> {
        self.store.remove_item(TOKEN_KEY)?;
        debug!("Session token cleared");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::MemoryStore;

    #[test]
    fn test_token_lifecycle() {
        let backing = Arc::new(MemoryStore::new());
        let session = SessionStore::new(backing.clone());
        assert!(!session.is_logged_in());

        session.save_token("abc123").unwrap();
        assert!(session.is_logged_in());
        assert_eq!(backing.get_item("token").unwrap().as_deref(), Some("abc123"));

        session.clear().unwrap();
        assert!(!session.is_logged_in());
        assert_eq!(session.token().unwrap(), None);
    }

    #[test]
    fn test_only_token_key_written() {
        let backing = Arc::new(MemoryStore::new());
        let session = SessionStore::new(backing.clone());
        session.save_token("a").unwrap();
        session.save_token("b").unwrap();
        assert_eq!(backing.len(), 1);
        assert_eq!(session.token().unwrap().as_deref(), Some("b"));
    }
}
