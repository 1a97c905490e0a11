//! Authentication module for credentials, login outcomes and the session token.
//!
//! This module provides:
//! - `Credentials`: the login/password pair sent to the server
//! - `LoginOutcome`: what a completed login exchange means for the user
//! - `SessionStore`: the token lifecycle (set on success, cleared on logout)
//! - `KeyValueStore`: persistent storage backing the session, file or memory
//!
//! Only the `token` key is ever written.

pub mod credentials;
pub mod outcome;
pub mod session;
pub mod store;

pub use credentials::Credentials;
pub use outcome::LoginOutcome;
pub use session::{SessionStore, TOKEN_KEY};
pub use store::{FileStore, KeyValueStore, MemoryStore, StoreError};
