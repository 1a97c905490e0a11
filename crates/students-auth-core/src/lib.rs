//! Core library for the students login client.
//!
//! This crate provides:
//! - `AuthClient`: HTTP transport for the `/api/auth/login` endpoint
//! - `LoginInvoker`: submits credentials and reacts to the status code
//! - `SessionStore`: persistent storage for the session token
//! - `Notifier`: user-facing messages with localized text

pub mod api;
pub mod auth;
pub mod config;
pub mod login;
pub mod notify;

pub use api::{ApiError, AuthClient};
pub use auth::{Credentials, FileStore, KeyValueStore, LoginOutcome, MemoryStore, SessionStore};
pub use config::Config;
pub use login::LoginInvoker;
pub use notify::{Locale, Message, Notifier, StderrNotifier};
