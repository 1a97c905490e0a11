//! HTTP client module for the students authentication service.
//!
//! This module provides the `AuthClient` which sends credentials to the
//! login endpoint and hands back the raw status code and body. Deciding
//! what the status means is left to the caller.

pub mod client;
pub mod error;

pub use client::{AuthClient, LoginExchange, LOGIN_PATH};
pub use error::ApiError;
