//! API client for the students authentication endpoint.
//!
//! `AuthClient` performs a single POST per call and returns the status code
//! and body text as a `LoginExchange`. There are no retries.

use std::time::Duration;

use reqwest::{header, Client, Url};
use tracing::debug;

use crate::auth::Credentials;
use crate::config::Config;

use super::ApiError;

// ============================================================================
// Constants
// ============================================================================

/// Path of the login endpoint, relative to the service base URL
pub const LOGIN_PATH: &str = "/api/auth/login";

/// Completed request/response pair as seen by the login handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginExchange {
    pub status: u16,
    pub response_text: String,
}

/// HTTP client for the authentication service.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone)]
pub struct AuthClient {
    client: Client,
    login_url: Url,
}

impl AuthClient {
    /// Create a client for the service at `base_url`
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let login_url = Self::join_login_url(base_url)?;
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self { client, login_url })
    }

    /// Create a client using the base URL and timeout from `config`
    pub fn from_config(config: &Config) -> Result<Self, ApiError> {
        Self::new(&config.base_url, config.request_timeout())
    }

    fn join_login_url(base_url: &str) -> Result<Url, ApiError> {
        let trimmed = base_url.trim_end_matches('/');
        let url = format!("{}{}", trimmed, LOGIN_PATH);
        let parsed = Url::parse(&url).map_err(|e| ApiError::InvalidUrl(format!("{}: {}", base_url, e)))?;
        match parsed.scheme() {
            "http" | "https" => Ok(parsed),
            other => Err(ApiError::InvalidUrl(format!("unsupported scheme {}", other))),
        }
    }

    /// Send the credentials to the login endpoint.
    ///
    /// Any status code is a successful exchange; only transport failures
    /// (connection refused, timeout, unreadable body) return an error.
    pub async fn post_login(&self, credentials: &Credentials) -> Result<LoginExchange, ApiError> {
        debug!(url = %self.login_url, login = %credentials.login, "Sending login request");

        let response = self
            .client
            .post(self.login_url.clone())
            .header(header::ACCEPT, "application/json")
            .json(credentials)
            .send()
            .await?;

        let status = response.status().as_u16();
        let response_text = response.text().await?;
        debug!(status, bytes = response_text.len(), "Login response received");

        Ok(LoginExchange {
            status,
            response_text,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_login_url() {
        let url = AuthClient::join_login_url("http://localhost:8080").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/api/auth/login");

        // Trailing slashes are not doubled
        let url = AuthClient::join_login_url("https://students.example.org/").unwrap();
        assert_eq!(url.as_str(), "https://students.example.org/api/auth/login");

        // A path prefix is kept
        let url = AuthClient::join_login_url("https://example.org/portal").unwrap();
        assert_eq!(url.as_str(), "https://example.org/portal/api/auth/login");
    }

    #[test]
    fn test_join_login_url_rejects_garbage() {
        assert!(matches!(
            AuthClient::join_login_url("not a url"),
            Err(ApiError::InvalidUrl(_))
        ));
        assert!(matches!(
            AuthClient::join_login_url("ftp://example.org"),
            Err(ApiError::InvalidUrl(_))
        ));
    }
}
