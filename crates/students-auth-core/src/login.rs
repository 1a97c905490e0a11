//! The login invoker.
//!
//! `LoginInvoker::login` sends one request, shows exactly one message and,
//! on a 200 with a token, stores that token. Concurrent calls are not
//! coordinated: whichever response completes last owns the stored token.

use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::{error, info, warn};

use crate::api::AuthClient;
use crate::auth::{Credentials, LoginOutcome, SessionStore, StoreError};
use crate::notify::{Locale, Message, Notifier};

pub struct LoginInvoker {
    client: AuthClient,
    session: SessionStore,
    notifier: Arc<dyn Notifier>,
    locale: Locale,
}

impl LoginInvoker {
    pub fn new(
        client: AuthClient,
        session: SessionStore,
        notifier: Arc<dyn Notifier>,
        locale: Locale,
    ) -> Self {
        Self {
            client,
            session,
            notifier,
            locale,
        }
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// Submit credentials and react to the response.
    pub async fn login(&self, login: &str, password: &str) -> LoginOutcome {
        let credentials = Credentials::new(login, password);

        let outcome = match self.client.post_login(&credentials).await {
            Ok(exchange) => LoginOutcome::from_exchange(&exchange),
            Err(e) => {
                warn!(error = %e, login = %login, "Login request failed");
                LoginOutcome::NetworkError {
                    reason: e.to_string(),
                }
            }
        };

        let outcome = match outcome {
            LoginOutcome::Succeeded { token } => match self.session.save_token(&token) {
                Ok(()) => LoginOutcome::Succeeded { token },
                Err(e) => {
                    error!(error = %e, login = %login, "Failed to save session token");
                    LoginOutcome::StorageFailed {
                        reason: e.to_string(),
                    }
                }
            },
            other => other,
        };

        match &outcome {
            LoginOutcome::Succeeded { .. } => info!(login = %login, "Login successful"),
            LoginOutcome::UnexpectedServerError { status } => {
                warn!(login = %login, status, "Unexpected status from login endpoint")
            }
            LoginOutcome::MalformedResponse { reason } => {
                warn!(login = %login, reason = %reason, "Unreadable login response")
            }
            other => info!(login = %login, outcome = ?other, "Login rejected"),
        }

        self.notify(outcome.message());
        outcome
    }

    /// Issue a login on the runtime without waiting for it.
    ///
    /// Earlier in-flight attempts are neither cancelled nor awaited.
    pub fn spawn_login(
        self: &Arc<Self>,
        login: impl Into<String>,
        password: impl Into<String>,
    ) -> JoinHandle<LoginOutcome> {
        let invoker = Arc::clone(self);
        let login = login.into();
        let password = password.into();
        tokio::spawn(async move { invoker.login(&login, &password).await })
    }

    /// Forget the stored token
    pub fn logout(&self) -> Result<(), StoreError> {
        logout(&self.session, self.notifier.as_ref(), self.locale)
    }

    fn notify(&self, message: Message) {
        self.notifier.popup(message.text(self.locale));
    }
}

/// Clear the session and tell the user. Needs no HTTP client.
pub fn logout(
    session: &SessionStore,
    notifier: &dyn Notifier,
    locale: Locale,
) -> Result<(), StoreError> {
    session.clear()?;
    info!("Logged out");
    notifier.popup(Message::LoggedOut.text(locale));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use crate::auth::MemoryStore;

    #[derive(Default)]
    struct Recorder(Mutex<Vec<String>>);

    impl Notifier for Recorder {
        fn popup(&self, message: &str) {
            self.0.lock().unwrap().push(message.to_string());
        }
    }

    #[test]
    fn test_logout_clears_token_and_notifies() {
        let session = SessionStore::new(Arc::new(MemoryStore::new()));
        session.save_token("abc123").unwrap();
        let recorder = Recorder::default();

        logout(&session, &recorder, Locale::Ru).unwrap();

        assert_eq!(session.token().unwrap(), None);
        assert_eq!(*recorder.0.lock().unwrap(), vec!["Выход выполнен"]);
    }

    #[test]
    fn test_logout_without_token_is_fine() {
        let session = SessionStore::new(Arc::new(MemoryStore::new()));
        let recorder = Recorder::default();

        logout(&session, &recorder, Locale::En).unwrap();
        assert_eq!(*recorder.0.lock().unwrap(), vec!["Logged out"]);
    }
}
