use serde::Deserialize;

use crate::api::{ApiError, LoginExchange};
use crate::notify::Message;

/// Status returned for a successful login
const STATUS_OK: u16 = 200;
/// Status returned when the password does not match
const STATUS_INCORRECT_PASSWORD: u16 = 403;
/// Status returned when no user has the given login
const STATUS_USER_NOT_FOUND: u16 = 404;

#[derive(Debug, Deserialize)]
struct LoginResponse {
    token: String,
}

/// Result of a single login attempt, as seen by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    /// 200 with a readable token
    Succeeded { token: String },
    /// 403
    IncorrectPassword,
    /// 404
    UserNotFound,
    /// Any other status, including 0 and 5xx
    UnexpectedServerError { status: u16 },
    /// 200 whose body is not `{"token": ...}`
    MalformedResponse { reason: String },
    /// No response at all
    NetworkError { reason: String },
    /// Token was valid but could not be written to storage
    StorageFailed { reason: String },
}

impl LoginOutcome {
    /// Classify a completed exchange by its status code.
    pub fn from_exchange(exchange: &LoginExchange) -> Self {
        match exchange.status {
            STATUS_INCORRECT_PASSWORD => LoginOutcome::IncorrectPassword,
            STATUS_USER_NOT_FOUND => LoginOutcome::UserNotFound,
            STATUS_OK => match serde_json::from_str::<LoginResponse>(&exchange.response_text) {
                Ok(body) => LoginOutcome::Succeeded { token: body.token },
                Err(e) => LoginOutcome::MalformedResponse {
                    reason: ApiError::unreadable_body(&e).to_string(),
                },
            },
            status => LoginOutcome::UnexpectedServerError { status },
        }
    }

    /// Message shown to the user for this outcome
    pub fn message(&self) -> Message {
        match self {
            LoginOutcome::Succeeded { .. } => Message::LoginSucceeded,
            LoginOutcome::IncorrectPassword => Message::IncorrectPassword,
            LoginOutcome::UserNotFound => Message::UserNotFound,
            LoginOutcome::UnexpectedServerError { .. } | LoginOutcome::MalformedResponse { .. } => {
                Message::UnexpectedServerError
            }
            LoginOutcome::NetworkError { .. } => Message::NetworkError,
            LoginOutcome::StorageFailed { .. } => Message::SessionNotSaved,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, LoginOutcome::Succeeded { .. })
    }

    pub fn token(&self) -> Option<&str> {
        match self {
            LoginOutcome::Succeeded { token } => Some(token),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exchange(status: u16, body: &str) -> LoginExchange {
        LoginExchange {
            status,
            response_text: body.to_string(),
        }
    }

    #[test]
    fn test_success_extracts_token() {
        let outcome = LoginOutcome::from_exchange(&exchange(200, r#"{"token": "abc123"}"#));
        assert_eq!(
            outcome,
            LoginOutcome::Succeeded {
                token: "abc123".to_string()
            }
        );
        assert_eq!(outcome.message(), Message::LoginSucceeded);
        assert_eq!(outcome.token(), Some("abc123"));
    }

    #[test]
    fn test_success_ignores_extra_fields() {
        let outcome =
            LoginOutcome::from_exchange(&exchange(200, r#"{"token": "t", "role": "student"}"#));
        assert_eq!(outcome.token(), Some("t"));
    }

    #[test]
    fn test_forbidden_and_not_found() {
        // Body is irrelevant for these codes
        let outcome = LoginOutcome::from_exchange(&exchange(403, r#"{"token": "nope"}"#));
        assert_eq!(outcome, LoginOutcome::IncorrectPassword);
        assert_eq!(outcome.message(), Message::IncorrectPassword);

        let outcome = LoginOutcome::from_exchange(&exchange(404, "not json"));
        assert_eq!(outcome, LoginOutcome::UserNotFound);
        assert_eq!(outcome.message(), Message::UserNotFound);
    }

    #[test]
    fn test_other_statuses_collapse_to_server_error() {
        for status in [0, 201, 401, 418, 500, 503] {
            let outcome = LoginOutcome::from_exchange(&exchange(status, ""));
            assert_eq!(outcome, LoginOutcome::UnexpectedServerError { status });
            assert_eq!(outcome.message(), Message::UnexpectedServerError);
            assert!(!outcome.is_success());
        }
    }

    #[test]
    fn test_malformed_success_body() {
        for body in ["", "<html>", r#"{"jwt": "x"}"#, r#"{"token": 42}"#] {
            let outcome = LoginOutcome::from_exchange(&exchange(200, body));
            assert!(
                matches!(outcome, LoginOutcome::MalformedResponse { .. }),
                "body {:?}",
                body
            );
            assert_eq!(outcome.message(), Message::UnexpectedServerError);
            assert_eq!(outcome.token(), None);
        }
    }

    #[test]
    fn test_malformed_reason_does_not_leak_body() {
        let outcome = LoginOutcome::from_exchange(&exchange(200, r#"{"token": 123456}"#));
        match outcome {
            LoginOutcome::MalformedResponse { reason } => {
                assert!(!reason.contains("123456"), "reason {:?}", reason);
                assert!(reason.contains("line 1"));
            }
            other => panic!("unexpected outcome {:?}", other),
        }

        let outcome = LoginOutcome::from_exchange(&exchange(200, "secret-looking body"));
        match outcome {
            LoginOutcome::MalformedResponse { reason } => assert!(!reason.contains("secret")),
            other => panic!("unexpected outcome {:?}", other),
        }
    }

    #[test]
    fn test_failure_messages() {
        let network = LoginOutcome::NetworkError {
            reason: "refused".to_string(),
        };
        assert_eq!(network.message(), Message::NetworkError);

        let storage = LoginOutcome::StorageFailed {
            reason: "disk full".to_string(),
        };
        assert_eq!(storage.message(), Message::SessionNotSaved);
        assert!(!storage.is_success());
    }
}
