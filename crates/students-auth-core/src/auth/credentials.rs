use std::fmt;

use serde::Serialize;

/// Login/password pair as submitted by the user.
///
/// Values are sent exactly as given: no trimming, case-folding or
/// emptiness checks happen on the client.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub login: String,
    pub password: String,
}

impl Credentials {
    pub fn new(login: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            login: login.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("login", &self.login)
            .field("password", &"<redacted>")
            .finish()
    }
}
