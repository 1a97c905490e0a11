use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Invalid base URL: {0}")]
    InvalidUrl(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl ApiError {
    /// Describe a body that failed to deserialize by position only.
    /// serde's own message echoes the offending value, which may be a token.
    pub fn unreadable_body(err: &serde_json::Error) -> Self {
        ApiError::InvalidResponse(format!(
            "{:?} error at line {}, column {}",
            err.classify(),
            err.line(),
            err.column()
        ))
    }
}
