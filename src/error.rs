// src/error.rs
use thiserror::Error;

/// Failure taxonomy for calls against the Streamify API.
///
/// Every failure path of the HTTP clients is captured into one of these
/// variants; nothing panics and nothing escapes as an uncaught fault. A
/// missing credential is deliberately NOT an error value: the poll session
/// treats it as "never start", not as something to report.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network unreachable, timeout, connection reset.
    #[error("transport error: {0}")]
    Transport(String),

    /// Non-2xx response from the API; carries the status and the error body
    /// the server sent (plain text or JSON, passed through verbatim).
    #[error("server returned {code}: {body}")]
    Status { code: u16, body: String },

    /// 2xx response whose body did not decode as expected.
    #[error("malformed response body: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Transport(err.to_string())
        }
    }
}
