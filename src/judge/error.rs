//! Judge transport errors

use reqwest::StatusCode;
use serde::Deserialize;

/// Failure talking to the judge service
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum JudgeError {
    /// Connection, TLS, timeout or body-read failure
    #[error("{0}")]
    Network(String),

    /// Non-2xx response; the message prefers the server's `error` field
    #[error("{message}")]
    Status { status: u16, message: String },

    /// 2xx response whose body does not match the contract
    #[error("Malformed judge response: {0}")]
    MalformedResponse(String),

    /// The owning session was torn down before the judge answered
    #[error("Request cancelled")]
    Cancelled,

    #[error("Judge client configuration error: {0}")]
    Client(String),
}

/// Error body some judge deployments send with non-2xx statuses
#[derive(Debug, Deserialize)]
struct ServerErrorBody {
    error: String,
}

impl JudgeError {
    /// Build a status error from a non-2xx response body
    pub fn from_status(status: StatusCode, body: &[u8]) -> Self {
        let message = serde_json::from_slice::<ServerErrorBody>(body)
            .ok()
            .map(|b| b.error)
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| format!("Request failed with status code {}", status.as_u16()));

        JudgeError::Status {
            status: status.as_u16(),
            message,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, JudgeError::Cancelled)
    }
}

impl From<reqwest::Error> for JudgeError {
    fn from(err: reqwest::Error) -> Self {
        JudgeError::Network(err.to_string())
    }
}

/// Result type alias using JudgeError
pub type JudgeResult<T> = Result<T, JudgeError>;
