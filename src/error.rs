// Error types for folio.
// Covers GitHub API failures, decoding errors, and configuration problems.

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FolioError {
    #[error("GitHub API error: {0}")]
    Api(#[from] reqwest::Error),

    #[error("Authentication failed: invalid or expired token")]
    Unauthorized,

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Rate limit exceeded, resets at {reset_at}")]
    RateLimited { reset_at: String },

    #[error("HTTP {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl FolioError {
    /// Whether a failed request is worth repeating.
    ///
    /// Transport failures, 429 and 5xx are transient. Other 4xx answers
    /// will not change on a second attempt.
    pub fn is_retryable(&self) -> bool {
        match self {
            FolioError::Api(e) => {
                e.is_timeout() || e.is_connect() || e.is_request() || e.is_body()
            }
            FolioError::Status { status, .. } => {
                *status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error()
            }
            _ => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, FolioError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_errors_are_retryable() {
        let err = FolioError::Status {
            status: StatusCode::BAD_GATEWAY,
            body: String::new(),
        };
        assert!(err.is_retryable());

        let err = FolioError::Status {
            status: StatusCode::TOO_MANY_REQUESTS,
            body: String::new(),
        };
        assert!(err.is_retryable());
    }

    #[test]
    fn test_client_errors_are_not_retryable() {
        assert!(!FolioError::Unauthorized.is_retryable());
        assert!(!FolioError::NotFound("/users/nobody".to_string()).is_retryable());
        assert!(
            !FolioError::RateLimited {
                reset_at: "12:00:00".to_string()
            }
            .is_retryable()
        );
        let err = FolioError::Status {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            body: String::new(),
        };
        assert!(!err.is_retryable());
    }
}
