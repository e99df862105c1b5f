//! Client error types

use shared::error::{AppError, ErrorCode};
use shared::store::StoreError;
use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Source answered with a non-2xx status
    #[error("{url} returned {status}")]
    Status { status: u16, url: String },

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Local store failure
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

impl From<ClientError> for AppError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Http(e) if e.is_timeout() => {
                AppError::with_message(ErrorCode::TimeoutError, e.to_string())
            }
            ClientError::Http(e) => AppError::with_message(ErrorCode::NetworkError, e.to_string()),
            ClientError::Status { .. } | ClientError::InvalidResponse(_) => {
                AppError::with_message(ErrorCode::UpstreamUnavailable, err.to_string())
            }
            ClientError::Validation(msg) => AppError::validation(msg),
            ClientError::Store(e) => e.into(),
            ClientError::Serialization(e) => AppError::internal(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_mapping() {
        let err: AppError = ClientError::Status {
            status: 503,
            url: "https://lgdweb.nic.in/api/villages/1".into(),
        }
        .into();
        assert_eq!(err.code, ErrorCode::UpstreamUnavailable);

        let err: AppError = ClientError::Validation("title must not be empty".into()).into();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
    }
}
