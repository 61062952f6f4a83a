//! Client error types.

use filmflow_shared::AppError;
use thiserror::Error;

/// Result type for API client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors from API client operations.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The backend rejected an anonymous request.
    #[error("Not authenticated with the dashboard backend")]
    NotAuthenticated,

    /// No refresh token available, or the backend refused it.
    #[error("Failed to refresh access token: {0}")]
    TokenRefreshFailed(String),

    /// Network request failed.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Backend returned a non-success status.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Error message from the response body.
        message: String,
    },

    /// Response body did not match the expected shape.
    #[error("Parse error: {0}")]
    Parse(String),
}

impl ClientError {
    /// HTTP status for backend errors.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::NotAuthenticated => Some(401),
            _ => None,
        }
    }
}

impl From<&ClientError> for AppError {
    fn from(err: &ClientError) -> Self {
        match err {
            ClientError::NotAuthenticated => {
                Self::Unauthorized("No valid session for the dashboard backend".to_string())
            }
            ClientError::TokenRefreshFailed(message) => Self::Unauthorized(message.clone()),
            ClientError::Api { status, message } => Self::from_status(*status, message.clone()),
            ClientError::Network(e) => Self::ExternalService(e.to_string()),
            ClientError::Parse(message) => Self::ExternalService(message.clone()),
        }
    }
}

impl From<ClientError> for AppError {
    fn from(err: ClientError) -> Self {
        Self::from(&err)
    }
}
