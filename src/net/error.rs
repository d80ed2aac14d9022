//! Error taxonomy for backend calls.
//!
//! ERROR HANDLING
//! ==============
//! Every API failure is caught at the call site. `ApiError` lets callers tell
//! an expired session (forced logout) apart from connectivity problems
//! (retryable banner) and rejected requests (message from the server).

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Message shown when the backend cannot be reached.
pub const NETWORK_ERROR_MESSAGE: &str = "Unable to reach the server. Please try again.";

/// Failure of a single backend request.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The server answered `401`: the bearer is missing, invalid, or expired,
    /// or a login was rejected. Carries the server's `detail` when present.
    #[error("unauthorized")]
    Unauthorized(Option<String>),
    /// Any other non-success status, with the server's `detail` when present.
    #[error("request failed with status {status}")]
    Status { status: u16, detail: Option<String> },
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// A success response whose body did not match the expected schema.
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized(_))
    }

    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network(_))
    }

    /// Server-provided detail text, if any.
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Unauthorized(detail) | Self::Status { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    /// Non-technical message for banners; `fallback` covers rejected requests
    /// that carry no server detail.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Network(_) => NETWORK_ERROR_MESSAGE.to_owned(),
            Self::Unauthorized(Some(detail)) | Self::Status { detail: Some(detail), .. } if !detail.trim().is_empty() => {
                detail.clone()
            }
            Self::Unauthorized(_) | Self::Status { .. } | Self::Decode(_) => fallback.to_owned(),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}
