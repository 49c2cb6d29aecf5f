//! Failure taxonomy for calls against the Alumni Connect API.

use thiserror::Error;

pub const GENERIC_FAILURE: &str = "An error occurred";
pub const TRANSPORT_FAILURE: &str = "Could not reach the server. Please try again.";
pub const MALFORMED_RESPONSE: &str = "The server returned an invalid response";
pub const SESSION_EXPIRED: &str = "Your session has expired. Please sign in again.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Transport(String),

    /// HTTP 401. The session store has already been cleared.
    #[error("unauthorized")]
    Unauthorized,

    /// Any other non-2xx status.
    #[error("request failed with status {status}")]
    Rejected {
        status: u16,
        message: Option<String>,
    },

    /// A response body that is not the JSON we expect.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    #[error("invalid API configuration: {0}")]
    InvalidConfig(String),
}

impl ApiError {
    pub fn transport(err: impl std::fmt::Display) -> Self {
        ApiError::Transport(err.to_string())
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }

    /// Text to put in front of the user.
    ///
    /// Server messages are passed through verbatim; everything else maps to a
    /// fixed sentence.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Transport(_) => TRANSPORT_FAILURE.to_string(),
            ApiError::Unauthorized => SESSION_EXPIRED.to_string(),
            ApiError::Rejected {
                message: Some(message),
                ..
            } => message.clone(),
            ApiError::Rejected { message: None, .. } => GENERIC_FAILURE.to_string(),
            ApiError::MalformedResponse(_) => MALFORMED_RESPONSE.to_string(),
            ApiError::InvalidConfig(_) => GENERIC_FAILURE.to_string(),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::MalformedResponse(err.to_string())
        } else {
            ApiError::Transport(err.to_string())
        }
    }
}

impl From<connect_core::KeyError> for ApiError {
    fn from(err: connect_core::KeyError) -> Self {
        ApiError::MalformedResponse(err.to_string())
    }
}
