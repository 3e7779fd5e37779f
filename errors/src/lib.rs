//! # Voxscribe Errors
//!
//! Shared error taxonomy for the Voxscribe client workspace.
//!
//! Every failure a store action can surface is one of three kinds:
//! a transport failure, an HTTP error response, or a client-side
//! validation failure caught before any request is made. Callers match
//! on the kind; the store layer additionally derives a display message
//! for UI binding via [`ApiError::display_message`].

use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure: DNS, connect, timeout, body read.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Non-2xx response. `message` is the server-provided `message` or
    /// `error` field when the body carried one, else a generic
    /// per-service fallback. `body` preserves the raw response text.
    #[error("HTTP {status}: {message}")]
    Http {
        status: u16,
        message: String,
        body: String
    },

    /// Client-side precondition failure. Raised before any network call.
    #[error("{message}")]
    Validation { message: String }
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into()
        }
    }

    /// HTTP status code, when the error is an HTTP error response.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None
        }
    }

    pub fn is_unauthenticated(&self) -> bool {
        self.status() == Some(401)
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Message suitable for UI binding: the normalized server message for
    /// HTTP errors, the validation message as-is, and the caller-supplied
    /// fallback for transport failures.
    pub fn display_message(&self, fallback: &str) -> String {
        match self {
            Self::Http { message, .. } | Self::Validation { message } => message.clone(),
            Self::Network(_) => fallback.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_error_exposes_status() {
        let err = ApiError::Http {
            status: 404,
            message: "post not found".to_string(),
            body: String::new()
        };
        assert_eq!(err.status(), Some(404));
        assert!(err.is_not_found());
        assert!(!err.is_unauthenticated());
    }

    #[test]
    fn validation_error_has_no_status() {
        let err = ApiError::validation("prompt is required");
        assert_eq!(err.status(), None);
        assert_eq!(err.to_string(), "prompt is required");
    }

    #[test]
    fn display_message_prefers_server_message() {
        let err = ApiError::Http {
            status: 500,
            message: "database unavailable".to_string(),
            body: String::new()
        };
        assert_eq!(err.display_message("Request failed"), "database unavailable");
    }

    #[test]
    fn display_message_falls_back_for_validation() {
        let err = ApiError::validation("voice profile is not configured");
        assert_eq!(
            err.display_message("Request failed"),
            "voice profile is not configured"
        );
    }
}
