//! Error type shared by all REST calls.
//!
//! ERROR HANDLING
//! ==============
//! Every request collapses into one of a few failure classes. Pages never
//! match on transport details; they either redirect (`Unauthorized`), stay
//! quiet (`Aborted`), or show `user_message()`.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure of a single request/response exchange with the document API.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (network down, CORS, DNS).
    #[error("request failed: {0}")]
    Transport(String),

    /// The server answered 401; the bearer token is no longer accepted.
    #[error("unauthorized")]
    Unauthorized,

    /// The server answered with any other non-success status.
    #[error("request failed with status {status}")]
    Status { status: u16, message: Option<String> },

    /// The response body did not match the expected shape.
    #[error("response decode failed: {0}")]
    Decode(String),

    /// The owning view went away and aborted the request.
    #[error("request aborted")]
    Aborted,

    /// Browser-only endpoint called outside the browser.
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Classify a non-success HTTP status, keeping the server's `message` if any.
    pub fn from_status(status: u16, message: Option<String>) -> Self {
        if status == 401 {
            Self::Unauthorized
        } else {
            Self::Status { status, message }
        }
    }

    /// One-line text for the UI, preferring a server-provided message.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Status { message: Some(message), .. } if !message.trim().is_empty() => message.clone(),
            _ => fallback.to_owned(),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }

    pub fn is_aborted(&self) -> bool {
        matches!(self, Self::Aborted)
    }
}
