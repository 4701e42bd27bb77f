#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use thiserror::Error;

/// Fallback shown when the server gives no usable message or the request
/// never completes.
pub const FALLBACK_MESSAGE: &str = "Login failed. Please try again.";

/// Why a login attempt failed. `Display` is the user-facing message; the
/// view layer renders it verbatim.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AuthError {
    /// The server answered with a non-success status.
    #[error("{0}")]
    Rejected(String),
    /// The request never produced a response.
    #[error("{FALLBACK_MESSAGE}")]
    Transport,
}

impl AuthError {
    /// Build a rejection from a response body, falling back to the generic
    /// message when the server sent nothing useful.
    pub fn rejected(body: String) -> Self {
        if body.trim().is_empty() {
            Self::Rejected(FALLBACK_MESSAGE.to_owned())
        } else {
            Self::Rejected(body)
        }
    }
}
