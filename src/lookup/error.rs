//! Error taxonomy for profile lookups.

use thiserror::Error;

use super::transport::TransportError;

/// Every way a lookup can fail.
///
/// All variants except [`LookupError::Transport`] carry a fixed
/// user-facing message. `Transport` wraps the underlying failure
/// unchanged so callers can still inspect it.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("Please enter a username.")]
    EmptyUsername,

    #[error("That username can't be used in a request.")]
    InvalidUrl,

    #[error("The server sent an unexpected response.")]
    InvalidResponse,

    #[error("User not found.")]
    UserNotFound,

    /// Non-200, non-404 status; the code is kept for diagnostics.
    #[error("Something went wrong. Please try again later.")]
    NetworkError { status_code: u16 },

    #[error("Couldn't read the profile data.")]
    DecodingError,

    #[error("No internet connection.")]
    NoInternet,

    #[error(transparent)]
    Transport(TransportError),
}

impl LookupError {
    /// Message to show the user, if this error defines one.
    ///
    /// `None` for propagated transport failures; display their
    /// `to_string()` instead.
    pub fn user_message(&self) -> Option<String> {
        match self {
            LookupError::Transport(_) => None,
            other => Some(other.to_string()),
        }
    }

    /// Short machine-readable tag, used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            LookupError::EmptyUsername => "empty_username",
            LookupError::InvalidUrl => "invalid_url",
            LookupError::InvalidResponse => "invalid_response",
            LookupError::UserNotFound => "user_not_found",
            LookupError::NetworkError { .. } => "network_error",
            LookupError::DecodingError => "decoding_error",
            LookupError::NoInternet => "no_internet",
            LookupError::Transport(_) => "transport",
        }
    }
}

impl From<TransportError> for LookupError {
    fn from(err: TransportError) -> Self {
        if err.is_not_connected() {
            LookupError::NoInternet
        } else {
            LookupError::Transport(err)
        }
    }
}
