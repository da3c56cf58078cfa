//! Error taxonomy for authentication and authorized requests.

use thiserror::Error;

use crate::net::error::ApiError;

/// Failures surfaced by the auth gateway.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AuthError {
    /// The backend explicitly rejected the submitted credentials. The
    /// session is unaffected; the user retries with corrected input.
    #[error("invalid email or password")]
    Rejected,

    /// The login request could not complete (offline, server unreachable).
    #[error("could not reach the server, try again")]
    Network(String),
}

impl AuthError {
    /// Map a login API failure onto the user-facing taxonomy: any 4xx means
    /// rejected credentials, everything else is a connectivity problem.
    pub(crate) fn from_login(err: ApiError) -> Self {
        match err {
            ApiError::Unauthorized | ApiError::Status(400..=499) => Self::Rejected,
            ApiError::Status(status) => Self::Network(format!("server returned status {status}")),
            ApiError::Network(msg) | ApiError::Decode(msg) => Self::Network(msg),
        }
    }
}
