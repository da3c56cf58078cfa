//! Errors produced by the API helpers.

use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request could not complete at all.
    #[error("network error: {0}")]
    Network(String),

    /// The backend answered 401. The request authorizer has already cleared
    /// the session by the time the caller sees this.
    #[error("authorization expired")]
    Unauthorized,

    /// Any other non-success status.
    #[error("request failed with status {0}")]
    Status(u16),

    /// The body could not be encoded, or the response did not match the
    /// expected shape.
    #[error("malformed payload: {0}")]
    Decode(String),
}

impl ApiError {
    /// Stub error for API calls made outside the browser.
    #[cfg(not(feature = "csr"))]
    pub(crate) fn unavailable() -> Self {
        Self::Network("not available outside the browser".to_owned())
    }
}
