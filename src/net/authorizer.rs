//! Cross-cutting request authorization.
//!
//! Every API helper sends through this module. The outgoing request gets a
//! bearer header when a credential is stored; a 401 from any endpoint
//! clears the session and returns the visitor to the login view. The
//! failure is still handed back to the caller — forced logout never
//! swallows the error. Multiple in-flight requests may each trigger the
//! logout; its idempotence makes that safe.

#[cfg(test)]
#[path = "authorizer_test.rs"]
mod authorizer_test;

use crate::auth::gateway::AuthGateway;
use crate::net::error::ApiError;

/// The sole status treated as an authorization failure at this layer.
pub const UNAUTHORIZED: u16 = 401;

/// `Authorization` header value for the outgoing request, if a credential
/// is stored. Without one the request goes out unmodified.
pub fn authorization_header(auth: &AuthGateway) -> Option<String> {
    auth.token().map(|token| format!("Bearer {token}"))
}

pub fn is_unauthorized(status: u16) -> bool {
    status == UNAUTHORIZED
}

/// Classify a response status. On 401 the session is cleared and the
/// visitor redirected before the error propagates; every other status
/// passes through untouched.
pub fn check_status(status: u16, auth: &AuthGateway) -> Result<(), ApiError> {
    if is_unauthorized(status) {
        auth.logout();
        return Err(ApiError::Unauthorized);
    }
    Ok(())
}

/// Send a bodyless request through the authorization pipeline.
#[cfg(feature = "csr")]
pub async fn send(
    request: gloo_net::http::RequestBuilder,
    auth: &AuthGateway,
) -> Result<gloo_net::http::Response, ApiError> {
    let request = match authorization_header(auth) {
        Some(header) => request.header("Authorization", &header),
        None => request,
    };
    let response = request
        .send()
        .await
        .map_err(|err| ApiError::Network(err.to_string()))?;
    check_status(response.status(), auth)?;
    Ok(response)
}

/// Send a request with a JSON body through the authorization pipeline.
#[cfg(feature = "csr")]
pub async fn send_json<B: serde::Serialize>(
    request: gloo_net::http::RequestBuilder,
    body: &B,
    auth: &AuthGateway,
) -> Result<gloo_net::http::Response, ApiError> {
    let request = match authorization_header(auth) {
        Some(header) => request.header("Authorization", &header),
        None => request,
    };
    let response = request
        .json(body)
        .map_err(|err| ApiError::Decode(err.to_string()))?
        .send()
        .await
        .map_err(|err| ApiError::Network(err.to_string()))?;
    check_status(response.status(), auth)?;
    Ok(response)
}
