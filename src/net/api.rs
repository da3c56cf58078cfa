//! REST API helpers for the tenant backend.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`, all routed through
//! the request authorizer. Outside the browser the helpers are stubs that
//! fail with a network error, keeping callers compilable natively.

#![allow(clippy::unused_async)]

use crate::auth::gateway::AuthGateway;
use crate::net::error::ApiError;
use crate::net::types::{
    LoginResponse, MessageResponse, Tenant, TenantRegistration, TenantStats, TenantUser,
};

/// Base path of the backend API, same-origin.
pub const API_BASE: &str = "/api";

#[cfg(feature = "csr")]
fn url(path: &str) -> String {
    format!("{API_BASE}{path}")
}

#[cfg(feature = "csr")]
async fn decode<T: serde::de::DeserializeOwned>(
    response: gloo_net::http::Response,
) -> Result<T, ApiError> {
    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }
    response
        .json::<T>()
        .await
        .map_err(|err| ApiError::Decode(err.to_string()))
}

/// Authenticate the operator via `POST /auth/login`.
pub async fn login(
    auth: &AuthGateway,
    email: &str,
    password: &str,
) -> Result<LoginResponse, ApiError> {
    #[cfg(feature = "csr")]
    {
        let body = crate::net::types::LoginRequest {
            email: email.to_owned(),
            password: password.to_owned(),
        };
        let response = super::authorizer::send_json(
            gloo_net::http::Request::post(&url("/auth/login")),
            &body,
            auth,
        )
        .await?;
        decode(response).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (auth, email, password);
        Err(ApiError::unavailable())
    }
}

/// Fetch all tenants.
pub async fn fetch_tenants(auth: &AuthGateway) -> Result<Vec<Tenant>, ApiError> {
    #[cfg(feature = "csr")]
    {
        let response =
            super::authorizer::send(gloo_net::http::Request::get(&url("/tenants")), auth).await?;
        decode(response).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = auth;
        Err(ApiError::unavailable())
    }
}

/// Fetch a single tenant by id.
pub async fn fetch_tenant(auth: &AuthGateway, id: &str) -> Result<Tenant, ApiError> {
    #[cfg(feature = "csr")]
    {
        let path = url(&format!("/tenants/{id}"));
        let response = super::authorizer::send(gloo_net::http::Request::get(&path), auth).await?;
        decode(response).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (auth, id);
        Err(ApiError::unavailable())
    }
}

/// Register a new tenant. The backend sends a confirmation email to the
/// contact address.
pub async fn register_tenant(
    auth: &AuthGateway,
    registration: &TenantRegistration,
) -> Result<MessageResponse, ApiError> {
    #[cfg(feature = "csr")]
    {
        let response = super::authorizer::send_json(
            gloo_net::http::Request::post(&url("/tenants/register")),
            registration,
            auth,
        )
        .await?;
        decode(response).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (auth, registration);
        Err(ApiError::unavailable())
    }
}

/// Flip a tenant's active flag.
pub async fn toggle_tenant_status(
    auth: &AuthGateway,
    id: &str,
) -> Result<MessageResponse, ApiError> {
    #[cfg(feature = "csr")]
    {
        let path = url(&format!("/tenants/{id}/toggle-status"));
        let response = super::authorizer::send(gloo_net::http::Request::put(&path), auth).await?;
        decode(response).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (auth, id);
        Err(ApiError::unavailable())
    }
}

/// Fetch aggregate counters for the dashboard.
pub async fn fetch_stats(auth: &AuthGateway) -> Result<TenantStats, ApiError> {
    #[cfg(feature = "csr")]
    {
        let response =
            super::authorizer::send(gloo_net::http::Request::get(&url("/tenants/stats")), auth)
                .await?;
        decode(response).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = auth;
        Err(ApiError::unavailable())
    }
}

/// Fetch the users of a tenant.
pub async fn fetch_tenant_users(
    auth: &AuthGateway,
    tenant_id: &str,
) -> Result<Vec<TenantUser>, ApiError> {
    #[cfg(feature = "csr")]
    {
        let path = url(&format!("/tenants/{tenant_id}/users"));
        let response = super::authorizer::send(gloo_net::http::Request::get(&path), auth).await?;
        decode(response).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (auth, tenant_id);
        Err(ApiError::unavailable())
    }
}

/// Flip a tenant user's active flag.
pub async fn toggle_user_status(
    auth: &AuthGateway,
    tenant_id: &str,
    user_id: u64,
) -> Result<MessageResponse, ApiError> {
    #[cfg(feature = "csr")]
    {
        let path = url(&format!("/tenants/{tenant_id}/users/{user_id}/toggle-status"));
        let response = super::authorizer::send(gloo_net::http::Request::put(&path), auth).await?;
        decode(response).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (auth, tenant_id, user_id);
        Err(ApiError::unavailable())
    }
}

/// Trigger the welcome email for a tenant.
pub async fn send_welcome_email(
    auth: &AuthGateway,
    tenant_id: &str,
) -> Result<MessageResponse, ApiError> {
    post_action(auth, &format!("/tenants/{tenant_id}/emails/welcome")).await
}

/// Trigger a password-reset email for one tenant user.
pub async fn send_password_reset(
    auth: &AuthGateway,
    tenant_id: &str,
    user_id: u64,
) -> Result<MessageResponse, ApiError> {
    post_action(
        auth,
        &format!("/tenants/{tenant_id}/users/{user_id}/emails/password-reset"),
    )
    .await
}

/// Remind the tenant to create its first user.
pub async fn send_first_user_reminder(
    auth: &AuthGateway,
    tenant_id: &str,
) -> Result<MessageResponse, ApiError> {
    post_action(auth, &format!("/tenants/{tenant_id}/emails/first-user-reminder")).await
}

/// Generate a fresh activation token and resend the activation email.
pub async fn resend_activation_token(
    auth: &AuthGateway,
    tenant_id: &str,
) -> Result<MessageResponse, ApiError> {
    post_action(auth, &format!("/tenants/{tenant_id}/resend-activation")).await
}

/// Bodyless POST used by the email trigger endpoints.
async fn post_action(auth: &AuthGateway, path: &str) -> Result<MessageResponse, ApiError> {
    #[cfg(feature = "csr")]
    {
        let path = url(path);
        let response = super::authorizer::send(gloo_net::http::Request::post(&path), auth).await?;
        decode(response).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (auth, path);
        Err(ApiError::unavailable())
    }
}
