//! Wire types shared with the backend REST API.
//!
//! Field names follow the backend's camelCase JSON; optional fields default
//! to `None` so older backend versions that omit them still deserialize.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

/// Credentials submitted to `POST /auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful login response body.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

/// Snapshot of the authenticated operator, persisted across page reloads.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SessionUser {
    pub email: String,
    pub name: String,
    pub token: String,
}

impl SessionUser {
    /// Build the session snapshot from the login input and the issued token.
    ///
    /// The backend has no profile endpoint yet, so the display name defaults
    /// to the local part of the email.
    pub fn from_login(email: &str, token: &str) -> Self {
        let name = email.split('@').next().unwrap_or(email).to_owned();
        Self {
            email: email.to_owned(),
            name,
            token: token.to_owned(),
        }
    }
}

/// Subscription tier of a tenant account.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SubscriptionPlan {
    Free,
    Basic,
    Premium,
    Enterprise,
}

impl SubscriptionPlan {
    /// All plans, in tier order, for filter dropdowns.
    pub const ALL: [Self; 4] = [Self::Free, Self::Basic, Self::Premium, Self::Enterprise];

    pub fn label(self) -> &'static str {
        match self {
            Self::Free => "Free",
            Self::Basic => "Basic",
            Self::Premium => "Premium",
            Self::Enterprise => "Enterprise",
        }
    }

    /// Badge CSS class used in the tenant table.
    pub fn badge_class(self) -> &'static str {
        match self {
            Self::Free => "badge badge--secondary",
            Self::Basic => "badge badge--warning",
            Self::Premium | Self::Enterprise => "badge badge--success",
        }
    }
}

/// A tenant account as returned by the backend.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tenant {
    pub id: String,
    pub domain: String,
    pub name: String,
    pub email: String,
    pub active: bool,
    pub subscription_plan: SubscriptionPlan,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub logo_url: Option<String>,
    #[serde(default)]
    pub max_users: Option<u32>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub timezone: Option<String>,
    #[serde(default)]
    pub locale: Option<String>,
    #[serde(default)]
    pub currency_code: Option<String>,
}

/// Payload for registering a new tenant (`POST /tenants/register`).
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TenantRegistration {
    pub name: String,
    pub domain: String,
    pub email: String,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}

impl TenantRegistration {
    /// Client-side validation mirroring the backend's constraints.
    /// Returns one message per failing field.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();
        if self.name.trim().len() < 3 {
            errors.push("Company name must be at least 3 characters".to_owned());
        }
        if !is_valid_domain(&self.domain) {
            errors.push("Domain is not valid (e.g. company.com)".to_owned());
        }
        if !is_valid_email(&self.email) {
            errors.push("Contact email is not valid".to_owned());
        }
        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

/// Aggregate counters for the dashboard (`GET /tenants/stats`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TenantStats {
    pub total_tenants: u64,
    pub active_tenants: u64,
    pub inactive_tenants: u64,
    pub total_users: u64,
}

/// A user belonging to a tenant (`GET /tenants/{id}/users`).
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TenantUser {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub active: bool,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub last_access: Option<String>,
}

/// Generic body returned by action endpoints (email triggers, toggles).
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
}

/// Loose domain check: lowercase alphanumeric labels separated by dots,
/// hyphens allowed inside a label, alphabetic TLD of at least two characters.
pub fn is_valid_domain(domain: &str) -> bool {
    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 {
        return false;
    }
    for label in &labels {
        if label.is_empty() || label.starts_with('-') || label.ends_with('-') {
            return false;
        }
        if !label
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        {
            return false;
        }
    }
    let tld = labels[labels.len() - 1];
    tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_lowercase())
}

/// Minimal email shape check; the backend remains authoritative.
pub fn is_valid_email(email: &str) -> bool {
    let mut parts = email.splitn(2, '@');
    match (parts.next(), parts.next()) {
        (Some(user), Some(domain)) => {
            !user.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
        }
        _ => false,
    }
}
