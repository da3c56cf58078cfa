//! Client-side view state for the tenant table.
//!
//! Filtering, search, and pagination run in the browser over the list
//! fetched once from the backend; every filter change resets to the first
//! page.

#[cfg(test)]
#[path = "tenants_test.rs"]
mod tenants_test;

use std::collections::HashSet;

use crate::net::types::{SubscriptionPlan, Tenant};

/// Rows per page in the tenant table.
pub const PAGE_SIZE: usize = 10;

/// Status filter options.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Inactive,
}

impl StatusFilter {
    fn matches(self, tenant: &Tenant) -> bool {
        match self {
            Self::All => true,
            Self::Active => tenant.active,
            Self::Inactive => !tenant.active,
        }
    }
}

/// The fetched tenant list plus search, filters, pagination, and the
/// per-row email visibility toggles.
#[derive(Clone, Debug)]
pub struct TenantListState {
    pub tenants: Vec<Tenant>,
    pub loading: bool,
    pub search: String,
    pub status_filter: StatusFilter,
    pub plan_filter: Option<SubscriptionPlan>,
    /// 1-based current page.
    pub page: usize,
    pub visible_emails: HashSet<String>,
}

impl Default for TenantListState {
    fn default() -> Self {
        Self {
            tenants: Vec::new(),
            loading: false,
            search: String::new(),
            status_filter: StatusFilter::All,
            plan_filter: None,
            page: 1,
            visible_emails: HashSet::new(),
        }
    }
}

impl TenantListState {
    /// Replace the list after a fetch and return to the first page.
    pub fn set_tenants(&mut self, tenants: Vec<Tenant>) {
        self.tenants = tenants;
        self.page = 1;
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
        self.page = 1;
    }

    pub fn set_status_filter(&mut self, filter: StatusFilter) {
        self.status_filter = filter;
        self.page = 1;
    }

    pub fn set_plan_filter(&mut self, plan: Option<SubscriptionPlan>) {
        self.plan_filter = plan;
        self.page = 1;
    }

    fn matches(&self, tenant: &Tenant) -> bool {
        let needle = self.search.trim().to_lowercase();
        let matches_search = needle.is_empty()
            || tenant.name.to_lowercase().contains(&needle)
            || tenant.domain.to_lowercase().contains(&needle)
            || tenant.email.to_lowercase().contains(&needle);
        matches_search
            && self.status_filter.matches(tenant)
            && self.plan_filter.is_none_or(|plan| tenant.subscription_plan == plan)
    }

    /// Tenants passing the current search and filters, in fetch order.
    pub fn filtered(&self) -> Vec<&Tenant> {
        self.tenants.iter().filter(|t| self.matches(t)).collect()
    }

    pub fn total_pages(&self) -> usize {
        self.filtered().len().div_ceil(PAGE_SIZE)
    }

    /// The slice of filtered tenants on the current page.
    pub fn page_items(&self) -> Vec<Tenant> {
        self.filtered()
            .into_iter()
            .skip((self.page - 1) * PAGE_SIZE)
            .take(PAGE_SIZE)
            .cloned()
            .collect()
    }

    /// Move to `page` if it is within range; out-of-range requests are
    /// ignored.
    pub fn change_page(&mut self, page: usize) {
        if page >= 1 && page <= self.total_pages() {
            self.page = page;
        }
    }

    pub fn toggle_email_visibility(&mut self, tenant_id: &str) {
        if !self.visible_emails.remove(tenant_id) {
            self.visible_emails.insert(tenant_id.to_owned());
        }
    }

    pub fn is_email_visible(&self, tenant_id: &str) -> bool {
        self.visible_emails.contains(tenant_id)
    }

    /// Flip the active flag of one tenant in place, after the backend
    /// confirmed the toggle.
    pub fn apply_status_toggle(&mut self, tenant_id: &str) {
        if let Some(tenant) = self.tenants.iter_mut().find(|t| t.id == tenant_id) {
            tenant.active = !tenant.active;
        }
    }
}

/// Mask an email for display: keep at most the first three characters of
/// the local part (fewer for short names), hide the rest.
pub fn mask_email(email: &str) -> String {
    let mut parts = email.splitn(2, '@');
    let (user, domain) = match (parts.next(), parts.next()) {
        (Some(user), Some(domain)) if !user.is_empty() && !domain.is_empty() => (user, domain),
        _ => return "***@***".to_owned(),
    };
    let chars: Vec<char> = user.chars().collect();
    let visible = (chars.len() / 3).min(3);
    let kept: String = chars.into_iter().take(visible).collect();
    format!("{kept}***@{domain}")
}
