//! Gate evaluated before activating a protected view.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::auth::gateway::AuthGateway;

/// Allow navigation iff a credential is present; otherwise redirect to the
/// login view and deny. Stateless — re-evaluated on every navigation
/// attempt, including browser back/forward.
pub fn check(auth: &AuthGateway) -> bool {
    if auth.is_authenticated() {
        true
    } else {
        auth.redirect_to_login();
        false
    }
}
