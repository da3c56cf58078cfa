use std::cell::RefCell;
use std::rc::Rc;

use super::*;
use crate::auth::navigator::RecordingNavigator;
use crate::auth::storage::MemoryStorage;
use crate::auth::store::{TOKEN_KEY, USER_KEY};
use crate::net::error::ApiError;

fn gateway() -> (AuthGateway, MemoryStorage, RecordingNavigator) {
    let backend = MemoryStorage::new();
    let navigator = RecordingNavigator::new();
    let gateway = AuthGateway::new(Rc::new(backend.clone()), Rc::new(navigator.clone()));
    (gateway, backend, navigator)
}

// =============================================================
// Startup
// =============================================================

#[test]
fn session_restored_from_storage_at_startup() {
    let backend = MemoryStorage::new();
    backend.set(
        USER_KEY,
        r#"{"email":"ops@example.com","name":"ops","token":"abc123"}"#,
    );
    backend.set(TOKEN_KEY, "abc123");

    let gateway = AuthGateway::new(Rc::new(backend), Rc::new(RecordingNavigator::new()));
    assert!(gateway.is_authenticated());
    assert_eq!(gateway.session().get().unwrap().email, "ops@example.com");
}

#[test]
fn corrupt_snapshot_starts_session_at_none() {
    let backend = MemoryStorage::new();
    backend.set(USER_KEY, "garbage");

    let gateway = AuthGateway::new(Rc::new(backend), Rc::new(RecordingNavigator::new()));
    assert!(gateway.session().get().is_none());
}

// =============================================================
// Login
// =============================================================

#[test]
fn login_then_read_is_consistent() {
    let (gateway, _backend, _navigator) = gateway();

    let token = gateway.establish_session("ops@example.com", "abc123");

    assert_eq!(token, "abc123");
    assert!(gateway.is_authenticated());
    assert_eq!(gateway.token().as_deref(), Some("abc123"));
    assert_eq!(gateway.session().get().unwrap().email, "ops@example.com");
}

#[test]
fn login_persists_before_broadcasting() {
    let (gateway, backend, _navigator) = gateway();

    // An observer reacting to the broadcast must see the already-persisted
    // credential.
    let seen_at_notify = Rc::new(RefCell::new(None));
    let seen = seen_at_notify.clone();
    let backend2 = backend.clone();
    gateway.session().subscribe(move |user| {
        if user.is_some() {
            *seen.borrow_mut() = backend2.get(TOKEN_KEY);
        }
    });

    gateway.establish_session("ops@example.com", "abc123");
    assert_eq!(seen_at_notify.borrow().as_deref(), Some("abc123"));
}

#[test]
fn login_error_mapping() {
    assert_eq!(
        AuthError::from_login(ApiError::Status(401)),
        AuthError::Rejected
    );
    assert_eq!(
        AuthError::from_login(ApiError::Unauthorized),
        AuthError::Rejected
    );
    assert_eq!(
        AuthError::from_login(ApiError::Network("offline".to_owned())),
        AuthError::Network("offline".to_owned())
    );
    assert!(matches!(
        AuthError::from_login(ApiError::Status(500)),
        AuthError::Network(_)
    ));
}

// =============================================================
// Logout
// =============================================================

#[test]
fn logout_clears_everything_and_redirects() {
    let (gateway, backend, navigator) = gateway();
    gateway.establish_session("ops@example.com", "abc123");

    gateway.logout();

    assert!(backend.get(TOKEN_KEY).is_none());
    assert!(backend.get(USER_KEY).is_none());
    assert!(gateway.session().get().is_none());
    assert!(!gateway.is_authenticated());
    assert_eq!(navigator.requests(), vec![LOGIN_PATH.to_owned()]);
}

#[test]
fn logout_is_idempotent() {
    let (gateway, backend, navigator) = gateway();
    gateway.establish_session("ops@example.com", "abc123");

    gateway.logout();
    gateway.logout();

    assert!(backend.get(TOKEN_KEY).is_none());
    assert!(gateway.session().get().is_none());
    // Only the navigation request repeats.
    assert_eq!(navigator.requests().len(), 2);
}
