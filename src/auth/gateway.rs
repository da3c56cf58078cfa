//! The sole entry point for changing session state.
//!
//! The gateway keeps the token store (durable) and session state
//! (in-memory, observable) consistent: login persists before broadcasting,
//! logout clears both and returns to the login view. Everything that needs
//! the credential — the request authorizer on every call, the route guard
//! on every navigation — reads through here.

#[cfg(test)]
#[path = "gateway_test.rs"]
mod gateway_test;

use std::rc::Rc;

use leptos::prelude::*;

use crate::auth::error::AuthError;
use crate::auth::navigator::Navigator;
use crate::auth::session::SessionState;
use crate::auth::storage::StorageBackend;
use crate::auth::store::TokenStore;
use crate::net::types::SessionUser;

/// Path of the login view, the target of every forced redirect.
pub const LOGIN_PATH: &str = "/login";

pub struct AuthGateway {
    store: TokenStore,
    session: SessionState,
    navigator: Rc<dyn Navigator>,
}

/// Context handle for the shared gateway. `StoredValue` with local storage
/// keeps the `Rc` out of closures that need `Send`; the `Copy` handle can be
/// captured anywhere and resolved on the rendering thread.
pub type AuthContext = StoredValue<Rc<AuthGateway>, LocalStorage>;

/// Fetch the shared gateway from leptos context.
pub fn use_auth() -> Rc<AuthGateway> {
    expect_context::<AuthContext>().get_value()
}

impl AuthGateway {
    /// Build the gateway, seeding session state from persisted storage.
    /// A corrupt or absent snapshot simply starts the session at none.
    pub fn new(backend: Rc<dyn StorageBackend>, navigator: Rc<dyn Navigator>) -> Self {
        let store = TokenStore::new(backend);
        let session = SessionState::new(store.load_user());
        Self {
            store,
            session,
            navigator,
        }
    }

    /// The observable session slot. Read or subscribe only; mutation goes
    /// through [`AuthGateway::login`] and [`AuthGateway::logout`].
    pub fn session(&self) -> &SessionState {
        &self.session
    }

    /// Authenticate against the backend and establish the session.
    ///
    /// # Errors
    ///
    /// [`AuthError::Rejected`] when the backend refuses the credentials,
    /// [`AuthError::Network`] when the request cannot complete.
    pub async fn login(&self, email: &str, password: &str) -> Result<String, AuthError> {
        let response = crate::net::api::login(self, email, password)
            .await
            .map_err(AuthError::from_login)?;
        Ok(self.establish_session(email, &response.token))
    }

    /// State transition for a successful login: persist first, then
    /// broadcast, so an observer reading the store during notification sees
    /// consistent data.
    pub fn establish_session(&self, email: &str, token: &str) -> String {
        let user = SessionUser::from_login(email, token);
        self.store.save(&user);
        self.session.set(Some(user));
        token.to_owned()
    }

    /// Clear the session everywhere and return to the login view.
    /// Idempotent: calling while logged out only re-issues the navigation.
    pub fn logout(&self) {
        self.store.clear();
        self.session.set(None);
        self.navigator.navigate(LOGIN_PATH);
    }

    /// Current credential, if any: raw token key first, then the copy
    /// embedded in the persisted snapshot.
    pub fn token(&self) -> Option<String> {
        self.store.load_credential()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// Send an unauthenticated visitor to the login view.
    pub fn redirect_to_login(&self) {
        self.navigator.navigate(LOGIN_PATH);
    }
}
