//! Root application component: routing, shared contexts, theme bootstrap.

use std::rc::Rc;

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::auth::gateway::{AuthContext, AuthGateway};
use crate::auth::navigator::Navigator;
use crate::auth::storage::StorageBackend;
use crate::components::navbar::Navbar;
use crate::components::toast::ToastHost;
use crate::net::types::SessionUser;
use crate::pages::{
    dashboard::DashboardPage, login::LoginPage, tenant_detail::TenantDetailPage,
    tenant_list::TenantListPage,
};
use crate::state::toast::ToastState;
use crate::state::ui::UiState;
use crate::util::theme;

fn storage_backend() -> Rc<dyn StorageBackend> {
    #[cfg(feature = "csr")]
    {
        Rc::new(crate::auth::storage::BrowserStorage)
    }
    #[cfg(not(feature = "csr"))]
    {
        Rc::new(crate::auth::storage::MemoryStorage::new())
    }
}

fn navigator() -> Rc<dyn Navigator> {
    #[cfg(feature = "csr")]
    {
        Rc::new(crate::auth::navigator::RouterNavigator::from_router())
    }
    #[cfg(not(feature = "csr"))]
    {
        Rc::new(crate::auth::navigator::RecordingNavigator::new())
    }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/styles.css"/>
        <Title text="Tenant Admin"/>

        <Router>
            <AppShell/>
        </Router>
    }
}

/// Application shell. Lives inside the router so the gateway can capture
/// the navigate handle; provides every shared context before the routes
/// render.
#[component]
fn AppShell() -> impl IntoView {
    let gateway = Rc::new(AuthGateway::new(storage_backend(), navigator()));

    // Bridge the observable session into a reactive signal for the view
    // layer. Subscribe replays the current value, so the signal starts out
    // consistent with persisted state.
    let session = RwSignal::new(Option::<SessionUser>::None);
    gateway
        .session()
        .subscribe(move |user| session.set(user.cloned()));

    let auth: AuthContext = StoredValue::new_local(gateway);
    provide_context(auth);
    provide_context(session);

    let dark = theme::read_preference();
    theme::apply(dark);
    provide_context(RwSignal::new(UiState { dark_mode: dark }));
    provide_context(RwSignal::new(ToastState::default()));

    view! {
        <Navbar/>
        <ToastHost/>
        <main class="app-main">
            <Routes fallback=|| view! { <Redirect path="/dashboard"/> }>
                <Route path=StaticSegment("") view=DashboardPage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
                <Route path=StaticSegment("tenants") view=TenantListPage/>
                <Route path=(StaticSegment("tenants"), ParamSegment("id")) view=TenantDetailPage/>
            </Routes>
        </main>
    }
}
