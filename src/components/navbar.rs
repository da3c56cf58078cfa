//! Top navigation bar, visible only while an operator is signed in.

use leptos::prelude::*;

use crate::auth::gateway::AuthContext;
use crate::net::types::SessionUser;
use crate::state::ui::UiState;
use crate::util::theme;

#[component]
pub fn Navbar() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let session = expect_context::<RwSignal<Option<SessionUser>>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let on_logout = move |_| auth.with_value(|gateway| gateway.logout());
    let on_theme = move |_| {
        ui.update(|state| state.dark_mode = theme::toggle(state.dark_mode));
    };

    view! {
        <Show when=move || session.get().is_some()>
            <nav class="navbar">
                <a class="navbar__brand" href="/dashboard">
                    "Tenant Admin"
                </a>
                <a class="navbar__link" href="/dashboard">
                    "Dashboard"
                </a>
                <a class="navbar__link" href="/tenants">
                    "Tenants"
                </a>
                <span class="navbar__spacer"></span>
                <span class="navbar__user">
                    {move || session.get().map(|user| user.name).unwrap_or_default()}
                </span>
                <button class="btn btn--ghost" title="Toggle theme" on:click=on_theme>
                    {move || if ui.get().dark_mode { "Light" } else { "Dark" }}
                </button>
                <button class="btn btn--ghost" on:click=on_logout>
                    "Sign out"
                </button>
            </nav>
        </Show>
    }
}
