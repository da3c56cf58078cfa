//! Dashboard page with tenant statistics and quick actions.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::auth::gateway::AuthContext;
use crate::auth::guard;
use crate::components::stat_card::StatCard;
use crate::net::types::TenantStats;

/// Dashboard — aggregate counters plus shortcuts to the tenant screens.
/// Redirects to `/login` if no operator is signed in.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let navigate = use_navigate();

    Effect::new(move || {
        auth.with_value(|gateway| guard::check(gateway));
    });

    // Stats resource — fetched on mount.
    let stats = LocalResource::new(move || async move {
        let gateway = auth.get_value();
        crate::net::api::fetch_stats(&gateway).await.ok()
    });

    let nav_tenants = {
        let navigate = navigate.clone();
        move |_| navigate("/tenants", NavigateOptions::default())
    };
    let nav_new_tenant = move |_| navigate("/tenants?create=true", NavigateOptions::default());

    view! {
        <div class="dashboard-page">
            <header class="page-header">
                <h1>"Dashboard"</h1>
            </header>

            <Suspense fallback=move || view! { <p>"Loading stats..."</p> }>
                {move || {
                    stats
                        .get()
                        .map(|stats| match stats {
                            Some(stats) => view! { <StatsGrid stats=stats/> }.into_any(),
                            None => {
                                view! { <p class="form-error">"Could not load statistics."</p> }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>

            <section class="dashboard-page__actions">
                <h2>"Quick Actions"</h2>
                <button class="btn btn--primary" on:click=nav_new_tenant>
                    "+ New Tenant"
                </button>
                <button class="btn" on:click=nav_tenants>
                    "View Tenants"
                </button>
            </section>
        </div>
    }
}

#[component]
fn StatsGrid(stats: TenantStats) -> impl IntoView {
    view! {
        <div class="dashboard-page__grid">
            <StatCard label="Total Tenants" value=stats.total_tenants/>
            <StatCard label="Active" value=stats.active_tenants/>
            <StatCard label="Inactive" value=stats.inactive_tenants/>
            <StatCard label="Total Users" value=stats.total_users/>
        </div>
    }
}
