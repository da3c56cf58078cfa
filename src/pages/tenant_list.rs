//! Tenant list page: searchable, filterable, paginated table plus the
//! registration dialog.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::auth::gateway::AuthContext;
use crate::auth::guard;
use crate::components::tenant_form::TenantForm;
#[cfg(feature = "csr")]
use crate::components::toast::notify;
#[cfg(feature = "csr")]
use crate::net::api;
use crate::net::types::{SubscriptionPlan, TenantRegistration};
use crate::state::tenants::{StatusFilter, TenantListState, mask_email};
#[cfg(feature = "csr")]
use crate::state::toast::ToastLevel;
use crate::state::toast::ToastState;

#[component]
pub fn TenantListPage() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let state = RwSignal::new(TenantListState::default());
    let show_create = RwSignal::new(false);
    let creating = RwSignal::new(false);
    let query = use_query_map();

    Effect::new(move || {
        auth.with_value(|gateway| guard::check(gateway));
    });

    // Query parameters can open the create dialog or preset the status
    // filter (dashboard quick actions link here).
    Effect::new(move || {
        if query.with(|q| q.get("create").as_deref() == Some("true")) {
            show_create.set(true);
        }
        if let Some(status) = query.with(|q| q.get("status")) {
            let filter = match status.as_str() {
                "active" => StatusFilter::Active,
                "inactive" => StatusFilter::Inactive,
                _ => StatusFilter::All,
            };
            state.update(|s| s.set_status_filter(filter));
        }
    });

    let load = move || {
        #[cfg(feature = "csr")]
        {
            state.update(|s| s.loading = true);
            leptos::task::spawn_local(async move {
                let gateway = auth.get_value();
                match api::fetch_tenants(&gateway).await {
                    Ok(tenants) => {
                        state.update(|s| {
                            s.set_tenants(tenants);
                            s.loading = false;
                        });
                    }
                    Err(err) => {
                        state.update(|s| s.loading = false);
                        notify(toasts, ToastLevel::Error, format!("Could not load tenants: {err}"));
                    }
                }
            });
        }
    };
    Effect::new(move || load());

    let toggle_status = move |id: String| {
        #[cfg(feature = "csr")]
        {
            leptos::task::spawn_local(async move {
                let gateway = auth.get_value();
                match api::toggle_tenant_status(&gateway, &id).await {
                    Ok(_) => {
                        state.update(|s| s.apply_status_toggle(&id));
                        notify(toasts, ToastLevel::Success, "Tenant status updated");
                    }
                    Err(err) => {
                        notify(toasts, ToastLevel::Error, format!("Could not update status: {err}"));
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = id;
        }
    };

    let on_create_cancel = Callback::new(move |()| show_create.set(false));
    let on_create_submit = Callback::new(move |registration: TenantRegistration| {
        #[cfg(feature = "csr")]
        {
            creating.set(true);
            leptos::task::spawn_local(async move {
                let gateway = auth.get_value();
                match api::register_tenant(&gateway, &registration).await {
                    Ok(response) => {
                        creating.set(false);
                        show_create.set(false);
                        let message = if response.message.is_empty() {
                            format!(
                                "Tenant registered. A confirmation email was sent to {}",
                                registration.email
                            )
                        } else {
                            response.message
                        };
                        notify(toasts, ToastLevel::Success, message);
                        load();
                    }
                    Err(err) => {
                        creating.set(false);
                        notify(toasts, ToastLevel::Error, format!("Could not register tenant: {err}"));
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (registration, toasts);
        }
    });

    view! {
        <div class="tenant-list-page">
            <header class="page-header">
                <h1>"Tenants"</h1>
                <div class="page-header__actions">
                    <button class="btn btn--primary" on:click=move |_| show_create.set(true)>
                        "+ New Tenant"
                    </button>
                    <button class="btn" on:click=move |_| load()>
                        "Refresh"
                    </button>
                </div>
            </header>

            <div class="card filters">
                <input
                    type="text"
                    placeholder="Search by name, domain or email..."
                    prop:value=move || state.get().search
                    on:input=move |ev| state.update(|s| s.set_search(event_target_value(&ev)))
                />
                <select on:change=move |ev| {
                    let filter = match event_target_value(&ev).as_str() {
                        "active" => StatusFilter::Active,
                        "inactive" => StatusFilter::Inactive,
                        _ => StatusFilter::All,
                    };
                    state.update(|s| s.set_status_filter(filter));
                }>
                    <option value="">"All statuses"</option>
                    <option value="active">"Active only"</option>
                    <option value="inactive">"Inactive only"</option>
                </select>
                <select on:change=move |ev| {
                    let plan = match event_target_value(&ev).as_str() {
                        "FREE" => Some(SubscriptionPlan::Free),
                        "BASIC" => Some(SubscriptionPlan::Basic),
                        "PREMIUM" => Some(SubscriptionPlan::Premium),
                        "ENTERPRISE" => Some(SubscriptionPlan::Enterprise),
                        _ => None,
                    };
                    state.update(|s| s.set_plan_filter(plan));
                }>
                    <option value="">"All plans"</option>
                    {SubscriptionPlan::ALL
                        .into_iter()
                        .map(|plan| {
                            view! {
                                <option value=plan.label().to_uppercase()>
                                    {plan.label()}
                                </option>
                            }
                        })
                        .collect::<Vec<_>>()}
                </select>
            </div>

            <Show when=move || state.get().loading>
                <p>"Loading tenants..."</p>
            </Show>

            <Show when=move || !state.get().loading>
                <div class="card">
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"Name"</th>
                                <th>"Domain"</th>
                                <th>"Email"</th>
                                <th>"Plan"</th>
                                <th>"Status"</th>
                                <th>"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                let snapshot = state.get();
                                snapshot
                                    .page_items()
                                    .into_iter()
                                    .map(|tenant| {
                                        let email = if snapshot.is_email_visible(&tenant.id) {
                                            tenant.email.clone()
                                        } else {
                                            mask_email(&tenant.email)
                                        };
                                        let detail_href = format!("/tenants/{}", tenant.id);
                                        let mask_id = tenant.id.clone();
                                        let toggle_id = tenant.id.clone();
                                        let status_class = if tenant.active {
                                            "badge badge--success"
                                        } else {
                                            "badge badge--danger"
                                        };
                                        view! {
                                            <tr>
                                                <td>
                                                    {tenant.name.clone()}
                                                    {tenant
                                                        .display_name
                                                        .clone()
                                                        .map(|name| view! { <small>{name}</small> })}
                                                </td>
                                                <td>{tenant.domain.clone()}</td>
                                                <td>
                                                    {email}
                                                    <button
                                                        class="btn btn--icon"
                                                        title="Show/hide email"
                                                        on:click=move |_| {
                                                            state
                                                                .update(|s| s.toggle_email_visibility(&mask_id));
                                                        }
                                                    >
                                                        "👁"
                                                    </button>
                                                </td>
                                                <td>
                                                    <span class=tenant
                                                        .subscription_plan
                                                        .badge_class()>
                                                        {tenant.subscription_plan.label()}
                                                    </span>
                                                </td>
                                                <td>
                                                    <span class=status_class>
                                                        {if tenant.active { "Active" } else { "Inactive" }}
                                                    </span>
                                                </td>
                                                <td class="data-table__actions">
                                                    <a class="btn btn--sm" href=detail_href>
                                                        "Details"
                                                    </a>
                                                    <button
                                                        class="btn btn--sm"
                                                        on:click=move |_| toggle_status(toggle_id.clone())
                                                    >
                                                        {if tenant.active { "Deactivate" } else { "Activate" }}
                                                    </button>
                                                </td>
                                            </tr>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </tbody>
                    </table>

                    <div class="pagination">
                        <button
                            class="btn btn--sm"
                            prop:disabled=move || state.get().page <= 1
                            on:click=move |_| state.update(|s| s.change_page(s.page.saturating_sub(1)))
                        >
                            "Previous"
                        </button>
                        <span>
                            {move || {
                                let s = state.get();
                                format!("Page {} of {}", s.page, s.total_pages().max(1))
                            }}
                        </span>
                        <button
                            class="btn btn--sm"
                            prop:disabled=move || {
                                let s = state.get();
                                s.page >= s.total_pages()
                            }
                            on:click=move |_| state.update(|s| s.change_page(s.page + 1))
                        >
                            "Next"
                        </button>
                    </div>
                </div>
            </Show>

            <Show when=move || show_create.get()>
                <TenantForm pending=creating on_cancel=on_create_cancel on_submit=on_create_submit/>
            </Show>
        </div>
    }
}
