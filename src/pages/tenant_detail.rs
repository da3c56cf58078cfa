//! Tenant detail page: account header, user table, and email actions.
//! Every mutating action goes through a confirmation dialog.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::auth::gateway::AuthContext;
use crate::auth::guard;
use crate::components::confirm_dialog::ConfirmDialog;
#[cfg(feature = "csr")]
use crate::components::toast::notify;
#[cfg(feature = "csr")]
use crate::net::api;
use crate::net::types::{Tenant, TenantUser};
#[cfg(feature = "csr")]
use crate::state::toast::ToastLevel;
use crate::state::toast::ToastState;

/// A mutation awaiting operator confirmation.
#[derive(Clone, Debug, PartialEq, Eq)]
enum PendingAction {
    ToggleTenant { active: bool },
    ToggleUser { user_id: u64, name: String, active: bool },
    PasswordReset { user_id: u64, name: String },
    WelcomeEmail,
    FirstUserReminder,
    ResendActivation,
}

impl PendingAction {
    fn prompt(&self) -> String {
        match self {
            Self::ToggleTenant { active: true } => {
                "Deactivate this tenant? Its users will lose access.".to_owned()
            }
            Self::ToggleTenant { active: false } => "Activate this tenant?".to_owned(),
            Self::ToggleUser { name, active: true, .. } => {
                format!("Deactivate user {name}?")
            }
            Self::ToggleUser { name, active: false, .. } => format!("Activate user {name}?"),
            Self::PasswordReset { name, .. } => {
                format!("Send a password reset email to {name}?")
            }
            Self::WelcomeEmail => "Send the welcome email to this tenant?".to_owned(),
            Self::FirstUserReminder => {
                "Send a reminder to create the first user?".to_owned()
            }
            Self::ResendActivation => {
                "Generate a new activation token and resend the email?".to_owned()
            }
        }
    }

    fn success_message(&self) -> &'static str {
        match self {
            Self::ToggleTenant { .. } => "Tenant status updated",
            Self::ToggleUser { .. } => "User status updated",
            Self::PasswordReset { .. } => "Password reset email sent",
            Self::WelcomeEmail => "Welcome email sent",
            Self::FirstUserReminder => "Reminder sent",
            Self::ResendActivation => "Activation email resent",
        }
    }
}

#[component]
pub fn TenantDetailPage() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let params = use_params_map();
    let tenant_id = Memo::new(move |_| params.with(|p| p.get("id").unwrap_or_default()));

    let tenant = RwSignal::new(Option::<Tenant>::None);
    let users = RwSignal::new(Vec::<TenantUser>::new());
    let loading = RwSignal::new(false);
    let pending_action = RwSignal::new(Option::<PendingAction>::None);

    Effect::new(move || {
        auth.with_value(|gateway| guard::check(gateway));
    });

    // Load tenant + users whenever the route parameter changes.
    Effect::new(move || {
        let id = tenant_id.get();
        if id.is_empty() {
            return;
        }
        #[cfg(feature = "csr")]
        {
            loading.set(true);
            leptos::task::spawn_local(async move {
                let gateway = auth.get_value();
                match api::fetch_tenant(&gateway, &id).await {
                    Ok(fetched) => tenant.set(Some(fetched)),
                    Err(err) => {
                        notify(toasts, ToastLevel::Error, format!("Could not load tenant: {err}"));
                    }
                }
                match api::fetch_tenant_users(&gateway, &id).await {
                    Ok(fetched) => users.set(fetched),
                    Err(err) => {
                        notify(toasts, ToastLevel::Error, format!("Could not load users: {err}"));
                    }
                }
                loading.set(false);
            });
        }
    });

    let on_cancel = Callback::new(move |()| pending_action.set(None));
    let on_confirm = Callback::new(move |()| {
        let Some(action) = pending_action.get() else {
            return;
        };
        pending_action.set(None);
        #[cfg(feature = "csr")]
        {
            let id = tenant_id.get_untracked();
            leptos::task::spawn_local(async move {
                let gateway = auth.get_value();
                let result = match &action {
                    PendingAction::ToggleTenant { .. } => {
                        api::toggle_tenant_status(&gateway, &id).await
                    }
                    PendingAction::ToggleUser { user_id, .. } => {
                        api::toggle_user_status(&gateway, &id, *user_id).await
                    }
                    PendingAction::PasswordReset { user_id, .. } => {
                        api::send_password_reset(&gateway, &id, *user_id).await
                    }
                    PendingAction::WelcomeEmail => api::send_welcome_email(&gateway, &id).await,
                    PendingAction::FirstUserReminder => {
                        api::send_first_user_reminder(&gateway, &id).await
                    }
                    PendingAction::ResendActivation => {
                        api::resend_activation_token(&gateway, &id).await
                    }
                };
                match result {
                    Ok(response) => {
                        match &action {
                            PendingAction::ToggleTenant { .. } => {
                                tenant.update(|t| {
                                    if let Some(t) = t {
                                        t.active = !t.active;
                                    }
                                });
                            }
                            PendingAction::ToggleUser { user_id, .. } => {
                                let user_id = *user_id;
                                users.update(|list| {
                                    if let Some(user) =
                                        list.iter_mut().find(|u| u.id == user_id)
                                    {
                                        user.active = !user.active;
                                    }
                                });
                            }
                            _ => {}
                        }
                        let message = if response.message.is_empty() {
                            action.success_message().to_owned()
                        } else {
                            response.message
                        };
                        notify(toasts, ToastLevel::Success, message);
                    }
                    Err(err) => {
                        notify(toasts, ToastLevel::Error, format!("Action failed: {err}"));
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (action, toasts);
        }
    });

    let request = move |action: PendingAction| pending_action.set(Some(action));

    let active_users = move || users.get().iter().filter(|u| u.active).count();
    let inactive_users = move || users.get().iter().filter(|u| !u.active).count();

    view! {
        <div class="tenant-detail-page">
            <Show when=move || loading.get()>
                <p>"Loading tenant..."</p>
            </Show>

            {move || {
                tenant
                    .get()
                    .map(|tenant| {
                        let status_class = if tenant.active {
                            "badge badge--success"
                        } else {
                            "badge badge--danger"
                        };
                        let toggle_label = if tenant.active { "Deactivate" } else { "Activate" };
                        let tenant_active = tenant.active;
                        view! {
                            <header class="page-header">
                                <h1>{tenant.name.clone()}</h1>
                                <span class=status_class>
                                    {if tenant.active { "Active" } else { "Inactive" }}
                                </span>
                            </header>

                            <div class="card tenant-detail__summary">
                                <dl>
                                    <dt>"Domain"</dt>
                                    <dd>{tenant.domain.clone()}</dd>
                                    <dt>"Contact"</dt>
                                    <dd>{tenant.email.clone()}</dd>
                                    <dt>"Plan"</dt>
                                    <dd>{tenant.subscription_plan.label()}</dd>
                                    <dt>"Phone"</dt>
                                    <dd>{tenant.phone_number.clone().unwrap_or_else(|| "—".to_owned())}</dd>
                                    <dt>"Address"</dt>
                                    <dd>{tenant.address.clone().unwrap_or_else(|| "—".to_owned())}</dd>
                                </dl>
                            </div>

                            <div class="card tenant-detail__actions">
                                <h2>"Actions"</h2>
                                <button
                                    class="btn"
                                    on:click=move |_| request(PendingAction::ToggleTenant {
                                        active: tenant_active,
                                    })
                                >
                                    {toggle_label}
                                </button>
                                <button
                                    class="btn"
                                    on:click=move |_| request(PendingAction::WelcomeEmail)
                                >
                                    "Send welcome email"
                                </button>
                                <button
                                    class="btn"
                                    on:click=move |_| request(PendingAction::FirstUserReminder)
                                >
                                    "Send first-user reminder"
                                </button>
                                <button
                                    class="btn"
                                    on:click=move |_| request(PendingAction::ResendActivation)
                                >
                                    "Resend activation email"
                                </button>
                            </div>
                        }
                    })
            }}

            <div class="card tenant-detail__users">
                <h2>
                    "Users ("
                    {active_users}
                    " active, "
                    {inactive_users}
                    " inactive)"
                </h2>
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Name"</th>
                            <th>"Email"</th>
                            <th>"Status"</th>
                            <th>"Created"</th>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            users
                                .get()
                                .into_iter()
                                .map(|user| {
                                    let status_class = if user.active {
                                        "badge badge--success"
                                    } else {
                                        "badge badge--danger"
                                    };
                                    let toggle_action = PendingAction::ToggleUser {
                                        user_id: user.id,
                                        name: user.name.clone(),
                                        active: user.active,
                                    };
                                    let reset_action = PendingAction::PasswordReset {
                                        user_id: user.id,
                                        name: user.name.clone(),
                                    };
                                    view! {
                                        <tr>
                                            <td>{user.name.clone()}</td>
                                            <td>{user.email.clone()}</td>
                                            <td>
                                                <span class=status_class>
                                                    {if user.active { "Active" } else { "Inactive" }}
                                                </span>
                                            </td>
                                            <td>{user.created_at.clone().unwrap_or_else(|| "—".to_owned())}</td>
                                            <td class="data-table__actions">
                                                <button
                                                    class="btn btn--sm"
                                                    on:click=move |_| request(toggle_action.clone())
                                                >
                                                    {if user.active { "Deactivate" } else { "Activate" }}
                                                </button>
                                                <button
                                                    class="btn btn--sm"
                                                    on:click=move |_| request(reset_action.clone())
                                                >
                                                    "Reset password"
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </tbody>
                </table>
            </div>

            <Show when=move || pending_action.get().is_some()>
                {move || {
                    pending_action
                        .get()
                        .map(|action| {
                            view! {
                                <ConfirmDialog
                                    message=action.prompt()
                                    on_confirm=on_confirm
                                    on_cancel=on_cancel
                                />
                            }
                        })
                }}
            </Show>
        </div>
    }
}
