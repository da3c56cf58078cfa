//! Operator login page.

use leptos::prelude::*;

use crate::auth::gateway::AuthContext;

/// Login form. The submit control is disabled while a request is pending,
/// which is what prevents a second concurrent login attempt.
#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let pending = RwSignal::new(false);
    let error = RwSignal::new(Option::<String>::None);

    #[cfg(feature = "csr")]
    let navigate = leptos_router::hooks::use_navigate();

    let submit = Callback::new(move |()| {
        if pending.get() {
            return;
        }
        let email_value = email.get().trim().to_owned();
        let password_value = password.get();
        if email_value.is_empty() || password_value.is_empty() {
            error.set(Some("Email and password are required".to_owned()));
            return;
        }
        pending.set(true);
        error.set(None);

        #[cfg(feature = "csr")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let gateway = auth.get_value();
                match gateway.login(&email_value, &password_value).await {
                    Ok(_) => {
                        pending.set(false);
                        navigate("/dashboard", leptos_router::NavigateOptions::default());
                    }
                    Err(err) => {
                        pending.set(false);
                        error.set(Some(err.to_string()));
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (auth, password_value);
        }
    });

    view! {
        <div class="login-page">
            <div class="login-card card">
                <h2>"Tenant Admin"</h2>
                <p class="login-card__subtitle">"Sign in to manage tenants"</p>

                <label class="form-group">
                    "Email"
                    <input
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>

                <label class="form-group">
                    "Password"
                    <input
                        type="password"
                        placeholder="Your password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                submit.run(());
                            }
                        }
                    />
                </label>

                <Show when=move || error.get().is_some()>
                    <p class="form-error">{move || error.get().unwrap_or_default()}</p>
                </Show>

                <button
                    class="btn btn--primary btn--block"
                    prop:disabled=move || pending.get()
                    on:click=move |_| submit.run(())
                >
                    {move || if pending.get() { "Signing in..." } else { "Sign in" }}
                </button>
            </div>
        </div>
    }
}
