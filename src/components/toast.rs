//! Toast host rendering active notifications, top-right.

use leptos::prelude::*;

use crate::state::toast::{ToastLevel, ToastState};

/// Push a toast and schedule its auto-dismiss.
pub fn notify(toasts: RwSignal<ToastState>, level: ToastLevel, message: impl Into<String>) {
    let mut id = 0;
    toasts.update(|state| id = state.push(level, message));

    #[cfg(feature = "csr")]
    {
        let duration = std::time::Duration::from_millis(u64::from(level.default_duration_ms()));
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(duration).await;
            toasts.update(|state| state.dismiss(id));
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = id;
    }
}

/// Fixed container listing the active toasts with manual dismiss buttons.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-container">
            {move || {
                toasts
                    .get()
                    .toasts
                    .into_iter()
                    .map(|toast| {
                        let id = toast.id;
                        view! {
                            <div class=toast.level.class()>
                                <span class="toast__icon">{toast.level.icon()}</span>
                                <span class="toast__message">{toast.message}</span>
                                <button
                                    class="toast__close"
                                    on:click=move |_| toasts.update(|state| state.dismiss(id))
                                >
                                    "✖"
                                </button>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
