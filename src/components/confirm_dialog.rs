//! Modal confirmation dialog used before every mutating action.

use leptos::prelude::*;

#[component]
pub fn ConfirmDialog(
    message: String,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Confirm"</h2>
                <p class="dialog__message">{message}</p>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" on:click=move |_| on_confirm.run(())>
                        "Confirm"
                    </button>
                </div>
            </div>
        </div>
    }
}
