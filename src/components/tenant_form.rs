//! Modal form for registering a new tenant.

use leptos::prelude::*;

use crate::net::types::TenantRegistration;

#[component]
fn FormField(
    label: &'static str,
    placeholder: &'static str,
    value: RwSignal<String>,
    #[prop(optional)] hint: Option<&'static str>,
) -> impl IntoView {
    view! {
        <label class="dialog__label">
            {label}
            <input
                class="dialog__input"
                type="text"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
            {hint.map(|hint| view! { <small class="form-hint">{hint}</small> })}
        </label>
    }
}

/// Registration dialog. Validation runs client-side on submit; the parent
/// performs the API call and controls `pending`.
#[component]
pub fn TenantForm(
    pending: RwSignal<bool>,
    on_cancel: Callback<()>,
    on_submit: Callback<TenantRegistration>,
) -> impl IntoView {
    let name = RwSignal::new(String::new());
    let domain = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let address = RwSignal::new(String::new());
    let errors = RwSignal::new(Vec::<String>::new());

    let submit = move |_| {
        if pending.get() {
            return;
        }
        let registration = TenantRegistration {
            name: name.get().trim().to_owned(),
            domain: domain.get().trim().to_owned(),
            email: email.get().trim().to_owned(),
            phone_number: Some(phone.get().trim().to_owned()).filter(|p| !p.is_empty()),
            address: Some(address.get().trim().to_owned()).filter(|a| !a.is_empty()),
        };
        match registration.validate() {
            Ok(()) => {
                errors.set(Vec::new());
                on_submit.run(registration);
            }
            Err(messages) => errors.set(messages),
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog dialog--wide" on:click=move |ev| ev.stop_propagation()>
                <h2>"Register Tenant"</h2>
                <div class="form-row">
                    <FormField label="Company Name *" placeholder="Acme Corp" value=name/>
                    <FormField
                        label="Domain *"
                        placeholder="acme.com"
                        value=domain
                        hint="Used as the tenant's unique identifier"
                    />
                </div>
                <div class="form-row">
                    <FormField
                        label="Contact Email *"
                        placeholder="contact@acme.com"
                        value=email
                        hint="A confirmation email is sent to this address"
                    />
                    <FormField label="Phone" placeholder="(555) 555-0100" value=phone/>
                </div>
                <FormField label="Address" placeholder="123 Example St" value=address/>

                <Show when=move || !errors.get().is_empty()>
                    <ul class="form-errors">
                        {move || {
                            errors
                                .get()
                                .into_iter()
                                .map(|message| view! { <li>{message}</li> })
                                .collect::<Vec<_>>()
                        }}
                    </ul>
                </Show>

                <div class="dialog__actions">
                    <button class="btn" prop:disabled=move || pending.get() on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" prop:disabled=move || pending.get() on:click=submit>
                        {move || if pending.get() { "Registering..." } else { "Register" }}
                    </button>
                </div>
            </div>
        </div>
    }
}
