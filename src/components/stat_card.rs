//! Dashboard counter card.

use leptos::prelude::*;

#[component]
pub fn StatCard(label: &'static str, value: u64) -> impl IntoView {
    view! {
        <div class="stat-card">
            <span class="stat-card__value">{value}</span>
            <span class="stat-card__label">{label}</span>
        </div>
    }
}
