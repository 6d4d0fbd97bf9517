use leptos::prelude::*;

use crate::report::StatCardView;

#[component]
pub fn StatCard(card: StatCardView) -> impl IntoView {
    let StatCardView { title, value, subtitle, trend } = card;
    view! {
        <div class="stat-card">
            <p class="stat-card-title">{title}</p>
            <p class="stat-card-value">{value}</p>
            {subtitle.map(|text| view! { <p class="stat-card-subtitle">{text}</p> })}
            {trend.map(|(label, color)| view! {
                <span class="stat-card-chip" style=format!("background-color: {}", color)>{label}</span>
            })}
        </div>
    }
}
