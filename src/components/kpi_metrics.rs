use leptos::prelude::*;

use crate::components::score_card::ScoreCard;
use crate::report::KpiRow;

/// Grid of the seven KPI score cards, in catalogue order.
#[component]
pub fn KpiMetrics(rows: Vec<KpiRow>) -> impl IntoView {
    view! {
        <div class="kpi-grid">
            {rows.into_iter().map(|row| view! {
                <ScoreCard
                    title=row.kpi.title()
                    score=row.score
                    max_score=row.max_score
                    help_text=row.kpi.help_text().to_string()
                />
            }).collect::<Vec<_>>()}
        </div>
    }
}
