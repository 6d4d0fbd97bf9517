use leptos::prelude::*;

use crate::scoring::{bar_fill, format_percent_precise, format_score, percent_of, Tier};

/// Score for a single KPI: raw points, a tier-coloured bar and the percentage.
#[component]
pub fn ScoreCard(
    #[prop(into)] title: String,
    score: f64,
    max_score: f64,
    #[prop(optional, into)] help_text: Option<String>,
) -> impl IntoView {
    let percentage = percent_of(score, max_score);
    let tier = Tier::of(percentage);
    let fill_style = format!(
        "width: {:.1}%; background-color: {}",
        bar_fill(percentage),
        tier.metric_color()
    );

    view! {
        <div class="score-card">
            <div class="score-card-header">
                <h3 class="score-card-title">{title}</h3>
                {help_text.map(|text| view! {
                    <span class="score-card-help" title=text>"?"</span>
                })}
            </div>
            <div class="score-card-value">
                <span class="score-card-score">{format_score(score)}</span>
                <span class="score-card-max">{format!("/{}", format_score(max_score))}</span>
            </div>
            <div class="progress-track">
                <div class=format!("progress-fill tier-{}", tier.slug()) style=fill_style></div>
            </div>
            <p class="score-card-percent">{format_percent_precise(percentage)}</p>
        </div>
    }
}
