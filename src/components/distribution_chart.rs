use leptos::prelude::*;

use crate::chart::doughnut_segments;
use crate::report::DistributionSlice;

const SIZE: f64 = 220.0;
const OUTER: f64 = 100.0;
const INNER: f64 = 62.0;

/// Doughnut of the score-band counts with a legend underneath.
#[component]
pub fn DistributionChart(slices: Vec<DistributionSlice>) -> impl IntoView {
    let centre = SIZE / 2.0;
    let segments = doughnut_segments(&slices, centre, centre, INNER, OUTER);
    let total: u64 = slices.iter().map(|s| s.count).sum();

    let arcs = segments
        .into_iter()
        .map(|segment| view! {
            <path class="doughnut-segment" d=segment.path fill=segment.slice.bucket.color()/>
        })
        .collect::<Vec<_>>();

    let legend = slices
        .into_iter()
        .map(|slice| view! {
            <li class="legend-item">
                <span class="legend-swatch" style=format!("background-color: {}", slice.bucket.color())></span>
                <span class="legend-label">{slice.bucket.label()}</span>
                <span class="legend-count">{slice.count}</span>
            </li>
        })
        .collect::<Vec<_>>();

    view! {
        <div class="chart-card">
            <h3 class="chart-title">"Score Distribution"</h3>
            <svg
                class="doughnut-chart"
                viewBox=format!("0 0 {} {}", SIZE, SIZE)
                role="img"
                aria-label="Analyses per score band"
            >
                {arcs}
                <text class="doughnut-total" x=centre.to_string() y=(centre + 8.0).to_string() text-anchor="middle">
                    {total}
                </text>
            </svg>
            <ul class="chart-legend">{legend}</ul>
        </div>
    }
}
