use leptos::prelude::*;

use crate::chart::{axis_y, bar_layout, BAR_AXIS_GUTTER, BAR_CHART_HEIGHT, BAR_CHART_WIDTH, BAR_LABEL_BAND};
use crate::report::KpiRow;
use crate::scoring::format_percent_precise;

const TICKS: [f64; 6] = [0.0, 20.0, 40.0, 60.0, 80.0, 100.0];

/// Per-KPI percentages as a vertical bar chart on a fixed 0..100% axis.
#[component]
pub fn ScoreBreakdownChart(rows: Vec<KpiRow>) -> impl IntoView {
    let bars = bar_layout(&rows);
    let plot_bottom = BAR_CHART_HEIGHT - BAR_LABEL_BAND;

    let ticks = TICKS
        .iter()
        .map(|&pct| {
            let y = format!("{:.1}", axis_y(pct));
            view! {
                <line
                    class="chart-grid"
                    x1=BAR_AXIS_GUTTER.to_string()
                    x2=BAR_CHART_WIDTH.to_string()
                    y1=y.clone()
                    y2=y.clone()
                />
                <text class="chart-axis-label" x=(BAR_AXIS_GUTTER - 6.0).to_string() y=y text-anchor="end">
                    {format!("{}%", pct)}
                </text>
            }
        })
        .collect::<Vec<_>>();

    let columns = rows
        .iter()
        .zip(bars)
        .map(|(row, bar)| {
            let label_y = plot_bottom + 14.0;
            view! {
                <rect
                    class="chart-bar"
                    x=format!("{:.1}", bar.x)
                    y=format!("{:.1}", bar.y)
                    width=format!("{:.1}", bar.width)
                    height=format!("{:.1}", bar.height)
                    fill=row.tier.metric_color()
                />
                <text
                    class="chart-value-label"
                    x=format!("{:.1}", bar.label_x)
                    y=format!("{:.1}", (bar.y - 4.0).max(10.0))
                    text-anchor="middle"
                >
                    {format_percent_precise(row.percentage)}
                </text>
                <text
                    class="chart-axis-label"
                    x=format!("{:.1}", bar.label_x)
                    y=format!("{:.1}", label_y)
                    text-anchor="end"
                    transform=format!("rotate(-45 {:.1} {:.1})", bar.label_x, label_y)
                >
                    {row.kpi.chart_label()}
                </text>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="chart-card">
            <h3 class="chart-title">"KPI Score Breakdown"</h3>
            <svg
                class="breakdown-chart"
                viewBox=format!("0 0 {} {}", BAR_CHART_WIDTH, BAR_CHART_HEIGHT)
                role="img"
                aria-label="Score percentage per KPI"
            >
                {ticks}
                {columns}
            </svg>
        </div>
    }
}
