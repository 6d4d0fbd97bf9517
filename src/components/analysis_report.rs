//! Full report for one analysis result.
//!
//! Shared by the analyze page (fresh result) and the detail page (stored
//! result). Layout top to bottom: backend warning, overall score, KPI cards,
//! breakdown chart, per-KPI reasoning, masked transcript.

use leptos::prelude::*;

use crate::components::kpi_metrics::KpiMetrics;
use crate::components::score_breakdown_chart::ScoreBreakdownChart;
use crate::model::AnalysisResult;
use crate::report::{AnalysisReportView, DetailSection};
use crate::scoring::Tier;

#[component]
pub fn AnalysisReport(result: AnalysisResult) -> impl IntoView {
    let report = AnalysisReportView::from_result(&result);
    let tier = Tier::of(report.overall_fill);
    let overall_style = format!(
        "width: {:.1}%; background-color: {}",
        report.overall_fill,
        tier.metric_color()
    );

    view! {
        <div class="analysis-report">
            <style>{include_str!("report.css")}</style>

            {report.warning.map(|message| view! {
                <div class="report-warning" role="alert">
                    <strong>"Analysis warning: "</strong>
                    {message}
                </div>
            })}

            <section class="overall-card">
                <h2 class="overall-title">"Overall Score"</h2>
                <p class=format!("overall-percent tier-{}", tier.slug())>{report.headline_percent}</p>
                <p class="overall-points">{report.points}</p>
                <div class="progress-track progress-track-large">
                    <div class="progress-fill" style=overall_style></div>
                </div>
            </section>

            <section class="report-section">
                <h2 class="section-title">"KPI Scores"</h2>
                <KpiMetrics rows=report.kpis.clone() />
            </section>

            <section class="report-section">
                <ScoreBreakdownChart rows=report.kpis />
            </section>

            <section class="report-section">
                <h2 class="section-title">"Detailed Analysis"</h2>
                {report.details.into_iter().map(detail_block).collect::<Vec<_>>()}
            </section>

            {report.masked_transcript.map(|text| view! {
                <details class="report-detail masked-transcript">
                    <summary>"Masked Transcript"</summary>
                    <pre class="transcript-text">{text}</pre>
                </details>
            })}
        </div>
    }
}

fn detail_block(section: DetailSection) -> impl IntoView {
    let score_line = section
        .score_line()
        .map(|line| view! { <p class="detail-score">{line}</p> });
    let DetailSection { title, reasoning, findings, .. } = section;
    let findings = (!findings.is_empty()).then(|| {
        view! {
            <dl class="detail-findings">
                {findings.into_iter().map(|(name, value)| view! {
                    <dt>{name}</dt>
                    <dd>{value}</dd>
                }).collect::<Vec<_>>()}
            </dl>
        }
    });

    view! {
        <details class="report-detail">
            <summary>{title}</summary>
            <div class="detail-body">
                {score_line}
                <p class="detail-reasoning">{reasoning}</p>
                {findings}
            </div>
        </details>
    }
}
