//! Aggregate dashboard: stat cards, score distribution and pipeline demo.

use leptos::prelude::*;
use tracing::{debug, info, warn};
use wasm_bindgen_futures::spawn_local;

use crate::app::use_api_client;
use crate::components::data_pipeline::DataPipeline;
use crate::components::distribution_chart::DistributionChart;
use crate::components::stat_card::StatCard;
use crate::model::{total_kpi_max, DashboardStats, Kpi};
use crate::report::{DashboardSummary, DistributionSlice};
use crate::request_guard::RequestGuard;
use crate::scoring::{format_percent_precise, format_score, percent_of};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DashboardTab {
    Overview,
    Pipeline,
    Analytics,
}

impl DashboardTab {
    const ALL: [DashboardTab; 3] = [
        DashboardTab::Overview,
        DashboardTab::Pipeline,
        DashboardTab::Analytics,
    ];

    fn label(self) -> &'static str {
        match self {
            DashboardTab::Overview => "Overview",
            DashboardTab::Pipeline => "Data Pipeline",
            DashboardTab::Analytics => "Analytics",
        }
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let client = use_api_client();
    let (stats, set_stats) = signal::<Option<DashboardStats>>(None);
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);

    let guard = RequestGuard::new();
    {
        let guard = guard.clone();
        on_cleanup(move || guard.invalidate());
    }

    // Load stats once on mount
    let ticket = guard.begin();
    spawn_local(async move {
        let outcome = client.get_dashboard_stats().await;
        if !guard.is_current(ticket) {
            debug!("Dashboard unmounted before stats arrived");
            return;
        }
        match outcome {
            Ok(loaded) => {
                info!("Loaded dashboard stats for {} analyses", loaded.total_analyses);
                set_stats.set(Some(loaded));
            }
            Err(e) => {
                warn!("Failed to load dashboard stats: {}", e);
                set_error.set(Some(e.into()));
            }
        }
        set_loading.set(false);
    });

    view! {
        <div class="page dashboard-page">
            <h2 class="page-title">"Quality Dashboard"</h2>
            {move || {
                if loading.get() {
                    view! { <p class="loading">"Loading dashboard..."</p> }.into_any()
                } else if let Some(message) = error.get() {
                    view! { <div class="error-banner" role="alert">{message}</div> }.into_any()
                } else if let Some(loaded) = stats.get() {
                    view! { <DashboardBody stats=loaded /> }.into_any()
                } else {
                    view! { <p class="empty-state">"No data available"</p> }.into_any()
                }
            }}
        </div>
    }
}

#[component]
fn DashboardBody(stats: DashboardStats) -> impl IntoView {
    let summary = DashboardSummary::from_stats(&stats);
    if !summary.consistent {
        warn!(
            "Score distribution sums to {} but total_analyses is {}",
            summary.slice_total(),
            stats.total_analyses
        );
    }
    let (tab, set_tab) = signal(DashboardTab::Overview);

    let tabs = DashboardTab::ALL
        .iter()
        .map(|&t| {
            view! {
                <button
                    class=move || if tab.get() == t { "tab active" } else { "tab" }
                    on:click=move |_| set_tab.set(t)
                >
                    {t.label()}
                </button>
            }
        })
        .collect::<Vec<_>>();

    let summary = StoredValue::new(summary);

    view! {
        <div class="tab-bar" role="tablist">{tabs}</div>
        {move || match tab.get() {
            DashboardTab::Overview => summary.with_value(|s| overview(s.clone())).into_any(),
            DashboardTab::Pipeline => pipeline_tab().into_any(),
            DashboardTab::Analytics => analytics_tab().into_any(),
        }}
    }
}

fn overview(summary: DashboardSummary) -> impl IntoView {
    let total = summary.slice_total();
    let banner_style = format!("background-color: {}", summary.tier.banner_color());
    let DashboardSummary {
        cards,
        slices,
        banner_title,
        banner_caption,
        consistent,
        ..
    } = summary;

    view! {
        <div class="stat-grid">
            {cards.into_iter().map(|card| view! { <StatCard card=card /> }).collect::<Vec<_>>()}
        </div>

        {(!consistent).then(|| view! {
            <p class="notice">
                "Score distribution does not add up to the total number of analyses."
            </p>
        })}

        <div class="dashboard-charts">
            <DistributionChart slices=slices.clone() />
            <div class="chart-card">
                <h3 class="chart-title">"Performance Overview"</h3>
                {slices.into_iter().map(|slice| performance_row(slice, total)).collect::<Vec<_>>()}
            </div>
        </div>

        <div class="quality-banner" style=banner_style>
            <h3 class="quality-banner-title">{banner_title}</h3>
            <p class="quality-banner-caption">{banner_caption}</p>
        </div>
    }
}

fn performance_row(slice: DistributionSlice, total: u64) -> impl IntoView {
    let share = percent_of(slice.count as f64, total as f64);
    view! {
        <div class="performance-row">
            <div class="performance-row-header">
                <span>{slice.bucket.label()}</span>
                <span class="performance-row-count">
                    {format!("{} ({})", slice.count, format_percent_precise(share))}
                </span>
            </div>
            <div class="progress-track">
                <div
                    class="progress-fill"
                    style=format!("width: {:.1}%; background-color: {}", share, slice.bucket.color())
                ></div>
            </div>
        </div>
    }
}

fn pipeline_tab() -> impl IntoView {
    view! {
        <DataPipeline />
        <div class="integration-grid">
            <div class="integration-card">
                <h3>"Salesforce Integration"</h3>
                <ul>
                    <li>"Cases"</li>
                    <li>"Contacts"</li>
                    <li>"Accounts"</li>
                    <li>"Service History"</li>
                </ul>
            </div>
            <div class="integration-card">
                <h3>"AI Analysis Features"</h3>
                <ul>
                    <li>"Sentiment Analysis"</li>
                    <li>"Intent Recognition"</li>
                    <li>"Compliance Checking"</li>
                    <li>"Quality Scoring"</li>
                </ul>
            </div>
        </div>
    }
}

fn analytics_tab() -> impl IntoView {
    let rows = Kpi::ALL
        .iter()
        .map(|&kpi| {
            let (name, criteria) = kpi.catalogue_entry();
            view! {
                <tr>
                    <td>{name}</td>
                    <td>{criteria}</td>
                    <td><span class="points-chip">{format!("{} pts", format_score(kpi.max_score()))}</span></td>
                </tr>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="chart-card chart-placeholder">
            <p>"Performance chart visualization coming soon..."</p>
        </div>
        <div class="chart-card">
            <h3 class="chart-title">"KPI Scoring Criteria"</h3>
            <table class="kpi-catalogue">
                <thead>
                    <tr>
                        <th>"KPI"</th>
                        <th>"Criteria"</th>
                        <th>"Max Points"</th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
            <p class="kpi-catalogue-total">
                {format!("Total: {} points", format_score(total_kpi_max()))}
            </p>
        </div>
    }
}
