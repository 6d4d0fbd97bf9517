//! Paged list of stored analyses, newest first as the backend returns them.

use leptos::prelude::*;
use tracing::{debug, warn};
use wasm_bindgen_futures::spawn_local;

use crate::api::DEFAULT_PAGE_SIZE;
use crate::app::use_api_client;
use crate::model::AnalysisSummary;
use crate::report::summary_percent;
use crate::request_guard::RequestGuard;
use crate::scoring::format_score;

#[component]
pub fn HistoryPage() -> impl IntoView {
    let client = use_api_client();
    let (offset, set_offset) = signal(0u32);
    let (summaries, set_summaries) = signal::<Vec<AnalysisSummary>>(vec![]);
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);

    let guard = RequestGuard::new();
    {
        let guard = guard.clone();
        on_cleanup(move || guard.invalidate());
    }

    // Reload whenever the page offset changes; a newer page supersedes an
    // older one still in flight.
    Effect::new(move |_| {
        let current = offset.get();
        set_loading.set(true);
        set_error.set(None);
        let ticket = guard.begin();
        let guard = guard.clone();
        let client = client.clone();
        spawn_local(async move {
            let outcome = client.list_summaries(DEFAULT_PAGE_SIZE, current).await;
            if !guard.is_current(ticket) {
                debug!("Dropping stale history page at offset {}", current);
                return;
            }
            match outcome {
                Ok(page) => set_summaries.set(page),
                Err(e) => {
                    warn!("Failed to load analysis history: {}", e);
                    set_summaries.set(vec![]);
                    set_error.set(Some(e.into()));
                }
            }
            set_loading.set(false);
        });
    });

    let has_next = move || summaries.with(|s| s.len() as u32 >= DEFAULT_PAGE_SIZE);

    view! {
        <div class="page history-page">
            <h2 class="page-title">"Analysis History"</h2>

            {move || {
                if loading.get() {
                    view! { <p class="loading">"Loading analyses..."</p> }.into_any()
                } else if let Some(message) = error.get() {
                    view! { <div class="error-banner" role="alert">{message}</div> }.into_any()
                } else if summaries.with(|s| s.is_empty()) {
                    view! { <p class="empty-state">"No analyses yet."</p> }.into_any()
                } else {
                    view! {
                        <table class="history-table">
                            <thead>
                                <tr>
                                    <th>"ID"</th>
                                    <th>"Date"</th>
                                    <th>"Model"</th>
                                    <th>"Score"</th>
                                    <th>"Transcript"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {summaries.get().into_iter().map(summary_row).collect::<Vec<_>>()}
                            </tbody>
                        </table>
                    }.into_any()
                }
            }}

            <div class="pager">
                <button
                    class="btn-secondary"
                    disabled=move || offset.get() == 0 || loading.get()
                    on:click=move |_| set_offset.update(|o| *o = o.saturating_sub(DEFAULT_PAGE_SIZE))
                >
                    "Previous"
                </button>
                <span class="pager-position">
                    {move || {
                        let start = offset.get();
                        let count = summaries.with(|s| s.len()) as u32;
                        if count == 0 {
                            String::new()
                        } else {
                            format!("{}-{}", start + 1, start + count)
                        }
                    }}
                </span>
                <button
                    class="btn-secondary"
                    disabled=move || !has_next() || loading.get()
                    on:click=move |_| set_offset.update(|o| *o += DEFAULT_PAGE_SIZE)
                >
                    "Next"
                </button>
            </div>
        </div>
    }
}

fn summary_row(summary: AnalysisSummary) -> impl IntoView {
    let (percent, tier) = summary_percent(summary.percentage_score);
    let href = format!("/analyses/{}", summary.id);
    view! {
        <tr class="history-row">
            <td><a href=href>{format!("#{}", summary.id)}</a></td>
            <td>{summary.created_at_display()}</td>
            <td>{summary.model_used}</td>
            <td>
                {format!("{}/{} ", format_score(summary.overall_score), format_score(summary.max_score))}
                <span class="tier-text" style=format!("color: {}", tier.metric_color())>{percent}</span>
            </td>
            <td class="history-preview">{summary.transcript_preview}</td>
        </tr>
    }
}
