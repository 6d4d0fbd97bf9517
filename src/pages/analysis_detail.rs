use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use tracing::warn;
use wasm_bindgen_futures::spawn_local;

use crate::app::use_api_client;
use crate::components::analysis_report::AnalysisReport;
use crate::error::ApiError;
use crate::model::AnalysisResult;
use crate::request_guard::RequestGuard;

#[derive(Debug, Clone, PartialEq)]
enum DetailState {
    Loading,
    Loaded(AnalysisResult),
    Failed(String),
}

/// A stored analysis at `/analyses/:id`.
#[component]
pub fn AnalysisDetailPage() -> impl IntoView {
    let client = use_api_client();
    let params = use_params_map();
    let (state, set_state) = signal(DetailState::Loading);

    let guard = RequestGuard::new();
    {
        let guard = guard.clone();
        on_cleanup(move || guard.invalidate());
    }

    Effect::new(move |_| {
        let raw = params.with(|p| p.get("id")).unwrap_or_default();
        let Ok(id) = raw.parse::<i64>() else {
            guard.invalidate();
            set_state.set(DetailState::Failed(format!("\"{}\" is not a valid analysis id.", raw)));
            return;
        };

        set_state.set(DetailState::Loading);
        let ticket = guard.begin();
        let guard = guard.clone();
        let client = client.clone();
        spawn_local(async move {
            let outcome = client.get_analysis_detail(id).await;
            if !guard.is_current(ticket) {
                return;
            }
            match outcome {
                Ok(result) => set_state.set(DetailState::Loaded(result)),
                Err(ApiError::NotFound { id }) => {
                    set_state.set(DetailState::Failed(format!("Analysis #{} was not found.", id)));
                }
                Err(e) => {
                    warn!("Failed to load analysis {}: {}", id, e);
                    set_state.set(DetailState::Failed(e.into()));
                }
            }
        });
    });

    view! {
        <div class="page detail-page">
            <a href="/history" class="back-link">"Back to history"</a>
            {move || match state.get() {
                DetailState::Loading => view! { <p class="loading">"Loading analysis..."</p> }.into_any(),
                DetailState::Failed(message) => {
                    view! { <div class="error-banner" role="alert">{message}</div> }.into_any()
                }
                DetailState::Loaded(result) => view! { <AnalysisReport result=result /> }.into_any(),
            }}
        </div>
    }
}
