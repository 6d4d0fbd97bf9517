//! Transcript submission form and the resulting report.
//!
//! Paste a transcript or load a `.txt` file, pick a model, submit. A failed
//! submission shows an inline error and leaves the previous report in place.

use leptos::prelude::*;
use tracing::{debug, info, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};

use crate::app::use_api_client;
use crate::components::analysis_report::AnalysisReport;
use crate::model::{AnalysisModel, AnalyzeResponse};
use crate::request_guard::RequestGuard;
use crate::submission::{can_submit, prepare};

#[component]
pub fn AnalyzePage() -> impl IntoView {
    let client = use_api_client();
    let (draft, set_draft) = signal(String::new());
    let (model, set_model) = signal(AnalysisModel::default());
    let (response, set_response) = signal::<Option<AnalyzeResponse>>(None);
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    let submit_guard = RequestGuard::new();
    let file_guard = RequestGuard::new();
    {
        let submit_guard = submit_guard.clone();
        let file_guard = file_guard.clone();
        on_cleanup(move || {
            submit_guard.invalidate();
            file_guard.invalidate();
        });
    }

    let on_analyze = move |_| {
        let submission = match prepare(&draft.get_untracked(), model.get_untracked()) {
            Ok(submission) => submission,
            Err(message) => {
                set_error.set(Some(message.to_string()));
                return;
            }
        };
        set_loading.set(true);
        set_error.set(None);

        let ticket = submit_guard.begin();
        let guard = submit_guard.clone();
        let client = client.clone();
        spawn_local(async move {
            let outcome = client
                .submit_transcript(&submission.transcript, submission.model)
                .await;
            if !guard.is_current(ticket) {
                debug!("Discarding superseded analysis response");
                return;
            }
            match outcome {
                Ok(analyzed) => {
                    info!("Analysis {} complete", analyzed.analysis_id);
                    set_response.set(Some(analyzed));
                }
                Err(e) => {
                    match e.status() {
                        Some(code) => warn!("Analysis rejected with HTTP {}: {}", code, e),
                        None => warn!("Analysis failed: {}", e),
                    }
                    set_error.set(Some(e.into()));
                }
            }
            set_loading.set(false);
        });
    };

    let on_file_change = move |ev: web_sys::Event| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        else {
            return;
        };
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        // Let the same file be picked again after editing the draft.
        input.set_value("");

        let ticket = file_guard.begin();
        let guard = file_guard.clone();
        spawn_local(async move {
            let name = file.name();
            let outcome = read_file_text(file).await;
            if !guard.is_current(ticket) {
                return;
            }
            match outcome {
                Ok(text) => {
                    debug!("Loaded {} ({} chars)", name, text.chars().count());
                    set_draft.set(text);
                    set_error.set(None);
                }
                Err(e) => {
                    warn!("Failed to read {}: {}", name, e);
                    set_error.set(Some(e));
                }
            }
        });
    };

    let model_options = AnalysisModel::ALL
        .iter()
        .map(|&m| {
            view! {
                <option value=m.id() selected=move || model.get() == m>{m.label()}</option>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="page analyze-page">
            <h2 class="page-title">"Analyze Transcript"</h2>
            <p class="page-description">
                "Paste a chat transcript or upload a text file to score it against the seven quality KPIs."
            </p>

            <div class="analyze-form">
                <textarea
                    class="transcript-input"
                    rows="14"
                    placeholder="( 0 s ): Customer: Hi, I need help with my account..."
                    prop:value=move || draft.get()
                    on:input=move |ev| set_draft.set(event_target_value(&ev))
                ></textarea>
                <p class="char-count">
                    {move || format!("{} characters", draft.with(|d| d.chars().count()))}
                </p>

                <div class="form-row">
                    <label class="file-upload btn-secondary">
                        "Upload .txt"
                        <input
                            type="file"
                            accept=".txt,text/plain"
                            style="display: none"
                            on:change=on_file_change
                        />
                    </label>

                    <label class="model-select">
                        "Model"
                        <select
                            class="input"
                            on:change=move |ev| {
                                if let Some(m) = AnalysisModel::from_id(&event_target_value(&ev)) {
                                    set_model.set(m);
                                }
                            }
                        >
                            {model_options}
                        </select>
                    </label>

                    <button
                        class="btn btn-primary"
                        disabled=move || !draft.with(|d| can_submit(d, loading.get()))
                        on:click=on_analyze
                    >
                        {move || if loading.get() { "Analyzing..." } else { "Analyze Transcript" }}
                    </button>
                </div>

                {move || error.get().map(|message| view! {
                    <div class="error-banner" role="alert">{message}</div>
                })}
            </div>

            {move || response.get().map(|analyzed| view! {
                <p class="analysis-id">{format!("Analysis #{}", analyzed.analysis_id)}</p>
                <AnalysisReport result=analyzed.result />
            })}
        </div>
    }
}

async fn read_file_text(file: web_sys::File) -> Result<String, String> {
    let value = JsFuture::from(file.text())
        .await
        .map_err(|e| format!("Failed to read file: {:?}", e))?;
    value
        .as_string()
        .ok_or_else(|| "Uploaded file is not text".to_string())
}
