//! Simulated data-pipeline widget for the dashboard.

use leptos::prelude::*;
use tracing::warn;

use crate::pipeline::{PipelineSimulation, StageStatus, STAGES};
use crate::timer::TimeoutTask;

#[component]
pub fn DataPipeline() -> impl IntoView {
    let (sim, set_sim) = signal(PipelineSimulation::default());
    let timer = StoredValue::new_local(None::<TimeoutTask>);

    // Re-arm a one-shot timer for every state change; replacing the stored
    // task clears the previous timeout.
    Effect::new(move |_| {
        let current = sim.get();
        let next = if current.is_running() {
            match TimeoutTask::start(current.next_delay(), move || set_sim.update(|s| s.tick())) {
                Ok(task) => Some(task),
                Err(e) => {
                    warn!("Failed to schedule pipeline step: {:?}", e);
                    None
                }
            }
        } else {
            None
        };
        timer.set_value(next);
    });

    on_cleanup(move || {
        timer.try_update_value(|t| {
            t.take();
        });
    });

    let stages = move || {
        let current = sim.get();
        STAGES
            .iter()
            .enumerate()
            .map(|(i, stage)| {
                let status = current.status(i);
                let class = match status {
                    StageStatus::Completed => "pipeline-stage completed",
                    StageStatus::Processing => "pipeline-stage processing",
                    StageStatus::Pending => "pipeline-stage pending",
                };
                view! {
                    <li class=class>
                        <span class="pipeline-step">{i + 1}</span>
                        <div class="pipeline-stage-body">
                            <p class="pipeline-stage-label">{stage.label}</p>
                            <p class="pipeline-stage-description">{stage.description}</p>
                        </div>
                        <span class="pipeline-status">{status.label()}</span>
                    </li>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <div class="pipeline-card">
            <style>{include_str!("data_pipeline.css")}</style>
            <div class="pipeline-header">
                <h3 class="pipeline-title">"Data Pipeline"</h3>
                <span class="pipeline-badge">"Simulation"</span>
            </div>
            <p class="pipeline-note">
                "Illustrative only. Stages advance on fixed timers and do not reflect backend processing."
            </p>

            <div class="progress-track">
                <div
                    class="progress-fill pipeline-progress"
                    style=move || format!("width: {:.0}%", sim.get().progress_percent())
                ></div>
            </div>

            <ol class="pipeline-stages">{stages}</ol>

            <Show when=move || sim.get().is_complete()>
                <p class="pipeline-complete">"Pipeline complete. Restarting shortly..."</p>
            </Show>

            <div class="pipeline-controls">
                <button class="btn-secondary" on:click=move |_| set_sim.update(|s| s.toggle())>
                    {move || if sim.get().is_running() { "Pause" } else { "Resume" }}
                </button>
                <button class="btn-secondary" on:click=move |_| set_sim.update(|s| s.reset())>
                    "Reset"
                </button>
            </div>
        </div>
    }
}
