//! Backend connection chip and the poller that drives it.

use leptos::prelude::*;
use tracing::{debug, info, warn};
use wasm_bindgen_futures::spawn_local;

use crate::app::{use_api_client, use_api_config};
use crate::connection::{ConnectionState, ConnectionTracker, NOTIFICATION_AUTO_HIDE};
use crate::request_guard::RequestGuard;
use crate::timer::{IntervalTask, TimeoutTask};

#[component]
pub fn ConnectionStatus() -> impl IntoView {
    let config = use_api_config();
    let client = use_api_client();
    let base_url = config.base_url.clone();

    let (tracker, set_tracker) = signal(ConnectionTracker::default());
    let (version, set_version) = signal::<Option<String>>(None);
    let hide_timer = StoredValue::new_local(None::<TimeoutTask>);

    let guard = RequestGuard::new();

    let probe = {
        let guard = guard.clone();
        move || {
            if !set_tracker.try_update(|t| t.begin_probe()).unwrap_or(false) {
                debug!("Previous connection probe still running, skipping tick");
                return;
            }
            let ticket = guard.begin();
            let guard = guard.clone();
            let client = client.clone();
            spawn_local(async move {
                let outcome = client.get_dashboard_stats().await;
                if !guard.is_current(ticket) {
                    return;
                }
                set_tracker.update(|t| t.finish_probe());
                match outcome {
                    Ok(_) => {
                        let was_connected = tracker.get_untracked().state() == ConnectionState::Connected;
                        set_tracker.update(|t| t.record_success());
                        hide_timer.set_value(None);
                        if !was_connected {
                            info!("Backend reachable at {}", client.base_url());
                        }
                        if version.get_untracked().is_none() {
                            match client.service_info().await {
                                Ok(info) if guard.is_current(ticket) => set_version.set(Some(info.version)),
                                Ok(_) => {}
                                Err(e) => debug!("Service info unavailable: {}", e),
                            }
                        }
                    }
                    Err(e) => {
                        let mut next = tracker.get_untracked();
                        let raised = next.record_failure();
                        set_tracker.set(next);
                        if raised {
                            warn!("Backend unreachable: {}", e);
                            let auto_hide = TimeoutTask::start(NOTIFICATION_AUTO_HIDE, move || {
                                set_tracker.update(|t| t.dismiss());
                            });
                            match auto_hide {
                                Ok(task) => hide_timer.set_value(Some(task)),
                                Err(e) => warn!("Failed to schedule notification auto-hide: {:?}", e),
                            }
                        } else {
                            debug!("Backend still unreachable: {}", e);
                        }
                    }
                }
            });
        }
    };

    probe();
    let task = match IntervalTask::start(config.poll_interval, probe) {
        Ok(task) => Some(task),
        Err(e) => {
            warn!("Failed to schedule connection polling: {:?}", e);
            None
        }
    };
    let task = StoredValue::new_local(task);

    on_cleanup(move || {
        guard.invalidate();
        task.try_update_value(|t| {
            t.take();
        });
        hide_timer.try_update_value(|t| {
            t.take();
        });
    });

    let chip = move || {
        let state = tracker.get().state();
        state.label().map(|label| {
            let class = match state {
                ConnectionState::Connected => "connection-chip connected",
                _ => "connection-chip disconnected",
            };
            let version = version
                .get()
                .filter(|_| state == ConnectionState::Connected)
                .map(|v| view! { <span class="connection-version">{format!("v{}", v)}</span> });
            view! {
                <span class=class>
                    <span class="connection-dot"></span>
                    {label}
                    {version}
                </span>
            }
        })
    };

    view! {
        <div class="connection-status">
            {chip}
            <Show when=move || tracker.get().notification_open()>
                <div class="connection-toast" role="alert">
                    <span>
                        {format!(
                            "Cannot connect to backend server. Make sure the backend is running on {}",
                            base_url
                        )}
                    </span>
                    <button
                        class="btn-small"
                        on:click=move |_| set_tracker.update(|t| t.dismiss())
                    >
                        "Dismiss"
                    </button>
                </div>
            </Show>
        </div>
    }
}
