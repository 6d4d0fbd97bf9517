//! Browser dashboard for scoring customer-support chat transcripts.
//!
//! The UI submits transcripts to the scoring backend, renders per-KPI results
//! and shows aggregate statistics. Everything outside `app`, `components`,
//! `pages` and `timer` is plain logic and runs natively under `cargo test`.

pub mod api;
pub mod app;
pub mod chart;
pub mod components;
pub mod config;
pub mod connection;
pub mod error;
pub mod logging;
pub mod model;
pub mod pages;
pub mod pipeline;
pub mod report;
pub mod request_guard;
pub mod scoring;
pub mod submission;
pub mod timer;

/// Install logging and mount the app on `<body>`.
pub fn start() {
    logging::init();
    tracing::info!("Starting QA dashboard");
    leptos::mount::mount_to_body(app::App);
}
