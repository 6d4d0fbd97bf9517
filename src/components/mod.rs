pub mod analysis_report;
pub mod connection_status;
pub mod data_pipeline;
pub mod distribution_chart;
pub mod kpi_metrics;
pub mod nav_bar;
pub mod score_breakdown_chart;
pub mod score_card;
pub mod stat_card;
