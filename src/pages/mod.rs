pub mod analysis_detail;
pub mod analyze;
pub mod dashboard;
pub mod history;
