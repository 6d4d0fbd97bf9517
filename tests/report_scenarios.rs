use std::fs;
use std::path::PathBuf;

use qa_dashboard::api::decode::{check_status, decode_analyze, decode_detail, decode_json};
use qa_dashboard::chart::{bar_layout, doughnut_segments};
use qa_dashboard::error::ApiError;
use qa_dashboard::model::{AnalysisModel, AnalysisResult, DashboardStats, Kpi, SummaryPage};
use qa_dashboard::report::{AnalysisReportView, DashboardSummary, NO_REASONING};
use qa_dashboard::scoring::Tier;
use qa_dashboard::submission::{prepare, EMPTY_TRANSCRIPT};

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn fixture(name: &str) -> String {
    fs::read_to_string(fixture_path(name)).expect("Failed to read fixture")
}

fn load_result(name: &str) -> AnalysisResult {
    decode_detail(1, 200, fixture(name)).expect("Fixture should decode")
}

#[test]
fn test_dashboard_summary_from_stats() {
    let stats: DashboardStats = decode_json(&fixture("dashboard_stats.json")).unwrap();
    let summary = DashboardSummary::from_stats(&stats);

    assert_eq!(summary.cards[0].title, "Total Analyses");
    assert_eq!(summary.cards[0].value, "20");
    assert_eq!(summary.cards[0].trend.as_ref().map(|t| t.0.as_str()), Some("Growing"));

    assert_eq!(summary.cards[1].value, "85%");
    assert_eq!(summary.cards[1].trend.as_ref().map(|t| t.0.as_str()), Some("Excellent"));
    assert_eq!(summary.cards[2].value, "3");
    assert_eq!(summary.cards[3].value, "12");

    assert_eq!(summary.tier, Tier::Excellent);
    assert_eq!(summary.banner_title, "Overall Quality: Excellent");
    assert_eq!(summary.banner_caption, "Based on 20 analyses with 85% average score");
    assert!(summary.consistent);

    assert_eq!(summary.slices.len(), 4);
    assert_eq!(summary.slice_total(), 20);
    let segments = doughnut_segments(&summary.slices, 110.0, 110.0, 62.0, 100.0);
    let covered: f64 = segments.iter().map(|s| s.fraction).sum();
    assert!((covered - 1.0).abs() < 1e-9);
}

#[test]
fn test_inconsistent_distribution_is_flagged() {
    let mut stats: DashboardStats = decode_json(&fixture("dashboard_stats.json")).unwrap();
    stats.total_analyses = 25;
    let summary = DashboardSummary::from_stats(&stats);
    assert!(!summary.consistent);
    assert_eq!(summary.slice_total(), 20);
}

#[test]
fn test_full_result_report() {
    let result = load_result("analysis_result.json");
    let report = AnalysisReportView::from_result(&result);

    assert_eq!(report.headline_percent, "70%");
    assert_eq!(report.points, "35/50 Points");
    assert_eq!(report.kpis.len(), 7);
    assert_eq!(bar_layout(&report.kpis).len(), 7);

    let kpi_total: f64 = report.kpis.iter().map(|row| row.score).sum();
    assert_eq!(kpi_total, 35.0);

    let order: Vec<Kpi> = report.kpis.iter().map(|row| row.kpi).collect();
    assert_eq!(order, Kpi::ALL.to_vec());

    let security = &report.kpis[1];
    assert_eq!(security.score, 8.0);
    assert_eq!(security.max_score, 10.0);
    assert_eq!(security.tier, Tier::Excellent);

    let voice = &report.kpis[6];
    assert_eq!(voice.percentage, 50.0);
    assert_eq!(voice.tier, Tier::NeedsImprovement);

    assert!(report.details.iter().all(|d| d.score.is_some()));
    assert!(report.details[0]
        .findings
        .iter()
        .any(|(name, value)| name == "response time seconds" && value == "84"));
    assert!(report.warning.is_none());
    assert!(report
        .masked_transcript
        .as_deref()
        .is_some_and(|t| t.contains("[NAME]")));
}

#[test]
fn test_missing_sub_analysis_defaults() {
    let result = load_result("analysis_missing_security.json");
    let report = AnalysisReportView::from_result(&result);

    let security = &report.kpis[1];
    assert_eq!(security.kpi, Kpi::SecurityVerification);
    assert_eq!(security.score, 0.0);
    assert_eq!(security.max_score, 10.0);

    let detail = &report.details[1];
    assert_eq!(detail.title, "Security Verification Analysis");
    assert_eq!(detail.reasoning, NO_REASONING);
    assert_eq!(detail.score, None);

    // Whitespace-only reasoning counts as missing.
    assert_eq!(report.details[2].reasoning, NO_REASONING);
    // Score without reasoning keeps its score line.
    assert_eq!(report.details[4].reasoning, NO_REASONING);
    assert_eq!(report.details[4].score.as_deref(), Some("6"));

    assert_eq!(
        report.warning.as_deref(),
        Some("Security verification step could not be parsed")
    );
    assert_eq!(report.headline_percent, "54%");
}

#[test]
fn test_stats_server_error_message() {
    let err = check_status(500, "Internal Server Error".to_string()).unwrap_err();
    assert_eq!(
        err,
        ApiError::RequestFailed {
            status: 500,
            body: "Internal Server Error".to_string()
        }
    );
    let banner: String = err.into();
    assert_eq!(banner, "API error (500): Internal Server Error");
}

#[test]
fn test_analyze_response_contract() {
    let response = decode_analyze(200, fixture("analyze_response.json")).unwrap();
    assert_eq!(response.analysis_id, 42);
    assert_eq!(response.result.overall_scores.total_score, 35.0);

    let err = decode_analyze(200, fixture("analyze_missing_scores.json")).unwrap_err();
    assert!(matches!(err, ApiError::MalformedResponse(_)));

    let err = decode_analyze(422, r#"{"detail":"model not supported"}"#.to_string()).unwrap_err();
    assert_eq!(err.status(), Some(422));
}

#[test]
fn test_detail_not_found() {
    let err = decode_detail(99, 404, r#"{"detail":"Analysis not found"}"#.to_string()).unwrap_err();
    assert_eq!(err, ApiError::NotFound { id: 99 });
}

#[test]
fn test_summaries_keep_backend_order() {
    let page: SummaryPage = decode_json(&fixture("summaries.json")).unwrap();
    let ids: Vec<i64> = page.analyses.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![42, 17]);
    assert_eq!(page.analyses[0].created_at_display(), "2024-05-14 09:31");
    assert_eq!(page.analyses[1].created_at_display(), "2024-05-13 16:02");
}

#[test]
fn test_blank_transcript_never_submitted() {
    assert_eq!(prepare("  \n ", AnalysisModel::Gpt4o), Err(EMPTY_TRANSCRIPT));
    assert!(prepare("( 0 s ): Agent: Hi", AnalysisModel::default()).is_ok());
}

#[test]
fn test_misshapen_sections_still_render() {
    let result = load_result("analysis_misshapen_sections.json");
    let report = AnalysisReportView::from_result(&result);

    assert_eq!(report.headline_percent, "60%");
    assert_eq!(report.kpis.len(), 7);

    // String sections count as absent.
    assert_eq!(report.kpis[5].score, 0.0);
    assert_eq!(report.kpis[6].score, 0.0);
    assert_eq!(report.details[5].reasoning, NO_REASONING);
    assert_eq!(report.details[6].score_line(), None);

    // List reasoning is kept, one item per line.
    assert_eq!(report.details[0].reasoning, "Greeted fast\nAsked CBR");
    assert_eq!(report.details[0].score_line().as_deref(), Some("Score: 5"));

    assert_eq!(
        result.missing_kpis(),
        vec![Kpi::NeedsIdentification, Kpi::VoiceServices]
    );
    assert!(report
        .warning
        .as_deref()
        .is_some_and(|w| w.starts_with("Error parsing model output")));
}
