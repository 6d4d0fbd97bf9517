//! Display models derived from API payloads.
//!
//! Components render these directly, so everything a user reads (labels,
//! formatted numbers, colours) is decided here and can be tested without a
//! browser.

use crate::model::{AnalysisResult, DashboardStats, Kpi};
use crate::scoring::{
    format_percent_precise, format_percent_rounded, format_score, percent_of, Tier,
};

pub const NO_REASONING: &str = "No reasoning provided.";

/// One KPI as shown on a score card and a chart bar.
#[derive(Debug, Clone, PartialEq)]
pub struct KpiRow {
    pub kpi: Kpi,
    pub score: f64,
    pub max_score: f64,
    pub percentage: f64,
    pub tier: Tier,
}

impl KpiRow {
    pub fn new(kpi: Kpi, score: f64) -> Self {
        let max_score = kpi.max_score();
        let percentage = percent_of(score, max_score);
        Self {
            kpi,
            score,
            max_score,
            percentage,
            tier: Tier::of(percentage),
        }
    }
}

/// Expandable per-KPI reasoning block.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailSection {
    pub kpi: Kpi,
    pub title: &'static str,
    pub reasoning: String,
    /// Only present when the backend sent a score for this KPI.
    pub score: Option<String>,
    pub findings: Vec<(String, String)>,
}

impl DetailSection {
    /// `Score: N`, only when the backend sent a score.
    pub fn score_line(&self) -> Option<String> {
        self.score.as_ref().map(|points| format!("Score: {}", points))
    }
}

/// Everything the analysis report renders for one result.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisReportView {
    pub headline_percent: String,
    pub points: String,
    pub overall_fill: f64,
    pub kpis: Vec<KpiRow>,
    pub details: Vec<DetailSection>,
    pub warning: Option<String>,
    pub masked_transcript: Option<String>,
}

impl AnalysisReportView {
    pub fn from_result(result: &AnalysisResult) -> Self {
        let overall = &result.overall_scores;

        let kpis = Kpi::ALL
            .iter()
            .map(|&kpi| KpiRow::new(kpi, result.kpi_score(kpi)))
            .collect();

        let details = Kpi::ALL
            .iter()
            .map(|&kpi| {
                let analysis = result.sub_analysis(kpi);
                DetailSection {
                    kpi,
                    title: kpi.detail_title(),
                    reasoning: analysis
                        .and_then(|a| a.reasoning_text())
                        .unwrap_or(NO_REASONING)
                        .to_string(),
                    score: analysis.and_then(|a| a.score).map(format_score),
                    findings: analysis.map(|a| a.findings()).unwrap_or_default(),
                }
            })
            .collect();

        Self {
            headline_percent: format_percent_rounded(overall.percentage_score),
            points: format!(
                "{}/{} Points",
                format_score(overall.total_score),
                format_score(overall.max_possible_score)
            ),
            overall_fill: crate::scoring::bar_fill(overall.percentage_score),
            kpis,
            details,
            warning: result.reported_error().map(str::to_string),
            masked_transcript: result.masked_transcript().map(str::to_string),
        }
    }
}

/// Score bucket on the dashboard distribution chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bucket {
    Excellent,
    Good,
    Average,
    Poor,
}

impl Bucket {
    pub const ALL: [Bucket; 4] = [Bucket::Excellent, Bucket::Good, Bucket::Average, Bucket::Poor];

    pub fn label(self) -> &'static str {
        match self {
            Bucket::Excellent => "Excellent",
            Bucket::Good => "Good",
            Bucket::Average => "Average",
            Bucket::Poor => "Poor",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Bucket::Excellent => "#34c759",
            Bucket::Good => "#ff9500",
            Bucket::Average => "#ffcc00",
            Bucket::Poor => "#ff3b30",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistributionSlice {
    pub bucket: Bucket,
    pub count: u64,
}

/// One of the four summary cards on the overview tab.
#[derive(Debug, Clone, PartialEq)]
pub struct StatCardView {
    pub title: &'static str,
    pub value: String,
    pub subtitle: Option<&'static str>,
    pub trend: Option<(String, &'static str)>,
}

/// Dashboard overview derived from server statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSummary {
    pub cards: [StatCardView; 4],
    pub slices: Vec<DistributionSlice>,
    pub tier: Tier,
    pub banner_title: String,
    pub banner_caption: String,
    pub consistent: bool,
}

/// More than this many analyses earns the "Growing" chip.
const GROWING_AFTER: u64 = 10;

impl DashboardSummary {
    pub fn from_stats(stats: &DashboardStats) -> Self {
        let tier = Tier::of(stats.average_score);
        let average = format!("{}%", format_score(stats.average_score));
        let dist = &stats.score_distribution;

        let cards = [
            StatCardView {
                title: "Total Analyses",
                value: stats.total_analyses.to_string(),
                subtitle: None,
                trend: (stats.total_analyses > GROWING_AFTER)
                    .then(|| ("Growing".to_string(), Tier::Excellent.banner_color())),
            },
            StatCardView {
                title: "Average Score",
                value: average.clone(),
                subtitle: None,
                trend: Some((tier.label().to_string(), tier.banner_color())),
            },
            StatCardView {
                title: "Recent Activity",
                value: stats.recent_analyses.to_string(),
                subtitle: Some("Last 7 days"),
                trend: None,
            },
            StatCardView {
                title: "High Performers",
                value: dist.excellent.to_string(),
                subtitle: Some("\u{2265} 80% score"),
                trend: None,
            },
        ];

        let slices = Bucket::ALL
            .iter()
            .map(|&bucket| DistributionSlice {
                bucket,
                count: match bucket {
                    Bucket::Excellent => dist.excellent,
                    Bucket::Good => dist.good,
                    Bucket::Average => dist.average,
                    Bucket::Poor => dist.poor,
                },
            })
            .collect();

        Self {
            cards,
            slices,
            tier,
            banner_title: format!("Overall Quality: {}", tier.label()),
            banner_caption: format!(
                "Based on {} analyses with {} average score",
                stats.total_analyses, average
            ),
            consistent: stats.is_consistent(),
        }
    }

    pub fn slice_total(&self) -> u64 {
        self.slices.iter().map(|s| s.count).sum()
    }
}

/// Percentage text for a summary row in the history list.
pub fn summary_percent(pct: f64) -> (String, Tier) {
    (format_percent_precise(pct), Tier::of(pct))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{OverallScores, ScoreDistribution, SubAnalysis};
    use std::collections::BTreeMap;

    fn result_with(scores: [Option<f64>; 7]) -> AnalysisResult {
        let sub = |s: Option<f64>| {
            s.map(|score| SubAnalysis {
                score: Some(score),
                reasoning: Some(format!("scored {}", score)),
                details: BTreeMap::new(),
            })
        };
        AnalysisResult {
            overall_scores: OverallScores {
                total_score: 35.0,
                max_possible_score: 50.0,
                percentage_score: 70.0,
            },
            first_response_analysis: sub(scores[0]),
            security_verification_analysis: sub(scores[1]),
            customer_needs_analysis: sub(scores[2]),
            interaction_analysis: sub(scores[3]),
            time_respect_analysis: sub(scores[4]),
            needs_identification_analysis: sub(scores[5]),
            transfer_analysis: sub(scores[6]),
            extensions: BTreeMap::new(),
        }
    }

    #[test]
    fn test_kpi_rows_follow_fixed_order() {
        let view = AnalysisReportView::from_result(&result_with([Some(5.0); 7]));
        let order: Vec<Kpi> = view.kpis.iter().map(|r| r.kpi).collect();
        assert_eq!(order, Kpi::ALL.to_vec());
    }

    #[test]
    fn test_kpi_row_tiers() {
        let view = AnalysisReportView::from_result(&result_with([
            Some(5.0),
            Some(6.0),
            Some(2.0),
            Some(4.0),
            Some(8.0),
            Some(3.0),
            Some(10.0),
        ]));
        let tiers: Vec<Tier> = view.kpis.iter().map(|r| r.tier).collect();
        assert_eq!(
            tiers,
            vec![
                Tier::Excellent,
                Tier::Good,
                Tier::NeedsImprovement,
                Tier::Excellent,
                Tier::Excellent,
                Tier::Good,
                Tier::Excellent,
            ]
        );
        assert_eq!(view.kpis[1].percentage, 60.0);
    }

    #[test]
    fn test_absent_kpi_detail_uses_placeholder() {
        let view = AnalysisReportView::from_result(&result_with([
            Some(5.0),
            None,
            Some(4.0),
            Some(4.0),
            Some(7.0),
            Some(3.0),
            Some(8.0),
        ]));
        let security = &view.details[1];
        assert_eq!(security.kpi, Kpi::SecurityVerification);
        assert_eq!(security.reasoning, NO_REASONING);
        assert_eq!(security.score, None);
        assert_eq!(security.score_line(), None);
        assert_eq!(view.kpis[1].score, 0.0);
        assert_eq!(view.kpis[1].max_score, 10.0);
    }

    #[test]
    fn test_zero_score_detail_shows_score() {
        let view = AnalysisReportView::from_result(&result_with([Some(0.0); 7]));
        assert_eq!(view.details[0].score.as_deref(), Some("0"));
        assert_eq!(view.details[0].score_line().as_deref(), Some("Score: 0"));
        assert_eq!(view.details[0].reasoning, "scored 0");
    }

    #[test]
    fn test_headline_is_rounded_backend_value() {
        let mut result = result_with([Some(5.0); 7]);
        result.overall_scores = OverallScores {
            total_score: 35.0,
            max_possible_score: 45.0,
            percentage_score: 77.8,
        };
        let view = AnalysisReportView::from_result(&result);
        assert_eq!(view.headline_percent, "78%");
        assert_eq!(view.points, "35/45 Points");
    }

    #[test]
    fn test_dashboard_summary_tiers() {
        let stats = |avg: f64| DashboardStats {
            total_analyses: 4,
            average_score: avg,
            recent_analyses: 1,
            score_distribution: ScoreDistribution {
                excellent: 1,
                good: 1,
                average: 1,
                poor: 1,
            },
        };
        assert_eq!(DashboardSummary::from_stats(&stats(59.5)).tier, Tier::NeedsImprovement);
        assert_eq!(DashboardSummary::from_stats(&stats(60.0)).tier, Tier::Good);
        let summary = DashboardSummary::from_stats(&stats(72.35));
        assert_eq!(summary.cards[1].value, "72.35%");
        assert_eq!(summary.banner_title, "Overall Quality: Good");
        assert!(summary.cards[0].trend.is_none());
    }

    #[test]
    fn test_inconsistent_distribution_flagged() {
        let summary = DashboardSummary::from_stats(&DashboardStats {
            total_analyses: 9,
            average_score: 50.0,
            recent_analyses: 0,
            score_distribution: ScoreDistribution {
                excellent: 1,
                good: 1,
                average: 1,
                poor: 1,
            },
        });
        assert!(!summary.consistent);
        assert_eq!(summary.slice_total(), 4);
    }

    #[test]
    fn test_summary_percent() {
        assert_eq!(summary_percent(66.666), ("66.7%".to_string(), Tier::Good));
    }
}
