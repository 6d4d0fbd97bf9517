//! Analysis and dashboard payloads shared by every view.
//!
//! These mirror the JSON the scoring backend produces. The seven KPI
//! sub-analyses are explicit optional fields; anything else the backend adds
//! lands in `extensions` so decoding never trips over new keys.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::warn;

/// Aggregate score for a whole transcript.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct OverallScores {
    pub total_score: f64,
    pub max_possible_score: f64,
    /// Computed by the backend. Rendered as-is, never recomputed here.
    pub percentage_score: f64,
}

/// One scored KPI with the model's justification.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct SubAnalysis {
    #[serde(default, deserialize_with = "lenient_score")]
    pub score: Option<f64>,
    #[serde(default, deserialize_with = "lenient_reasoning")]
    pub reasoning: Option<String>,
    /// Extra attributes (`max_score`, `identified_reason`, ...).
    #[serde(flatten)]
    pub details: BTreeMap<String, Value>,
}

impl SubAnalysis {
    /// Reasoning text if the backend supplied a non-blank one.
    pub fn reasoning_text(&self) -> Option<&str> {
        self.reasoning
            .as_deref()
            .filter(|r| !r.trim().is_empty())
    }

    /// Extra attributes rendered as `(key, value)` display pairs.
    /// `max_score` is skipped since the KPI table already fixes it.
    pub fn findings(&self) -> Vec<(String, String)> {
        self.details
            .iter()
            .filter(|(key, _)| key.as_str() != "max_score")
            .map(|(key, value)| {
                let shown = match value {
                    Value::String(s) => s.clone(),
                    Value::Null => "--".to_string(),
                    other => other.to_string(),
                };
                (key.replace('_', " "), shown)
            })
            .collect()
    }
}

// The model's JSON is merged into the result unchecked, so any section may
// arrive with the wrong shape. A bad section is treated as absent rather than
// failing the whole result.

fn lenient_sub_analysis<'de, D>(deserializer: D) -> Result<Option<SubAnalysis>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match value {
        Value::Null => Ok(None),
        Value::Object(_) => match serde_json::from_value(value) {
            Ok(analysis) => Ok(Some(analysis)),
            Err(e) => {
                warn!("Ignoring undecodable sub-analysis: {}", e);
                Ok(None)
            }
        },
        other => {
            warn!("Ignoring sub-analysis that is not an object: {}", other);
            Ok(None)
        }
    }
}

/// Numbers and numeric strings; anything else is no score.
fn lenient_score<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    })
}

/// Strings pass through, lists are joined one item per line, other scalars
/// are stringified.
fn lenient_reasoning<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => None,
        Value::String(s) => Some(s),
        Value::Array(items) => Some(
            items
                .iter()
                .map(|item| match item {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                })
                .collect::<Vec<_>>()
                .join("\n"),
        ),
        other => Some(other.to_string()),
    })
}

/// Full result of scoring one transcript.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AnalysisResult {
    pub overall_scores: OverallScores,
    #[serde(default, deserialize_with = "lenient_sub_analysis")]
    pub first_response_analysis: Option<SubAnalysis>,
    #[serde(default, deserialize_with = "lenient_sub_analysis")]
    pub security_verification_analysis: Option<SubAnalysis>,
    #[serde(default, deserialize_with = "lenient_sub_analysis")]
    pub customer_needs_analysis: Option<SubAnalysis>,
    #[serde(default, deserialize_with = "lenient_sub_analysis")]
    pub interaction_analysis: Option<SubAnalysis>,
    #[serde(default, deserialize_with = "lenient_sub_analysis")]
    pub time_respect_analysis: Option<SubAnalysis>,
    #[serde(default, deserialize_with = "lenient_sub_analysis")]
    pub needs_identification_analysis: Option<SubAnalysis>,
    #[serde(default, deserialize_with = "lenient_sub_analysis")]
    pub transfer_analysis: Option<SubAnalysis>,
    /// Keys this client does not model (pre-check data, masked transcript, ...).
    #[serde(flatten)]
    pub extensions: BTreeMap<String, Value>,
}

impl AnalysisResult {
    pub fn sub_analysis(&self, kpi: Kpi) -> Option<&SubAnalysis> {
        match kpi {
            Kpi::FirstResponse => self.first_response_analysis.as_ref(),
            Kpi::SecurityVerification => self.security_verification_analysis.as_ref(),
            Kpi::CustomerNeeds => self.customer_needs_analysis.as_ref(),
            Kpi::InteractionResponsibility => self.interaction_analysis.as_ref(),
            Kpi::TimeRespect => self.time_respect_analysis.as_ref(),
            Kpi::NeedsIdentification => self.needs_identification_analysis.as_ref(),
            Kpi::VoiceServices => self.transfer_analysis.as_ref(),
        }
    }

    /// KPIs with no usable sub-analysis, in display order.
    pub fn missing_kpis(&self) -> Vec<Kpi> {
        Kpi::ALL
            .into_iter()
            .filter(|&kpi| self.sub_analysis(kpi).is_none())
            .collect()
    }

    /// Score used for arithmetic and charts: absent counts as zero.
    pub fn kpi_score(&self, kpi: Kpi) -> f64 {
        self.sub_analysis(kpi)
            .and_then(|a| a.score)
            .unwrap_or(0.0)
    }

    /// Error text the backend attached when the model call failed.
    pub fn reported_error(&self) -> Option<&str> {
        self.extensions
            .get("error")
            .and_then(Value::as_str)
            .filter(|e| !e.trim().is_empty())
    }

    pub fn masked_transcript(&self) -> Option<&str> {
        self.extensions
            .get("masked_transcript")
            .and_then(Value::as_str)
            .filter(|t| !t.is_empty())
    }
}

/// The seven fixed KPIs, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kpi {
    FirstResponse,
    SecurityVerification,
    CustomerNeeds,
    InteractionResponsibility,
    TimeRespect,
    NeedsIdentification,
    VoiceServices,
}

impl Kpi {
    pub const ALL: [Kpi; 7] = [
        Kpi::FirstResponse,
        Kpi::SecurityVerification,
        Kpi::CustomerNeeds,
        Kpi::InteractionResponsibility,
        Kpi::TimeRespect,
        Kpi::NeedsIdentification,
        Kpi::VoiceServices,
    ];

    /// JSON key of the sub-analysis.
    pub fn key(self) -> &'static str {
        match self {
            Kpi::FirstResponse => "first_response_analysis",
            Kpi::SecurityVerification => "security_verification_analysis",
            Kpi::CustomerNeeds => "customer_needs_analysis",
            Kpi::InteractionResponsibility => "interaction_analysis",
            Kpi::TimeRespect => "time_respect_analysis",
            Kpi::NeedsIdentification => "needs_identification_analysis",
            Kpi::VoiceServices => "transfer_analysis",
        }
    }

    pub fn max_score(self) -> f64 {
        match self {
            Kpi::FirstResponse
            | Kpi::CustomerNeeds
            | Kpi::InteractionResponsibility
            | Kpi::NeedsIdentification => 5.0,
            Kpi::SecurityVerification | Kpi::TimeRespect | Kpi::VoiceServices => 10.0,
        }
    }

    /// Card title.
    pub fn title(self) -> &'static str {
        match self {
            Kpi::FirstResponse => "First Response",
            Kpi::SecurityVerification => "Security Verification",
            Kpi::CustomerNeeds => "Customer Needs",
            Kpi::InteractionResponsibility => "Interaction Responsibility",
            Kpi::TimeRespect => "Time Respect",
            Kpi::NeedsIdentification => "Needs Identification",
            Kpi::VoiceServices => "Voice Services Question",
        }
    }

    /// Shorter axis label for the breakdown chart.
    pub fn chart_label(self) -> &'static str {
        match self {
            Kpi::InteractionResponsibility => "Interaction",
            Kpi::VoiceServices => "Voice Services",
            other => other.title(),
        }
    }

    pub fn help_text(self) -> &'static str {
        match self {
            Kpi::FirstResponse => "Within 2 min + CBR request",
            Kpi::SecurityVerification => "Asked combo + provided all + aligned",
            Kpi::CustomerNeeds => "Identified reason + restated with confirmation",
            Kpi::InteractionResponsibility => "Proper language + responsibility + expectation",
            Kpi::TimeRespect => "Check-ins + no idle",
            Kpi::NeedsIdentification => "No redundant asks",
            Kpi::VoiceServices => "Asked about voice services",
        }
    }

    /// Heading of the expandable reasoning section.
    pub fn detail_title(self) -> &'static str {
        match self {
            Kpi::FirstResponse => "First Response Analysis",
            Kpi::SecurityVerification => "Security Verification Analysis",
            Kpi::CustomerNeeds => "Customer Expectations and Needs Analysis",
            Kpi::InteractionResponsibility => "Customer Interaction and Accepting Responsibility",
            Kpi::TimeRespect => "Respectful of Customer's Time",
            Kpi::NeedsIdentification => "Identify Contact's Needs and Avoid Redundant Asks",
            Kpi::VoiceServices => "Voice Services Question Analysis",
        }
    }

    /// Name and scoring criteria shown in the analytics catalogue.
    pub fn catalogue_entry(self) -> (&'static str, &'static str) {
        match self {
            Kpi::FirstResponse => ("First Response", "Within 2 minutes + CBR"),
            Kpi::SecurityVerification => ("Security Verification", "3+ elements + customer provided"),
            Kpi::CustomerNeeds => ("Customer Needs", "Identified + confirmed"),
            Kpi::InteractionResponsibility => ("Interaction Quality", "Language + ownership"),
            Kpi::TimeRespect => ("Time Efficiency", "Check-ins + no delays"),
            Kpi::NeedsIdentification => ("Needs Identification", "No redundant questions"),
            Kpi::VoiceServices => ("Service Discovery", "Voice services asked"),
        }
    }
}

/// Sum of all KPI maxima.
pub fn total_kpi_max() -> f64 {
    Kpi::ALL.iter().map(|k| k.max_score()).sum()
}

/// Counts of stored analyses per score bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ScoreDistribution {
    pub excellent: u64,
    pub good: u64,
    pub average: u64,
    pub poor: u64,
}

impl ScoreDistribution {
    pub fn total(&self) -> u64 {
        self.excellent + self.good + self.average + self.poor
    }
}

/// Aggregate over every stored analysis.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DashboardStats {
    pub total_analyses: u64,
    pub average_score: f64,
    pub recent_analyses: u64,
    pub score_distribution: ScoreDistribution,
}

impl DashboardStats {
    /// The four buckets must partition every analysis.
    pub fn is_consistent(&self) -> bool {
        self.score_distribution.total() == self.total_analyses
    }
}

/// List-row projection of a stored analysis.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AnalysisSummary {
    pub id: i64,
    pub transcript_preview: String,
    pub model_used: String,
    pub overall_score: f64,
    pub max_score: f64,
    pub percentage_score: f64,
    pub created_at: String,
}

impl AnalysisSummary {
    /// `created_at` as `YYYY-MM-DD HH:MM`, or verbatim when unparseable.
    pub fn created_at_display(&self) -> String {
        format_timestamp(&self.created_at)
    }
}

/// Accepts RFC 3339 and SQLite's `YYYY-MM-DD HH:MM:SS[.fff]`.
pub fn format_timestamp(raw: &str) -> String {
    const DISPLAY: &str = "%Y-%m-%d %H:%M";
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format(DISPLAY).to_string();
    }
    for pattern in ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, pattern) {
            return dt.format(DISPLAY).to_string();
        }
    }
    raw.to_string()
}

/// Page of summaries as returned by `GET /api/analyses`.
#[derive(Debug, Clone, Deserialize)]
pub struct SummaryPage {
    pub analyses: Vec<AnalysisSummary>,
}

/// Body of a successful `POST /api/analyze`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AnalyzeResponse {
    pub analysis_id: i64,
    pub result: AnalysisResult,
}

/// Request body for `POST /api/analyze`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyzeRequest {
    pub transcript: String,
    pub model: String,
}

/// Scoring models the backend accepts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AnalysisModel {
    #[default]
    Gpt4o,
    Gpt4oMini,
}

impl AnalysisModel {
    pub const ALL: [AnalysisModel; 2] = [AnalysisModel::Gpt4o, AnalysisModel::Gpt4oMini];

    /// Identifier sent on the wire.
    pub fn id(self) -> &'static str {
        match self {
            AnalysisModel::Gpt4o => "gpt-4o",
            AnalysisModel::Gpt4oMini => "gpt-4o-mini",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AnalysisModel::Gpt4o => "GPT-4o",
            AnalysisModel::Gpt4oMini => "GPT-4o Mini",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.id() == id)
    }
}

/// Liveness payload from `GET /`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ServiceInfo {
    pub message: String,
    pub version: String,
}
