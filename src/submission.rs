//! Transcript form validation.

use crate::model::AnalysisModel;

pub const EMPTY_TRANSCRIPT: &str = "Please enter a transcript to analyze";

/// A transcript cleared for submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub transcript: String,
    pub model: AnalysisModel,
}

/// Blank drafts never reach the network. The transcript is sent as typed,
/// surrounding whitespace included.
pub fn prepare(draft: &str, model: AnalysisModel) -> Result<Submission, &'static str> {
    if draft.trim().is_empty() {
        return Err(EMPTY_TRANSCRIPT);
    }
    Ok(Submission {
        transcript: draft.to_string(),
        model,
    })
}

/// Whether the submit button should be enabled.
pub fn can_submit(draft: &str, in_flight: bool) -> bool {
    !in_flight && !draft.trim().is_empty()
}
