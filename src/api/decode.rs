//! Turning `(status, body)` pairs into typed results.
//!
//! Kept apart from the transport so the error contract can be checked
//! without a live backend.

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::ApiError;
use crate::model::{AnalysisResult, AnalyzeResponse};

/// Pass 2xx bodies through, everything else becomes `RequestFailed`.
pub fn check_status(status: u16, body: String) -> Result<String, ApiError> {
    if (200..300).contains(&status) {
        Ok(body)
    } else {
        Err(ApiError::RequestFailed { status, body })
    }
}

pub fn decode_json<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::MalformedResponse(e.to_string()))
}

/// `POST /api/analyze` must carry `result.overall_scores`.
pub fn decode_analyze(status: u16, body: String) -> Result<AnalyzeResponse, ApiError> {
    let body = check_status(status, body)?;
    let value: Value = decode_json(&body)?;

    let has_scores = value
        .get("result")
        .and_then(|r| r.get("overall_scores"))
        .is_some_and(Value::is_object);
    if !has_scores {
        warn!("Unexpected analyze response structure: {}", body);
        return Err(ApiError::MalformedResponse(
            "missing result.overall_scores".to_string(),
        ));
    }

    let response: AnalyzeResponse = serde_json::from_value(value)
        .map_err(|e| ApiError::MalformedResponse(e.to_string()))?;
    log_missing_sections(&response.result);
    Ok(response)
}

/// `GET /api/analyses/{id}`; a 404 means the record does not exist.
pub fn decode_detail(id: i64, status: u16, body: String) -> Result<AnalysisResult, ApiError> {
    if status == 404 {
        return Err(ApiError::NotFound { id });
    }
    let body = check_status(status, body)?;
    let result: AnalysisResult = decode_json(&body)?;
    log_missing_sections(&result);
    Ok(result)
}

fn log_missing_sections(result: &AnalysisResult) {
    let missing = result.missing_kpis();
    if !missing.is_empty() {
        let keys: Vec<&str> = missing.into_iter().map(|kpi| kpi.key()).collect();
        debug!("Result has no usable {}", keys.join(", "));
    }
}
