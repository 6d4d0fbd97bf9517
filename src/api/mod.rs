//! HTTP client for the transcript scoring backend.
//!
//! Every call is a single request/response. Failures come back as
//! [`ApiError`] immediately; nothing here retries.

pub mod decode;

use reqwest::RequestBuilder;
use tracing::{debug, info, warn};

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::model::{
    AnalysisModel, AnalysisResult, AnalysisSummary, AnalyzeRequest, AnalyzeResponse,
    DashboardStats, ServiceInfo, SummaryPage,
};

pub const DEFAULT_PAGE_SIZE: u32 = 50;

#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            base_url: config.base_url.clone(),
            http: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub fn summaries_url(&self, limit: u32, offset: u32) -> String {
        self.url(&format!("/api/analyses?limit={}&offset={}", limit, offset))
    }

    pub fn detail_url(&self, id: i64) -> String {
        self.url(&format!("/api/analyses/{}", id))
    }

    /// Send and collect `(status, body)`. Only transport failures error here.
    async fn fetch(&self, request: RequestBuilder) -> Result<(u16, String), ApiError> {
        let response = request.send().await.map_err(|e| {
            warn!("Request to {} failed: {}", self.base_url, e);
            ApiError::NetworkUnavailable(e.to_string())
        })?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::NetworkUnavailable(e.to_string()))?;
        debug!("Response {} ({} bytes)", status, body.len());
        Ok((status, body))
    }

    /// Submit a transcript for scoring. Callers reject blank transcripts first.
    pub async fn submit_transcript(
        &self,
        transcript: &str,
        model: AnalysisModel,
    ) -> Result<AnalyzeResponse, ApiError> {
        info!(
            "Submitting transcript ({} chars) with model {}",
            transcript.chars().count(),
            model.id()
        );
        let body = AnalyzeRequest {
            transcript: transcript.to_string(),
            model: model.id().to_string(),
        };
        let (status, text) = self
            .fetch(self.http.post(self.url("/api/analyze")).json(&body))
            .await?;
        let response = decode::decode_analyze(status, text)?;
        info!(
            "Analysis {} scored {}%",
            response.analysis_id, response.result.overall_scores.percentage_score
        );
        Ok(response)
    }

    /// Stored analyses in backend order.
    pub async fn list_summaries(
        &self,
        limit: u32,
        offset: u32,
    ) -> Result<Vec<AnalysisSummary>, ApiError> {
        let (status, text) = self
            .fetch(self.http.get(self.summaries_url(limit, offset)))
            .await?;
        let body = decode::check_status(status, text)?;
        let page: SummaryPage = decode::decode_json(&body)?;
        Ok(page.analyses)
    }

    pub async fn get_analysis_detail(&self, id: i64) -> Result<AnalysisResult, ApiError> {
        let (status, text) = self.fetch(self.http.get(self.detail_url(id))).await?;
        decode::decode_detail(id, status, text)
    }

    pub async fn get_dashboard_stats(&self) -> Result<DashboardStats, ApiError> {
        let (status, text) = self
            .fetch(self.http.get(self.url("/api/dashboard/stats")))
            .await?;
        let body = decode::check_status(status, text)?;
        decode::decode_json(&body)
    }

    /// Liveness probe on `GET /`.
    pub async fn service_info(&self) -> Result<ServiceInfo, ApiError> {
        let (status, text) = self.fetch(self.http.get(self.url("/"))).await?;
        let body = decode::check_status(status, text)?;
        let info: ServiceInfo = decode::decode_json(&body)?;
        debug!("Backend {}: {}", info.version, info.message);
        Ok(info)
    }
}
