use crate::errors::CropGuardResult;
use crate::services::analysis::types::{AnalysisOutcome, AnalysisReport, AnalysisRequest};
use crate::services::analysis::validation::validate_analysis_request;
use crate::transport::HttpTransport;
use async_trait::async_trait;
use http::{HeaderMap, Method};
use serde_json::json;
use std::sync::Arc;

const ANALYZE_PATH: &str = "/analyze-crop";

/// Crop photo diagnosis against `POST /analyze-crop`.
#[async_trait]
pub trait AnalysisService: Send + Sync {
    async fn analyze(&self, request: AnalysisRequest) -> CropGuardResult<AnalysisOutcome>;
}

pub struct AnalysisServiceImpl {
    transport: Arc<dyn HttpTransport>,
}

impl AnalysisServiceImpl {
    pub fn new(transport: Arc<dyn HttpTransport>) -> Self {
        Self { transport }
    }
}

#[async_trait]
impl AnalysisService for AnalysisServiceImpl {
    async fn analyze(&self, request: AnalysisRequest) -> CropGuardResult<AnalysisOutcome> {
        validate_analysis_request(&request)?;

        tracing::debug!(language = %request.language, "analyzing crop image");

        let body = json!({
            "image": request.normalized_image(),
            "language": request.language,
        });

        let response = self
            .transport
            .request_json(Method::POST, ANALYZE_PATH, Some(body), HeaderMap::new())
            .await?;

        if response.get("isPlant").and_then(|v| v.as_bool()) == Some(false) {
            let message = response
                .get("notPlantMessage")
                .and_then(|v| v.as_str())
                .unwrap_or("The image does not appear to contain a plant.")
                .to_string();
            return Ok(AnalysisOutcome::NotPlant { message });
        }

        match serde_json::from_value::<AnalysisReport>(response.clone()) {
            Ok(report) => Ok(AnalysisOutcome::Report(report)),
            Err(e) => {
                // A malformed diagnosis still reaches the caller: keep the raw
                // answer as the description of a generic report.
                tracing::warn!(error = %e, "analysis response did not match the report shape");
                let description = response
                    .get("description")
                    .and_then(|v| v.as_str())
                    .map(str::to_string)
                    .unwrap_or_else(|| response.to_string());
                Ok(AnalysisOutcome::Report(AnalysisReport::fallback(
                    description,
                )))
            }
        }
    }
}
