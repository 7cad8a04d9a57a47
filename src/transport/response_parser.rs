use crate::errors::{CropGuardError, CropGuardResult, ErrorMapper};
use serde_json::Value;

/// Turns raw reqwest responses into JSON values or typed errors.
pub struct ResponseParser;

impl ResponseParser {
    /// Returns the response unchanged when the status is 2xx, otherwise reads
    /// the body and maps status plus `{ "error": ... }` payload to an error.
    pub async fn check_status(response: reqwest::Response) -> CropGuardResult<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let headers = response.headers().clone();
        let body = response.text().await.unwrap_or_default();
        Err(ErrorMapper::map_status_with_headers(
            status.as_u16(),
            &headers,
            &body,
        ))
    }

    pub async fn parse_json(response: reqwest::Response) -> CropGuardResult<Value> {
        let response = Self::check_status(response).await?;
        let body = response.text().await?;
        serde_json::from_str(&body)
            .map_err(|e| CropGuardError::Deserialization(format!("invalid JSON response: {}", e)))
    }
}
