use crate::errors::{
    AuthenticationError, CropGuardError, RateLimitError, ServerError, ValidationError,
};
use serde::{Deserialize, Serialize};

/// Error body the gateway returns on non-2xx responses: `{ "error": "..." }`.
#[derive(Debug, Deserialize, Serialize)]
pub struct GatewayErrorResponse {
    pub error: String,
}

pub struct ErrorMapper;

impl ErrorMapper {
    /// Maps an HTTP status code and optional gateway error body to a typed error.
    pub fn map_status_code(
        status_code: u16,
        error_response: Option<GatewayErrorResponse>,
    ) -> CropGuardError {
        let message = error_response
            .map(|r| r.error)
            .unwrap_or_else(|| format!("HTTP error: {}", status_code));

        match status_code {
            400 => CropGuardError::Validation(ValidationError::InvalidRequest(message)),
            401 => CropGuardError::Authentication(AuthenticationError::InvalidApiKey(message)),
            402 => CropGuardError::RateLimit(RateLimitError::QuotaExhausted(message)),
            403 => {
                if message.contains("permission") {
                    CropGuardError::Authentication(AuthenticationError::InsufficientPermissions(
                        message,
                    ))
                } else {
                    CropGuardError::Authentication(AuthenticationError::Unauthorized(message))
                }
            }
            429 => CropGuardError::RateLimit(RateLimitError::RateLimited {
                message,
                retry_after_secs: None,
            }),
            500 => CropGuardError::Server(ServerError::InternalError(message)),
            502 => CropGuardError::Server(ServerError::BadGateway(message)),
            503 => CropGuardError::Server(ServerError::ServiceUnavailable(message)),
            504 => CropGuardError::Server(ServerError::GatewayTimeout(message)),
            _ => CropGuardError::Request {
                status_code,
                message,
            },
        }
    }

    /// Maps a status code with response headers, picking up Retry-After for 429s.
    pub fn map_status_with_headers(
        status_code: u16,
        headers: &http::HeaderMap,
        body: &str,
    ) -> CropGuardError {
        let error_response: Option<GatewayErrorResponse> = serde_json::from_str(body).ok();
        let mut error = Self::map_status_code(status_code, error_response);

        if status_code == 429 {
            if let Some(retry_after) = Self::extract_retry_after(headers) {
                if let CropGuardError::RateLimit(RateLimitError::RateLimited {
                    ref mut retry_after_secs,
                    ..
                }) = error
                {
                    *retry_after_secs = Some(retry_after);
                }
            }
        }

        error
    }

    pub fn extract_retry_after(headers: &http::HeaderMap) -> Option<u64> {
        headers
            .get("retry-after")
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.parse().ok())
    }

    pub fn parse_error_response(body: &str) -> Option<GatewayErrorResponse> {
        serde_json::from_str(body).ok()
    }
}
