use crate::errors::categories::{
    AuthenticationError, CameraError, ConfigurationError, NetworkError, RateLimitError,
    ServerError, ValidationError,
};
use thiserror::Error;

pub type CropGuardResult<T> = Result<T, CropGuardError>;

#[derive(Error, Debug)]
pub enum CropGuardError {
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("Authentication error: {0}")]
    Authentication(#[from] AuthenticationError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Rate limit error: {0}")]
    RateLimit(#[from] RateLimitError),

    #[error("Network error: {0}")]
    Network(#[from] NetworkError),

    #[error("Server error: {0}")]
    Server(#[from] ServerError),

    #[error("Camera error: {0}")]
    Camera(#[from] CameraError),

    #[error("Request error: {status_code} - {message}")]
    Request { status_code: u16, message: String },

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("Timeout error: operation timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("Stream error: {0}")]
    Stream(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl CropGuardError {
    /// Whether a caller-owned retry policy could reasonably retry the failed
    /// operation. The client itself never retries.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            CropGuardError::RateLimit(RateLimitError::RateLimited { .. })
                | CropGuardError::Network(_)
                | CropGuardError::Server(ServerError::ServiceUnavailable(_))
                | CropGuardError::Server(ServerError::InternalError(_))
                | CropGuardError::Timeout { .. }
        )
    }

    pub fn is_authentication_error(&self) -> bool {
        matches!(self, CropGuardError::Authentication(_))
    }

    pub fn is_rate_limit_error(&self) -> bool {
        matches!(self, CropGuardError::RateLimit(_))
    }

    pub fn is_camera_error(&self) -> bool {
        matches!(self, CropGuardError::Camera(_))
    }

    pub fn status_code(&self) -> Option<u16> {
        match self {
            CropGuardError::Request { status_code, .. } => Some(*status_code),
            CropGuardError::Authentication(_) => Some(401),
            CropGuardError::RateLimit(RateLimitError::QuotaExhausted(_)) => Some(402),
            CropGuardError::RateLimit(RateLimitError::RateLimited { .. }) => Some(429),
            CropGuardError::Server(ServerError::InternalError(_)) => Some(500),
            CropGuardError::Server(ServerError::BadGateway(_)) => Some(502),
            CropGuardError::Server(ServerError::ServiceUnavailable(_)) => Some(503),
            CropGuardError::Server(ServerError::GatewayTimeout(_)) => Some(504),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for CropGuardError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            CropGuardError::Timeout { timeout_ms: 60_000 }
        } else if err.is_connect() {
            CropGuardError::Network(NetworkError::ConnectionFailed(err.to_string()))
        } else {
            CropGuardError::Network(NetworkError::RequestFailed(err.to_string()))
        }
    }
}

impl From<serde_json::Error> for CropGuardError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_data() {
            CropGuardError::Deserialization(err.to_string())
        } else {
            CropGuardError::Serialization(err.to_string())
        }
    }
}

impl From<url::ParseError> for CropGuardError {
    fn from(err: url::ParseError) -> Self {
        CropGuardError::Configuration(ConfigurationError::InvalidBaseUrl(err.to_string()))
    }
}
