use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum ConfigurationError {
    #[error("Missing gateway key: {0}")]
    MissingApiKey(String),

    #[error("Invalid gateway key format: {0}")]
    InvalidApiKeyFormat(String),

    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("Invalid timeout: {0}")]
    InvalidTimeout(String),

    #[error("Missing required configuration: {0}")]
    MissingConfiguration(String),
}

#[derive(Error, Debug, Clone)]
pub enum AuthenticationError {
    #[error("Invalid gateway key: {0}")]
    InvalidApiKey(String),

    #[error("Insufficient permissions: {0}")]
    InsufficientPermissions(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),
}

#[derive(Error, Debug, Clone)]
pub enum ValidationError {
    #[error("Invalid parameter: {parameter} - {reason}")]
    InvalidParameter { parameter: String, reason: String },

    #[error("Missing required field: {0}")]
    MissingRequiredField(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Value out of range: {field} must be between {min} and {max}, got {value}")]
    ValueOutOfRange {
        field: String,
        min: String,
        max: String,
        value: String,
    },
}

#[derive(Error, Debug, Clone)]
pub enum RateLimitError {
    #[error("Rate limit exceeded: {message}")]
    RateLimited {
        message: String,
        retry_after_secs: Option<u64>,
    },

    #[error("AI usage limit reached: {0}")]
    QuotaExhausted(String),
}

impl RateLimitError {
    pub fn retry_after(&self) -> Option<u64> {
        match self {
            RateLimitError::RateLimited {
                retry_after_secs, ..
            } => *retry_after_secs,
            RateLimitError::QuotaExhausted(_) => None,
        }
    }
}

#[derive(Error, Debug, Clone)]
pub enum NetworkError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),
}

#[derive(Error, Debug, Clone)]
pub enum ServerError {
    #[error("Internal server error: {0}")]
    InternalError(String),

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Bad gateway: {0}")]
    BadGateway(String),

    #[error("Gateway timeout: {0}")]
    GatewayTimeout(String),
}

/// Classified reasons a camera session can fail to open or capture.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CameraError {
    #[error("Camera permission denied: {0}")]
    PermissionDenied(String),

    #[error("No camera device found: {0}")]
    NotFound(String),

    #[error("Camera device is busy: {0}")]
    Busy(String),

    #[error("Camera constraints cannot be satisfied: {0}")]
    Overconstrained(String),

    #[error("Camera requires a secure context: {0}")]
    InsecureContext(String),

    #[error("Camera produced no frame within {0}ms")]
    FrameTimeout(u64),

    #[error("Capture failed: {0}")]
    CaptureFailed(String),

    #[error("Camera is not ready: {0}")]
    NotReady(String),

    #[error("Camera error: {0}")]
    Other(String),
}
