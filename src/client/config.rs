use crate::errors::{ConfigurationError, CropGuardResult};
use crate::types::Language;
use secrecy::{ExposeSecret, Secret};
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://gateway.cropguard.ai/v1";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);
pub const DEFAULT_MAX_CONNECTIONS: usize = 10;

/// Client configuration for the CropGuard gateway.
#[derive(Debug, Clone)]
pub struct CropGuardConfig {
    pub api_key: Secret<String>,
    pub base_url: String,
    pub language: Language,
    pub timeout: Duration,
    pub max_connections: usize,
    pub proxy: Option<String>,
    pub user_agent: String,
}

impl CropGuardConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            base_url: DEFAULT_BASE_URL.to_string(),
            language: Language::default(),
            timeout: DEFAULT_TIMEOUT,
            max_connections: DEFAULT_MAX_CONNECTIONS,
            proxy: None,
            user_agent: format!("cropguard/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    /// Reads configuration from `CROPGUARD_API_KEY` and optional
    /// `CROPGUARD_BASE_URL`.
    pub fn from_env() -> CropGuardResult<Self> {
        let api_key = std::env::var("CROPGUARD_API_KEY").map_err(|_| {
            ConfigurationError::MissingApiKey(
                "CROPGUARD_API_KEY environment variable not set".to_string(),
            )
        })?;

        let mut config = Self::new(api_key);

        if let Ok(base_url) = std::env::var("CROPGUARD_BASE_URL") {
            config.base_url = base_url;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_max_connections(mut self, max_connections: usize) -> Self {
        self.max_connections = max_connections;
        self
    }

    pub fn with_proxy(mut self, proxy: impl Into<String>) -> Self {
        self.proxy = Some(proxy.into());
        self
    }

    pub fn validate(&self) -> CropGuardResult<()> {
        if self.api_key.expose_secret().is_empty() {
            return Err(ConfigurationError::MissingApiKey(
                "gateway key must not be empty".to_string(),
            )
            .into());
        }

        url::Url::parse(&self.base_url)
            .map_err(|e| ConfigurationError::InvalidBaseUrl(e.to_string()))?;

        if self.timeout.is_zero() {
            return Err(ConfigurationError::InvalidTimeout(
                "timeout must be greater than zero".to_string(),
            )
            .into());
        }

        Ok(())
    }
}
