use crate::client::client_impl::CropGuardClientImpl;
use crate::client::config::CropGuardConfig;
use crate::errors::CropGuardResult;
use crate::types::Language;
use std::time::Duration;

/// Builder for [`CropGuardClientImpl`].
#[derive(Debug, Default)]
pub struct CropGuardClientBuilder {
    api_key: Option<String>,
    base_url: Option<String>,
    language: Option<Language>,
    timeout: Option<Duration>,
    proxy: Option<String>,
}

impl CropGuardClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn language(mut self, language: Language) -> Self {
        self.language = Some(language);
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn proxy(mut self, proxy: impl Into<String>) -> Self {
        self.proxy = Some(proxy.into());
        self
    }

    pub fn build(self) -> CropGuardResult<CropGuardClientImpl> {
        let mut config = match self.api_key {
            Some(api_key) => CropGuardConfig::new(api_key),
            None => CropGuardConfig::from_env()?,
        };

        if let Some(base_url) = self.base_url {
            config = config.with_base_url(base_url);
        }
        if let Some(language) = self.language {
            config = config.with_language(language);
        }
        if let Some(timeout) = self.timeout {
            config = config.with_timeout(timeout);
        }
        if let Some(proxy) = self.proxy {
            config = config.with_proxy(proxy);
        }

        CropGuardClientImpl::new(config)
    }
}

/// Builds a client with default settings from an API key.
pub fn create_client(api_key: impl Into<String>) -> CropGuardResult<CropGuardClientImpl> {
    CropGuardClientBuilder::new().api_key(api_key).build()
}

/// Builds a client from `CROPGUARD_API_KEY` and friends.
pub fn create_client_from_env() -> CropGuardResult<CropGuardClientImpl> {
    CropGuardClientBuilder::new().build()
}
