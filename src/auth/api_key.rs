use crate::auth::AuthManager;
use crate::errors::{ConfigurationError, CropGuardResult};
use async_trait::async_trait;
use secrecy::{ExposeSecret, Secret};

/// Bearer-token credential provider backed by a gateway API key.
pub struct ApiKeyProvider {
    api_key: Secret<String>,
}

impl ApiKeyProvider {
    pub fn new(api_key: Secret<String>) -> Self {
        Self { api_key }
    }

    pub fn from_string(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
        }
    }
}

#[async_trait]
impl AuthManager for ApiKeyProvider {
    async fn authorization_header(&self) -> CropGuardResult<String> {
        self.validate_credentials()?;
        Ok(format!("Bearer {}", self.api_key.expose_secret()))
    }

    fn validate_credentials(&self) -> CropGuardResult<()> {
        let key = self.api_key.expose_secret();

        if key.is_empty() {
            return Err(ConfigurationError::MissingApiKey(
                "gateway key must not be empty".to_string(),
            )
            .into());
        }

        if key.len() < 10 {
            return Err(ConfigurationError::InvalidApiKeyFormat(
                "gateway key is too short".to_string(),
            )
            .into());
        }

        Ok(())
    }
}

impl std::fmt::Debug for ApiKeyProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiKeyProvider")
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}
