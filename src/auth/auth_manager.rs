use crate::errors::CropGuardResult;
use async_trait::async_trait;

/// Supplies and validates the credential attached to every gateway request.
#[async_trait]
pub trait AuthManager: Send + Sync {
    /// Returns the value of the `Authorization` header.
    async fn authorization_header(&self) -> CropGuardResult<String>;

    /// Validates the stored credential without making a network call.
    fn validate_credentials(&self) -> CropGuardResult<()>;
}
