use crate::auth::{ApiKeyProvider, AuthManager};
use crate::client::config::CropGuardConfig;
use crate::errors::CropGuardResult;
use crate::services::analysis::{AnalysisService, AnalysisServiceImpl};
use crate::services::chat::{ChatService, ChatServiceImpl};
use crate::services::speech::{SpeechService, SpeechServiceImpl};
use crate::transport::{HttpTransport, ReqwestTransport};
use std::sync::Arc;

/// Entry point to the gateway APIs. Cheap to clone; all services share one
/// transport.
pub trait CropGuardClient: Send + Sync {
    fn analysis(&self) -> Arc<dyn AnalysisService>;
    fn chat(&self) -> Arc<dyn ChatService>;
    fn speech(&self) -> Arc<dyn SpeechService>;
    fn config(&self) -> &CropGuardConfig;
}

pub struct CropGuardClientImpl {
    config: CropGuardConfig,
    analysis: Arc<dyn AnalysisService>,
    chat: Arc<dyn ChatService>,
    speech: Arc<dyn SpeechService>,
}

impl CropGuardClientImpl {
    pub fn new(config: CropGuardConfig) -> CropGuardResult<Self> {
        config.validate()?;

        let auth: Arc<dyn AuthManager> = Arc::new(ApiKeyProvider::new(config.api_key.clone()));
        let transport: Arc<dyn HttpTransport> =
            Arc::new(ReqwestTransport::new(config.clone(), auth)?);

        Ok(Self::with_transport(config, transport))
    }

    /// Builds a client over an existing transport. Used by tests to inject
    /// mock transports.
    pub fn with_transport(config: CropGuardConfig, transport: Arc<dyn HttpTransport>) -> Self {
        let analysis = Arc::new(AnalysisServiceImpl::new(transport.clone()));
        let chat = Arc::new(ChatServiceImpl::new(transport.clone()));
        let speech = Arc::new(SpeechServiceImpl::new(transport));

        Self {
            config,
            analysis,
            chat,
            speech,
        }
    }
}

impl CropGuardClient for CropGuardClientImpl {
    fn analysis(&self) -> Arc<dyn AnalysisService> {
        self.analysis.clone()
    }

    fn chat(&self) -> Arc<dyn ChatService> {
        self.chat.clone()
    }

    fn speech(&self) -> Arc<dyn SpeechService> {
        self.speech.clone()
    }

    fn config(&self) -> &CropGuardConfig {
        &self.config
    }
}
