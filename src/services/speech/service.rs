use crate::errors::{CropGuardError, CropGuardResult};
use crate::services::speech::types::{SpeechRequest, SpeechResponse};
use crate::services::speech::validation::validate_speech_request;
use crate::transport::HttpTransport;
use async_trait::async_trait;
use base64::Engine;
use bytes::Bytes;
use http::{HeaderMap, Method};
use std::sync::Arc;

const SPEECH_PATH: &str = "/text-to-speech";

/// Text-to-speech synthesis against `POST /text-to-speech`.
#[async_trait]
pub trait SpeechService: Send + Sync {
    /// Synthesizes the text and returns decoded audio bytes.
    async fn synthesize(&self, request: SpeechRequest) -> CropGuardResult<Bytes>;
}

pub struct SpeechServiceImpl {
    transport: Arc<dyn HttpTransport>,
}

impl SpeechServiceImpl {
    pub fn new(transport: Arc<dyn HttpTransport>) -> Self {
        Self { transport }
    }
}

#[async_trait]
impl SpeechService for SpeechServiceImpl {
    async fn synthesize(&self, request: SpeechRequest) -> CropGuardResult<Bytes> {
        validate_speech_request(&request)?;

        tracing::debug!(
            chars = request.text.chars().count(),
            language = %request.language,
            "synthesizing speech"
        );

        let body = serde_json::to_value(&request)?;
        let response = self
            .transport
            .request_json(Method::POST, SPEECH_PATH, Some(body), HeaderMap::new())
            .await?;

        let response: SpeechResponse = serde_json::from_value(response)?;
        let audio = base64::engine::general_purpose::STANDARD
            .decode(response.audio_content)
            .map_err(|e| {
                CropGuardError::Deserialization(format!("invalid base64 audio content: {}", e))
            })?;

        Ok(Bytes::from(audio))
    }
}
