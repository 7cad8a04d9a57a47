use crate::errors::CropGuardResult;
use crate::services::chat::stream::ChatReplyStream;
use crate::services::chat::types::ChatRequest;
use crate::services::chat::validation::validate_chat_request;
use crate::transport::HttpTransport;
use async_trait::async_trait;
use http::{HeaderMap, Method};
use std::sync::Arc;

const CHAT_PATH: &str = "/crop-chat";

/// Streaming advisor chat against `POST /crop-chat`.
#[async_trait]
pub trait ChatService: Send + Sync {
    /// Sends the conversation and returns the reply as an update stream.
    async fn send_stream(&self, request: ChatRequest) -> CropGuardResult<ChatReplyStream>;

    /// Sends the conversation and waits for the complete reply text.
    async fn send(&self, request: ChatRequest) -> CropGuardResult<String>;
}

pub struct ChatServiceImpl {
    transport: Arc<dyn HttpTransport>,
}

impl ChatServiceImpl {
    pub fn new(transport: Arc<dyn HttpTransport>) -> Self {
        Self { transport }
    }
}

#[async_trait]
impl ChatService for ChatServiceImpl {
    async fn send_stream(&self, request: ChatRequest) -> CropGuardResult<ChatReplyStream> {
        validate_chat_request(&request)?;

        tracing::debug!(
            messages = request.messages.len(),
            language = %request.language,
            "starting advisor chat stream"
        );

        let body = serde_json::to_value(&request)?;
        let mut headers = HeaderMap::new();
        headers.insert(
            http::header::ACCEPT,
            http::HeaderValue::from_static("text/event-stream"),
        );

        let bytes = self
            .transport
            .request_stream(Method::POST, CHAT_PATH, Some(body), headers)
            .await?;

        Ok(ChatReplyStream::new(bytes))
    }

    async fn send(&self, request: ChatRequest) -> CropGuardResult<String> {
        let stream = self.send_stream(request).await?;
        stream.collect_text().await
    }
}
