use crate::types::Language;
use serde::{Deserialize, Serialize};

/// Role of a chat message, serialized lowercase for the gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    System,
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.into(),
        }
    }
}

/// Request body for `POST /crop-chat`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub messages: Vec<ChatMessage>,
    pub language: Language,
    /// Optional crop analysis context the advisor answers against.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

impl ChatRequest {
    pub fn new(messages: Vec<ChatMessage>, language: Language) -> Self {
        Self {
            messages,
            language,
            context: None,
        }
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }
}

/// One increment of assistant text, paired with the full text accumulated so
/// far. `content` always equals every previous `delta` concatenated in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageUpdate {
    pub delta: String,
    pub content: String,
}
