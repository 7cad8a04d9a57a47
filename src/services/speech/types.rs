use crate::types::Language;
use serde::{Deserialize, Serialize};

/// Request body for `POST /text-to-speech`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeechRequest {
    pub text: String,
    pub language: Language,
}

impl SpeechRequest {
    pub fn new(text: impl Into<String>, language: Language) -> Self {
        Self {
            text: text.into(),
            language,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SpeechResponse {
    pub audio_content: String,
}
