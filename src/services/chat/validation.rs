use crate::errors::{CropGuardResult, ValidationError};
use crate::services::chat::types::ChatRequest;

pub fn validate_chat_request(request: &ChatRequest) -> CropGuardResult<()> {
    if request.messages.is_empty() {
        return Err(ValidationError::MissingRequiredField("messages".to_string()).into());
    }

    if request.messages.iter().all(|m| m.content.trim().is_empty()) {
        return Err(ValidationError::InvalidParameter {
            parameter: "messages".to_string(),
            reason: "every message is empty".to_string(),
        }
        .into());
    }

    if let Some(context) = &request.context {
        if context.trim().is_empty() {
            return Err(ValidationError::InvalidParameter {
                parameter: "context".to_string(),
                reason: "context must not be blank when provided".to_string(),
            }
            .into());
        }
    }

    Ok(())
}
