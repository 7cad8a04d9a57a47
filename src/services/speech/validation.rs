use crate::errors::{CropGuardResult, ValidationError};
use crate::services::speech::types::SpeechRequest;

pub const MAX_SPEECH_TEXT_LEN: usize = 5000;

pub fn validate_speech_request(request: &SpeechRequest) -> CropGuardResult<()> {
    if request.text.trim().is_empty() {
        return Err(ValidationError::MissingRequiredField("text".to_string()).into());
    }

    if request.text.chars().count() > MAX_SPEECH_TEXT_LEN {
        return Err(ValidationError::ValueOutOfRange {
            field: "text".to_string(),
            min: "1".to_string(),
            max: MAX_SPEECH_TEXT_LEN.to_string(),
            value: request.text.chars().count().to_string(),
        }
        .into());
    }

    Ok(())
}
