use crate::errors::{CropGuardResult, ValidationError};
use crate::services::analysis::types::AnalysisRequest;

pub fn validate_analysis_request(request: &AnalysisRequest) -> CropGuardResult<()> {
    if request.image.trim().is_empty() {
        return Err(ValidationError::MissingRequiredField("image".to_string()).into());
    }
    Ok(())
}
