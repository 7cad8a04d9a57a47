use crate::types::Language;
use serde::{Deserialize, Serialize};

/// Request body for `POST /analyze-crop`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisRequest {
    /// Crop photo as a data URI or bare base64 JPEG.
    pub image: String,
    pub language: Language,
}

impl AnalysisRequest {
    pub fn new(image: impl Into<String>, language: Language) -> Self {
        Self {
            image: image.into(),
            language,
        }
    }

    /// Returns the image as a data URI, prefixing bare base64 payloads.
    pub fn normalized_image(&self) -> String {
        if self.image.starts_with("data:") {
            self.image.clone()
        } else {
            format!("data:image/jpeg;base64,{}", self.image)
        }
    }
}

/// One treatment or fertilizer recommendation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Treatment {
    pub name: String,
    pub dosage: String,
    pub timing: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub safety_note: Option<String>,
}

/// Structured crop diagnosis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub name: String,
    pub crop_type: String,
    pub confidence: u8,
    pub is_healthy: bool,
    pub description: String,
    pub severity: String,
    #[serde(default)]
    pub precautions: Vec<String>,
    #[serde(default)]
    pub fertilizers: Vec<Treatment>,
    #[serde(default)]
    pub organic_treatments: Vec<Treatment>,
    #[serde(default)]
    pub chemical_treatments: Vec<Treatment>,
    #[serde(default)]
    pub preventive_measures: Vec<String>,
}

impl AnalysisReport {
    /// Conservative generic report used when the gateway answer cannot be
    /// parsed. The raw answer text is preserved as the description.
    pub fn fallback(description: String) -> Self {
        Self {
            name: "Crop Analysis".to_string(),
            crop_type: "Unknown".to_string(),
            confidence: 70,
            is_healthy: false,
            description,
            severity: "Unknown".to_string(),
            precautions: vec![
                "Consult a local agricultural expert for confirmation".to_string(),
                "Isolate affected plants if disease is suspected".to_string(),
            ],
            fertilizers: vec![Treatment {
                name: "NPK 19-19-19".to_string(),
                dosage: "5g per litre of water".to_string(),
                timing: "Every 15 days".to_string(),
                safety_note: None,
            }],
            organic_treatments: vec![Treatment {
                name: "Neem Oil".to_string(),
                dosage: "5ml per litre of water".to_string(),
                timing: "Spray every 7 days".to_string(),
                safety_note: Some("Apply in the evening to protect pollinators".to_string()),
            }],
            chemical_treatments: vec![Treatment {
                name: "Mancozeb 75% WP".to_string(),
                dosage: "2g per litre of water".to_string(),
                timing: "Spray at 10-day intervals".to_string(),
                safety_note: Some("Wear protective gear while spraying".to_string()),
            }],
            preventive_measures: vec![
                "Maintain field hygiene".to_string(),
                "Avoid waterlogging".to_string(),
            ],
        }
    }
}

/// Outcome of an analysis call: either a diagnosis or a polite refusal when
/// the photo contains no plant.
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisOutcome {
    Report(AnalysisReport),
    NotPlant { message: String },
}
