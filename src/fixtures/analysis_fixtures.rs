use serde_json::{json, Value};

/// A healthy-crop report as the gateway returns it.
pub fn healthy_report() -> Value {
    json!({
        "isPlant": true,
        "name": "Tomato - Healthy",
        "cropType": "Tomato",
        "confidence": 94,
        "isHealthy": true,
        "description": "The plant shows vigorous growth with no visible signs of disease.",
        "severity": "None",
        "precautions": [
            "Maintain regular watering schedule",
            "Monitor for early signs of pests"
        ],
        "fertilizers": [
            {
                "name": "NPK 19-19-19",
                "dosage": "5g per litre of water",
                "timing": "Every 15 days"
            }
        ],
        "organicTreatments": [],
        "chemicalTreatments": [],
        "preventiveMeasures": [
            "Ensure good air circulation between plants"
        ]
    })
}

/// A diseased-crop report with treatments in every category.
pub fn blight_report() -> Value {
    json!({
        "isPlant": true,
        "name": "Tomato - Early Blight",
        "cropType": "Tomato",
        "confidence": 87,
        "isHealthy": false,
        "description": "Concentric brown rings on lower leaves indicate early blight caused by Alternaria solani.",
        "severity": "Moderate",
        "precautions": [
            "Remove and destroy affected leaves",
            "Avoid overhead irrigation"
        ],
        "fertilizers": [
            {
                "name": "NPK 19-19-19",
                "dosage": "5g per litre of water",
                "timing": "Every 15 days"
            }
        ],
        "organicTreatments": [
            {
                "name": "Neem Oil",
                "dosage": "5ml per litre of water",
                "timing": "Spray every 7 days in the evening",
                "safetyNote": "Safe for beneficial insects when applied in the evening"
            }
        ],
        "chemicalTreatments": [
            {
                "name": "Mancozeb 75% WP",
                "dosage": "2g per litre of water",
                "timing": "Spray at 10-day intervals",
                "safetyNote": "Wear protective gear; observe a 7-day pre-harvest interval"
            }
        ],
        "preventiveMeasures": [
            "Rotate crops each season",
            "Use disease-free seed"
        ]
    })
}

/// The gateway's answer when the image contains no plant.
pub fn not_plant_response() -> Value {
    json!({
        "isPlant": false,
        "notPlantMessage": "The image does not appear to contain a plant. Please take a clear photo of the crop."
    })
}
