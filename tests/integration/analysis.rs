use crate::client_against;
use cropguard::client::CropGuardClient;
use cropguard::errors::{CropGuardError, RateLimitError};
use cropguard::services::analysis::{AnalysisOutcome, AnalysisRequest};
use cropguard::types::Language;
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn analyze_crop_returns_report() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/analyze-crop"))
        .and(header("authorization", "Bearer cg-integration-key"))
        .and(body_partial_json(json!({ "language": "en" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "isPlant": true,
            "name": "Rice - Leaf Blast",
            "cropType": "Rice",
            "confidence": 91,
            "isHealthy": false,
            "description": "Spindle-shaped lesions with grey centers on the leaf blade.",
            "severity": "High",
            "precautions": ["Drain the field"],
            "fertilizers": [],
            "organicTreatments": [],
            "chemicalTreatments": [
                {
                    "name": "Tricyclazole 75% WP",
                    "dosage": "0.6g per litre of water",
                    "timing": "At first sign of lesions",
                    "safetyNote": "Do not spray before rain"
                }
            ],
            "preventiveMeasures": ["Use resistant varieties"]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_against(&server).await;
    let outcome = client
        .analysis()
        .analyze(AnalysisRequest::new("aGVsbG8=", Language::English))
        .await
        .unwrap();

    let report = match outcome {
        AnalysisOutcome::Report(report) => report,
        other => panic!("expected report, got {:?}", other),
    };
    assert_eq!(report.name, "Rice - Leaf Blast");
    assert_eq!(report.chemical_treatments.len(), 1);
}

#[tokio::test]
async fn analyze_crop_not_plant() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/analyze-crop"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "isPlant": false,
            "notPlantMessage": "No plant detected in the image."
        })))
        .mount(&server)
        .await;

    let client = client_against(&server).await;
    let outcome = client
        .analysis()
        .analyze(AnalysisRequest::new("aGVsbG8=", Language::English))
        .await
        .unwrap();

    assert!(matches!(outcome, AnalysisOutcome::NotPlant { .. }));
}

#[tokio::test]
async fn analyze_crop_falls_back_on_unexpected_shape() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/analyze-crop"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "isPlant": true,
            "answer": "The model went off-script here"
        })))
        .mount(&server)
        .await;

    let client = client_against(&server).await;
    let outcome = client
        .analysis()
        .analyze(AnalysisRequest::new("aGVsbG8=", Language::English))
        .await
        .unwrap();

    let report = match outcome {
        AnalysisOutcome::Report(report) => report,
        other => panic!("expected fallback report, got {:?}", other),
    };
    assert_eq!(report.name, "Crop Analysis");
    assert_eq!(report.crop_type, "Unknown");
}

#[tokio::test]
async fn analyze_crop_quota_exhausted_maps_to_402() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/analyze-crop"))
        .respond_with(ResponseTemplate::new(402).set_body_json(json!({
            "error": "AI usage limit reached. Please add credits to continue."
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_against(&server).await;
    let error = client
        .analysis()
        .analyze(AnalysisRequest::new("aGVsbG8=", Language::English))
        .await
        .unwrap_err();

    match error {
        CropGuardError::RateLimit(RateLimitError::QuotaExhausted(message)) => {
            assert!(message.contains("add credits"));
        }
        other => panic!("expected quota error, got {:?}", other),
    }
}

#[tokio::test]
async fn analyze_crop_rate_limited_reads_retry_after() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/analyze-crop"))
        .respond_with(
            ResponseTemplate::new(429)
                .insert_header("retry-after", "20")
                .set_body_json(json!({
                    "error": "Rate limit exceeded. Please try again in a moment."
                })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_against(&server).await;
    let error = client
        .analysis()
        .analyze(AnalysisRequest::new("aGVsbG8=", Language::English))
        .await
        .unwrap_err();

    assert!(error.is_retryable());
    match error {
        CropGuardError::RateLimit(RateLimitError::RateLimited {
            retry_after_secs, ..
        }) => assert_eq!(retry_after_secs, Some(20)),
        other => panic!("expected rate limit error, got {:?}", other),
    }
}
