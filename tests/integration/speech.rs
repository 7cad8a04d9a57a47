use crate::client_against;
use base64::Engine;
use cropguard::client::CropGuardClient;
use cropguard::errors::CropGuardError;
use cropguard::services::speech::SpeechRequest;
use cropguard::types::Language;
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn synthesize_returns_decoded_audio() {
    let audio = b"fake mp3 bytes".to_vec();
    let encoded = base64::engine::general_purpose::STANDARD.encode(&audio);

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/text-to-speech"))
        .and(body_partial_json(json!({
            "text": "Spray in the evening",
            "language": "ta"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "audioContent": encoded })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_against(&server).await;
    let bytes = client
        .speech()
        .synthesize(SpeechRequest::new("Spray in the evening", Language::Tamil))
        .await
        .unwrap();

    assert_eq!(bytes.as_ref(), audio.as_slice());
}

#[tokio::test]
async fn synthesize_rejects_malformed_audio_payload() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/text-to-speech"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "audioContent": "%%%%" })),
        )
        .mount(&server)
        .await;

    let client = client_against(&server).await;
    let error = client
        .speech()
        .synthesize(SpeechRequest::new("hello", Language::English))
        .await
        .unwrap_err();

    assert!(matches!(error, CropGuardError::Deserialization(_)));
}

#[tokio::test]
async fn synthesize_unauthorized_maps_to_auth_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/text-to-speech"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({ "error": "Invalid API key" })),
        )
        .mount(&server)
        .await;

    let client = client_against(&server).await;
    let error = client
        .speech()
        .synthesize(SpeechRequest::new("hello", Language::English))
        .await
        .unwrap_err();

    assert!(error.is_authentication_error());
}
