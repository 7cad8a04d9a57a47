use crate::client_against;
use cropguard::client::CropGuardClient;
use cropguard::services::chat::{ChatMessage, ChatRequest, Transcript};
use cropguard::types::Language;
use futures::StreamExt;
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn sse_body(parts: &[&str]) -> String {
    let mut body = String::new();
    for part in parts {
        body.push_str(&format!(
            "data: {{\"choices\":[{{\"delta\":{{\"content\":{}}}}}]}}\n\n",
            serde_json::to_string(part).unwrap()
        ));
    }
    body.push_str("data: [DONE]\n\n");
    body
}

#[tokio::test]
async fn chat_streams_updates_in_order() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/crop-chat"))
        .and(body_partial_json(json!({ "language": "hi" })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(sse_body(&["Yellowing ", "means ", "nitrogen."]), "text/event-stream"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_against(&server).await;
    let request = ChatRequest::new(
        vec![ChatMessage::user("Why are the leaves yellow?")],
        Language::Hindi,
    );

    let mut stream = client.chat().send_stream(request).await.unwrap();
    let mut content = String::new();
    while let Some(update) = stream.next().await {
        let update = update.unwrap();
        assert_eq!(update.content, format!("{}{}", content, update.delta));
        content = update.content;
    }

    assert_eq!(content, "Yellowing means nitrogen.");
}

#[tokio::test]
async fn chat_full_conversation_through_transcript() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/crop-chat"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(sse_body(&["Spray neem oil weekly."]), "text/event-stream"),
        )
        .mount(&server)
        .await;

    let client = client_against(&server).await;

    let mut transcript = Transcript::new();
    transcript.push_user("How do I treat aphids?");

    let request = ChatRequest::new(transcript.to_request_messages(), Language::English)
        .with_context("Crop: Chilli, Disease: Aphid infestation");
    let mut stream = client.chat().send_stream(request).await.unwrap();
    while let Some(update) = stream.next().await {
        transcript.apply_update(&update.unwrap());
    }

    let id = transcript.finalize().unwrap();
    assert!(!id.is_empty());
    let messages = transcript.to_request_messages();
    assert_eq!(messages[1], ChatMessage::assistant("Spray neem oil weekly."));
}

#[tokio::test]
async fn chat_handles_trailing_line_without_terminator() {
    let server = MockServer::start().await;
    let body = "data: {\"choices\":[{\"delta\":{\"content\":\"partial answer\"}}]}";
    Mock::given(method("POST"))
        .and(path("/crop-chat"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body, "text/event-stream"))
        .mount(&server)
        .await;

    let client = client_against(&server).await;
    let request = ChatRequest::new(vec![ChatMessage::user("hi")], Language::English);
    let text = client
        .chat()
        .send_stream(request)
        .await
        .unwrap()
        .collect_text()
        .await
        .unwrap();

    assert_eq!(text, "partial answer");
}

#[tokio::test]
async fn chat_rate_limited_before_stream_starts() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/crop-chat"))
        .respond_with(ResponseTemplate::new(429).set_body_json(json!({
            "error": "Rate limit exceeded. Please try again in a moment."
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_against(&server).await;
    let request = ChatRequest::new(vec![ChatMessage::user("hi")], Language::English);
    let error = client.chat().send_stream(request).await.unwrap_err();

    assert!(error.is_rate_limit_error());
}
