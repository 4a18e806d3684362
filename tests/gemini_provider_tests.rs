//! HTTP-level tests of the Gemini client against a mock server.

mod common;

use std::sync::Arc;
use std::time::Duration;

use gemini_agent::agent::AgentOptions;
use gemini_agent::attachment::PollPolicy;
use gemini_agent::error::AgentError;
use gemini_agent::models::GeminiModel;
use gemini_agent::provider::gemini::GeminiProvider;
use gemini_agent::provider::{FileService, FileState, GenerateContentRequest, GenerationService};
use gemini_agent::types::*;
use gemini_agent::GeminiClient;
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn provider(server: &MockServer) -> GeminiProvider {
    GeminiProvider::new_with_base_url("test-key", server.uri()).unwrap()
}

fn generation_body(text: &str) -> serde_json::Value {
    json!({
        "candidates": [{
            "content": { "role": "model", "parts": [{ "text": text }] },
            "finishReason": "STOP"
        }],
        "usageMetadata": {
            "promptTokenCount": 3,
            "candidatesTokenCount": 2,
            "totalTokenCount": 5
        }
    })
}

fn plain_request(model: GeminiModel) -> GenerateContentRequest {
    GenerateContentRequest {
        model,
        contents: vec![Turn::user("Hello")],
        config: GenerationConfig {
            system_instruction: DEFAULT_SYSTEM_PROMPT.to_string(),
            temperature: 0.0,
            reasoning_level: None,
            response_schema: None,
            search_tool: false,
        },
    }
}

#[tokio::test]
async fn generate_content_posts_to_model_endpoint() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-2.5-flash-lite:generateContent"))
        .and(header("x-goog-api-key", "test-key"))
        .and(body_partial_json(json!({
            "contents": [{ "role": "user", "parts": [{ "text": "Hello" }] }],
            "systemInstruction": { "parts": [{ "text": DEFAULT_SYSTEM_PROMPT }] }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(generation_body("Hi there")))
        .expect(1)
        .mount(&server)
        .await;

    let raw = provider(&server)
        .generate_content(&plain_request(GeminiModel::Gemini25FlashLite))
        .await
        .expect("generation should succeed");

    let usage = raw.usage_metadata.expect("usage");
    assert_eq!(usage.total_token_count, Some(5));
    let candidates = raw.candidates.expect("candidates");
    assert_eq!(candidates.len(), 1);
}

#[tokio::test]
async fn unauthorized_maps_to_authentication_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "error": { "code": 403, "message": "API key not valid", "status": "PERMISSION_DENIED" }
        })))
        .mount(&server)
        .await;

    let err = provider(&server)
        .generate_content(&plain_request(GeminiModel::Gemini25Flash))
        .await
        .unwrap_err();

    assert!(matches!(err, AgentError::Authentication(ref m) if m.contains("API key not valid")));
}

#[tokio::test]
async fn server_error_is_remote_call_failure() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503).set_body_json(json!({
            "error": { "code": 503, "message": "The model is overloaded." }
        })))
        .mount(&server)
        .await;

    let err = provider(&server)
        .generate_content(&plain_request(GeminiModel::Gemini25Flash))
        .await
        .unwrap_err();

    assert!(matches!(err, AgentError::RemoteCall { status: 503, ref message } if message.contains("overloaded")));
    assert!(err.is_retryable());
}

#[tokio::test]
async fn malformed_body_is_serialization_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = provider(&server)
        .generate_content(&plain_request(GeminiModel::Gemini25Flash))
        .await
        .unwrap_err();

    assert!(matches!(err, AgentError::Serialization(_)));
}

async fn mount_upload(server: &MockServer, name: &str, state: &str) {
    let session_url = format!("{}/upload-session/{}", server.uri(), name.replace('/', "-"));

    Mock::given(method("POST"))
        .and(path("/upload/v1beta/files"))
        .and(header("x-goog-api-key", "test-key"))
        .and(header("x-goog-upload-protocol", "resumable"))
        .and(header("x-goog-upload-command", "start"))
        .and(body_partial_json(json!({ "file": { "display_name": "voice.wav" } })))
        .respond_with(ResponseTemplate::new(200).insert_header("x-goog-upload-url", session_url.as_str()))
        .expect(1)
        .mount(server)
        .await;

    Mock::given(method("POST"))
        .and(path(format!("/upload-session/{}", name.replace('/', "-"))))
        .and(header("x-goog-upload-offset", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "file": {
                "name": name,
                "displayName": "voice.wav",
                "mimeType": "audio/wav",
                "state": state
            }
        })))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn upload_runs_resumable_protocol() {
    let server = MockServer::start().await;
    mount_upload(&server, "files/voice1", "PROCESSING").await;

    let dir = tempfile::tempdir().unwrap();
    let file = common::write_file(dir.path(), "voice.wav", &common::wav_bytes());

    let handle = provider(&server).upload(&file, "voice.wav").await.unwrap();

    assert_eq!(handle.name, "files/voice1");
    assert_eq!(handle.state, FileState::Processing);
    assert_eq!(handle.uri, None);
}

#[tokio::test]
async fn get_refetches_by_name() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1beta/files/voice1"))
        .and(header("x-goog-api-key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "files/voice1",
            "uri": "https://example.test/v1beta/files/voice1",
            "mimeType": "audio/wav",
            "state": "ACTIVE"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let handle = provider(&server).get("files/voice1").await.unwrap();
    assert_eq!(handle.state, FileState::Active);
    assert_eq!(handle.uri.as_deref(), Some("https://example.test/v1beta/files/voice1"));
}

#[tokio::test]
async fn multimodal_session_end_to_end() {
    let server = MockServer::start().await;
    mount_upload(&server, "files/voice2", "PROCESSING").await;

    Mock::given(method("GET"))
        .and(path("/v1beta/files/voice2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "files/voice2",
            "state": "PROCESSING"
        })))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1beta/files/voice2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "files/voice2",
            "uri": "https://example.test/v1beta/files/voice2",
            "mimeType": "audio/wav",
            "state": "ACTIVE"
        })))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-2.5-flash:generateContent"))
        .and(body_partial_json(json!({
            "contents": [
                { "role": "user", "parts": [{ "fileData": {
                    "fileUri": "https://example.test/v1beta/files/voice2",
                    "mimeType": "audio/wav"
                } }] },
                { "role": "user", "parts": [{ "text": "Transcribe the attached audio." }] }
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(generation_body("hello world")))
        .expect(1)
        .mount(&server)
        .await;

    let client = GeminiClient::with_provider(Arc::new(provider(&server))).with_poll_policy(
        PollPolicy {
            interval: Duration::from_millis(10),
            max_attempts: 5,
        },
    );
    let mut session = client.create_agent(
        AgentOptions::builder()
            .model(GeminiModel::Gemini25Flash)
            .user_prompt("Transcribe the attached audio.")
            .build(),
    );

    let dir = tempfile::tempdir().unwrap();
    let file = common::write_file(dir.path(), "voice.wav", &common::wav_bytes());
    let response = session.invoke_multimodal(&file, None).await.unwrap();

    assert_eq!(response.content, "hello world");
    assert_eq!(response.total_tokens, 5);
    assert_eq!(session.conversation().len(), 2);
}

#[tokio::test]
async fn poll_exhaustion_is_timeout() {
    let server = MockServer::start().await;
    mount_upload(&server, "files/stuck", "PROCESSING").await;

    Mock::given(method("GET"))
        .and(path("/v1beta/files/stuck"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "files/stuck",
            "state": "PROCESSING"
        })))
        .expect(3)
        .mount(&server)
        .await;

    let client = GeminiClient::with_provider(Arc::new(provider(&server))).with_poll_policy(
        PollPolicy {
            interval: Duration::from_millis(5),
            max_attempts: 3,
        },
    );
    let mut session = client.create_agent(AgentOptions::default());

    let dir = tempfile::tempdir().unwrap();
    let file = common::write_file(dir.path(), "voice.wav", &common::wav_bytes());
    let err = session.invoke_multimodal(&file, None).await.unwrap_err();

    assert!(matches!(err, AgentError::AttachmentTimeout { attempts: 3, .. }));
    assert!(session.conversation().is_empty());
}
