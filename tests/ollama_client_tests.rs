//! Ollama client tests against a mocked HTTP server

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use pdf_qa::document::{BatchLoader, PdfTextExtractor};
use pdf_qa::ollama::{ChatBackend, ChatMessage, OllamaClient, OllamaStatus};
use pdf_qa::page::RenderCycle;
use pdf_qa::qa::{answer_question, build_prompt};
use pdf_qa::server::{build_router, AppState};
use pdf_qa::PdfQaError;
use serde_json::json;
use tower::ServiceExt;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn chat_reply(content: &str) -> serde_json::Value {
    json!({
        "model": "mistral",
        "created_at": "2024-01-01T00:00:00Z",
        "message": {"role": "assistant", "content": content},
        "done": true
    })
}

#[tokio::test]
async fn test_chat_posts_single_user_message() {
    let server = MockServer::start().await;
    let prompt = build_prompt("Hello World", "What does the document say?");

    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .and(body_json(json!({
            "model": "mistral",
            "messages": [{"role": "user", "content": prompt}],
            "stream": false
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_reply("  The document says hello.\n")))
        .expect(1)
        .mount(&server)
        .await;

    let client = OllamaClient::new(server.uri(), None).unwrap();
    let answer = answer_question(&client, "mistral", "Hello World", "What does the document say?")
        .await
        .unwrap();

    assert_eq!(answer, "The document says hello.");
}

#[tokio::test]
async fn test_chat_error_status_is_inference_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(ResponseTemplate::new(404).set_body_string("{\"error\":\"model 'mistral' not found\"}"))
        .mount(&server)
        .await;

    let client = OllamaClient::new(server.uri(), None).unwrap();
    let err = client
        .chat("mistral", vec![ChatMessage::user("hi")])
        .await
        .unwrap_err();

    match err {
        PdfQaError::Inference(message) => {
            assert!(message.contains("404"));
            assert!(message.contains("model 'mistral' not found"));
        }
        other => panic!("expected inference error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_chat_malformed_reply_is_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"unexpected": true})))
        .mount(&server)
        .await;

    let client = OllamaClient::new(server.uri(), None).unwrap();
    let err = client.chat("mistral", vec![ChatMessage::user("hi")]).await.unwrap_err();

    assert!(matches!(err, PdfQaError::Json(_)));
}

#[tokio::test]
async fn test_unreachable_server_is_http_error() {
    // Grab a free port, then close it so nothing is listening
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = OllamaClient::new(format!("http://{}", addr), None).unwrap();
    let err = client.chat("mistral", vec![ChatMessage::user("hi")]).await.unwrap_err();

    assert!(matches!(err, PdfQaError::Http(_)));
    assert!(!client.check_status("mistral").await.running);
}

#[tokio::test]
async fn test_check_status_lists_models() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/tags"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "models": [{"name": "mistral:latest"}, {"name": "llama3.2:3b"}]
        })))
        .mount(&server)
        .await;

    let client = OllamaClient::new(server.uri(), None).unwrap();

    let status = client.check_status("mistral").await;
    assert!(status.running);
    assert!(status.model_available);
    assert_eq!(status.available_models, ["mistral:latest", "llama3.2:3b"]);

    let status = client.check_status("phi3").await;
    assert!(!status.model_available);
}

#[tokio::test]
async fn test_health_route_reports_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/tags"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"models": []})))
        .mount(&server)
        .await;

    let ollama = OllamaClient::new(server.uri(), None).unwrap();
    let loader = BatchLoader::new(Arc::new(PdfTextExtractor));
    let cycle = RenderCycle::new(loader, Arc::new(ollama.clone()), "mistral", 4000);
    let app = build_router(AppState::new(cycle, ollama), 1024);

    let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/json"
    );
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let status: OllamaStatus = serde_json::from_slice(&bytes).unwrap();
    assert!(status.running);
    assert_eq!(status.model, "mistral");
    assert!(!status.model_available);
}
