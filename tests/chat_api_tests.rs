//! HTTP-level tests for the chat API, with the Groq upstream stubbed out.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use portfolio_agent::agent::ChatAgent;
use portfolio_agent::cli::Args;
use portfolio_agent::server::api::build_router;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_args(base_url: &str) -> Args {
    Args {
        server_addr: "127.0.0.1:0".to_string(),
        chat_base_url: Some(base_url.to_string()),
        tls_cert_path: None,
        tls_key_path: None,
        enable_tls: false,
    }
}

fn router_for(base_url: &str) -> axum::Router {
    let agent = Arc::new(ChatAgent::new(&test_args(base_url)));
    build_router(agent)
}

fn completion_body(content: &str) -> Value {
    json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": content },
            "finish_reason": "stop"
        }]
    })
}

async fn mock_completions(server: &MockServer, content: &str) {
    Mock::given(method("POST"))
        .and(path("/openai/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body(content)))
        .mount(server)
        .await;
}

async fn post_chat(app: axum::Router, body: Value) -> (StatusCode, Value) {
    let req = Request::builder()
        .method("POST")
        .uri("/chat")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let resp = app.oneshot(req).await.expect("request");
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("read body");
    let json = serde_json::from_slice(&bytes).expect("parse JSON");
    (status, json)
}

#[tokio::test]
async fn root_reports_liveness() {
    let app = router_for("http://unused.invalid");

    let req = Request::builder().uri("/").body(Body::empty()).unwrap();
    let resp = app.oneshot(req).await.expect("request");

    assert_eq!(resp.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("read body");
    let json: Value = serde_json::from_slice(&bytes).expect("parse JSON");
    assert_eq!(json, json!({ "status": "Chatbot API is running" }));
}

#[tokio::test]
async fn chat_relays_completion_text() {
    std::env::set_var("GROQ_API_KEY", "test-key");
    let mock_server = MockServer::start().await;
    mock_completions(&mock_server, "Ehtisham is a Python Full Stack & AI Developer...").await;

    let app = router_for(&mock_server.uri());
    let (status, json) = post_chat(
        app,
        json!({ "message": "What does Ehtisham do?", "conversation_history": [] }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "success");
    assert_eq!(
        json["response"],
        "Ehtisham is a Python Full Stack & AI Developer..."
    );
}

#[tokio::test]
async fn seven_history_turns_become_seven_upstream_messages() {
    std::env::set_var("GROQ_API_KEY", "test-key");
    let mock_server = MockServer::start().await;
    mock_completions(&mock_server, "ok").await;

    let history: Vec<Value> = (0..7)
        .map(|i| {
            let role = if i % 2 == 0 { "user" } else { "assistant" };
            json!({ "role": role, "content": format!("turn {}", i) })
        })
        .collect();

    let app = router_for(&mock_server.uri());
    let (status, _) = post_chat(
        app,
        json!({ "message": "Anything else?", "conversation_history": history }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let requests = mock_server
        .received_requests()
        .await
        .expect("recorded requests");
    assert_eq!(requests.len(), 1);

    let body: Value = serde_json::from_slice(&requests[0].body).expect("parse upstream body");
    let messages = body["messages"].as_array().expect("messages array");

    // system turn + last 5 history turns + the new user message
    assert_eq!(messages.len(), 7);
    assert_eq!(messages[0]["role"], "system");
    assert_eq!(messages[1]["content"], "turn 2");
    assert_eq!(messages[5]["content"], "turn 6");
    assert_eq!(messages[6]["role"], "user");
    assert_eq!(messages[6]["content"], "Anything else?");

    // Fixed completion parameters of the deployment.
    assert_eq!(body["model"], "llama-3.1-8b-instant");
    assert_eq!(body["max_tokens"], 500);
    let temperature = body["temperature"].as_f64().expect("temperature");
    assert!((temperature - 0.7).abs() < 1e-6);
}

#[tokio::test]
async fn malformed_history_role_is_rejected_before_the_provider_call() {
    std::env::set_var("GROQ_API_KEY", "test-key");
    let mock_server = MockServer::start().await;
    mock_completions(&mock_server, "should never be reached").await;

    let app = router_for(&mock_server.uri());
    let (status, json) = post_chat(
        app,
        json!({
            "message": "hello",
            "conversation_history": [{ "role": "wizard", "content": "abracadabra" }]
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let detail = json["detail"].as_str().expect("detail");
    assert!(detail.contains("wizard"), "unexpected detail: {}", detail);

    let requests = mock_server
        .received_requests()
        .await
        .expect("recorded requests");
    assert!(requests.is_empty(), "provider must not be called");
}

#[tokio::test]
async fn upstream_failure_maps_to_bad_gateway() {
    std::env::set_var("GROQ_API_KEY", "test-key");
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/openai/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let app = router_for(&mock_server.uri());
    let (status, json) = post_chat(
        app,
        json!({ "message": "hello", "conversation_history": [] }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(json["detail"].as_str().is_some_and(|d| !d.is_empty()));
}

#[tokio::test]
async fn reload_client_rebuilds_from_environment() {
    std::env::set_var("GROQ_API_KEY", "test-key");
    let mock_server = MockServer::start().await;
    mock_completions(&mock_server, "still here").await;

    let app = router_for(&mock_server.uri());

    let req = Request::builder()
        .uri("/api/reload-client")
        .body(Body::empty())
        .unwrap();
    let resp = app.clone().oneshot(req).await.expect("request");
    assert_eq!(resp.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("read body");
    let json: Value = serde_json::from_slice(&bytes).expect("parse JSON");
    assert_eq!(json["success"], true);

    // The freshly built client serves subsequent requests.
    let (status, json) = post_chat(
        app,
        json!({ "message": "hello", "conversation_history": [] }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["response"], "still here");
}
