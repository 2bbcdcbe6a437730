//! End-to-end tests against a loopback stand-in for the completion service.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::body::Body;
use axum::extract::State;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderMap, Method, Request, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::Json;
use serde_json::{json, Value};
use tower::ServiceExt;

use askgate::{
    build_app, CompletionClient, CompletionRequest, Container, ContainerConfig, GatewayConfig,
    OpenAiResponsesClient, ReasoningEffort, NO_RESPONSE, REQUEST_FAILED,
};

const VALID_KEY: &str = "sk-valid";

#[derive(Clone, Default)]
struct FakeService {
    requests: Arc<Mutex<Vec<Value>>>,
}

async fn responses(
    State(service): State<FakeService>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    service.requests.lock().unwrap().push(body.clone());

    let authorized = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == format!("Bearer {VALID_KEY}"));
    if !authorized {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "error": { "message": "Incorrect API key provided" } })),
        )
            .into_response();
    }

    match body["input"].as_str().unwrap_or_default() {
        "silence" => Json(json!({ "id": "resp_2", "output": [] })).into_response(),
        "garbage" => (StatusCode::OK, "not json").into_response(),
        input => Json(json!({
            "id": "resp_1",
            "output": [
                { "type": "reasoning", "summary": [] },
                {
                    "type": "message",
                    "role": "assistant",
                    "content": [{ "type": "output_text", "text": format!("echo: {input}") }]
                }
            ]
        }))
        .into_response(),
    }
}

async fn spawn_fake_service() -> (SocketAddr, FakeService) {
    let service = FakeService::default();
    let app = axum::Router::new()
        .route("/v1/responses", post(responses))
        .with_state(service.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind fake service");
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (addr, service)
}

fn gateway(addr: SocketAddr, api_key: &str) -> axum::Router {
    let container = Container::new(ContainerConfig {
        gateway: GatewayConfig::default()
            .with_api_key(api_key)
            .with_base_url(format!("http://{addr}")),
        mock_completions: false,
    });
    build_app(&container).expect("Failed to build app")
}

async fn ask(app: axum::Router, prompt: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/graphql")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(
            json!({
                "query": "query($p: String!) { ask(prompt: $p) }",
                "variables": { "p": prompt }
            })
            .to_string(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn valid_credential_returns_model_text() {
    let (addr, service) = spawn_fake_service().await;

    let (status, body) = ask(gateway(addr, VALID_KEY), "hello").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "data": { "ask": "echo: hello" } }));

    let requests = service.requests.lock().unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(
        requests[0],
        json!({
            "model": "gpt-5",
            "reasoning": { "effort": "low" },
            "instructions": "Answer concisely.",
            "input": "hello"
        })
    );
}

#[tokio::test]
async fn invalid_credential_returns_fallback_with_200() {
    let (addr, _service) = spawn_fake_service().await;

    let (status, body) = ask(gateway(addr, "sk-wrong"), "hello").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "data": { "ask": REQUEST_FAILED } }));
}

#[tokio::test]
async fn empty_output_returns_placeholder() {
    let (addr, _service) = spawn_fake_service().await;

    let (_, body) = ask(gateway(addr, VALID_KEY), "silence").await;

    assert_eq!(body, json!({ "data": { "ask": NO_RESPONSE } }));
}

#[tokio::test]
async fn unreachable_service_returns_fallback() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let (status, body) = ask(gateway(addr, VALID_KEY), "hello").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "data": { "ask": REQUEST_FAILED } }));
}

#[tokio::test]
async fn client_reports_distinct_errors() {
    let (addr, _service) = spawn_fake_service().await;
    let base = format!("http://{addr}");

    let rejected = OpenAiResponsesClient::new("sk-wrong", &base, Duration::from_secs(5));
    let request = CompletionRequest::new("gpt-5", ReasoningEffort::High, "Be brief.", "hello");
    let err = rejected.complete(&request).await.unwrap_err();
    assert!(err.is_upstream(), "{err}");
    assert!(err.to_string().contains("401"), "{err}");

    let client = OpenAiResponsesClient::new(VALID_KEY, &base, Duration::from_secs(5));
    let garbage = CompletionRequest::new("gpt-5", ReasoningEffort::Low, "", "garbage");
    let err = client.complete(&garbage).await.unwrap_err();
    assert!(matches!(err, askgate::DomainError::InvalidResponse(_)), "{err}");

    let text = client.complete(&request).await.unwrap();
    assert_eq!(text.as_deref(), Some("echo: hello"));
}
