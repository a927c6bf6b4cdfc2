use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use hookboard::application::context::AppContext;
use hookboard::config::{Db, Dispatcher, ExecutionLog, Server, Settings};
use hookboard::domain::services::notifier::NullNotifier;
use hookboard::infrastructure::db::repositories::Repositories;
use hookboard::interface::http;
use hookboard::interface::http::state::AppState;
use serde_json::{Value, json};
use std::sync::Arc;
use tower::util::ServiceExt;

fn test_settings() -> Settings {
    Settings {
        server: Server {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        db: Db { url: String::new() },
        dispatcher: Dispatcher {
            request_timeout_ms: 2000,
        },
        execution_log: ExecutionLog {
            max_entries_per_webhook: 100,
        },
    }
}

fn test_state() -> AppState {
    let ctx = AppContext::new(
        Repositories::in_memory(),
        test_settings(),
        Arc::new(NullNotifier),
    );
    AppState {
        ctx: Arc::new(ctx),
        metrics: None,
    }
}

fn webhook_payload(name: &str) -> Value {
    json!({
        "name": name,
        "url": "https://api.example.com/deploy",
        "method": "POST",
        "headers": [{"key": "X-Token", "value": "secret", "enabled": true}],
        "params": [{"key": "env", "value": "prod", "enabled": false}],
        "body": {"content_type": "json", "content": "{\"a\":1}"},
        "enabled": true,
        "tags": [{"name": "deploys", "color": "#ff0000"}],
        "schedule": "manual"
    })
}

async fn request(state: AppState, request: Request<Body>) -> (StatusCode, Value) {
    let response = http::app(state).oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn post(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn given_valid_payload_when_create_webhook_should_return_created() {
    let state = test_state();

    let (status, body) = request(state, post("/webhooks", webhook_payload("deploy hook"))).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["name"], "deploy hook");
    assert_eq!(body["method"], "POST");
    assert_eq!(body["last_execution_status"], Value::Null);
    assert!(body["id"].as_str().is_some());
}

#[tokio::test]
async fn given_missing_name_when_create_webhook_should_return_problem() {
    let state = test_state();
    let mut payload = webhook_payload("");
    payload["name"] = json!("   ");

    let response = http::app(state)
        .oneshot(post("/webhooks", payload))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok()),
        Some("application/problem+json")
    );
}

#[tokio::test]
async fn given_unknown_method_when_create_webhook_should_return_bad_request() {
    let state = test_state();
    let mut payload = webhook_payload("hook");
    payload["method"] = json!("TRACE");

    let (status, body) = request(state, post("/webhooks", payload)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "HBD_REQUEST_MALFORMED");
}

#[tokio::test]
async fn given_created_webhooks_when_list_should_return_them() {
    let state = test_state();
    request(state.clone(), post("/webhooks", webhook_payload("first"))).await;
    request(state.clone(), post("/webhooks", webhook_payload("second"))).await;

    let (status, body) = request(state, get("/webhooks")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn given_update_when_put_webhook_should_replace_fields() {
    let state = test_state();
    let (_, created) = request(state.clone(), post("/webhooks", webhook_payload("old"))).await;
    let id = created["id"].as_str().unwrap().to_string();

    let mut replacement = webhook_payload("renamed");
    replacement["enabled"] = json!(false);
    let (status, updated) = request(
        state.clone(),
        Request::builder()
            .method("PUT")
            .uri(format!("/webhooks/{id}"))
            .header("content-type", "application/json")
            .body(Body::from(replacement.to_string()))
            .unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["name"], "renamed");
    assert_eq!(updated["enabled"], json!(false));
    assert_eq!(updated["id"], created["id"]);
    assert_eq!(updated["created_at"], created["created_at"]);
}

#[tokio::test]
async fn given_unknown_id_when_get_webhook_should_return_not_found() {
    let state = test_state();

    let (status, body) = request(
        state,
        get(&format!("/webhooks/{}", uuid::Uuid::new_v4())),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "HBD_WEBHOOK_NOT_FOUND");
}

#[tokio::test]
async fn given_malformed_id_when_get_webhook_should_return_bad_request() {
    let state = test_state();

    let (status, body) = request(state, get("/webhooks/not-a-uuid")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "HBD_REQUEST_MALFORMED");
}

#[tokio::test]
async fn given_delete_when_called_should_remove_webhook() {
    let state = test_state();
    let (_, created) = request(state.clone(), post("/webhooks", webhook_payload("doomed"))).await;
    let id = created["id"].as_str().unwrap().to_string();

    let (status, _) = request(
        state.clone(),
        Request::builder()
            .method("DELETE")
            .uri(format!("/webhooks/{id}"))
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = request(state, get(&format!("/webhooks/{id}"))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn given_incoming_webhook_flow_when_created_should_generate_endpoint() {
    let state = test_state();

    let (status, created) = request(
        state.clone(),
        post("/incoming-webhooks", json!({"name": "ci events"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(created["endpoint_path"]
        .as_str()
        .unwrap()
        .starts_with("/hooks/"));
    assert!(!created["secret_key"].as_str().unwrap().is_empty());

    let id = created["id"].as_str().unwrap().to_string();
    let (status, updated) = request(
        state.clone(),
        Request::builder()
            .method("PUT")
            .uri(format!("/incoming-webhooks/{id}"))
            .header("content-type", "application/json")
            .body(Body::from(
                json!({"name": "renamed", "enabled": false}).to_string(),
            ))
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["name"], "renamed");
    assert_eq!(updated["endpoint_path"], created["endpoint_path"]);

    let (status, _) = request(
        state,
        Request::builder()
            .method("DELETE")
            .uri(format!("/incoming-webhooks/{id}"))
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn given_missing_name_when_create_incoming_webhook_should_return_problem() {
    let state = test_state();

    let (status, body) = request(state, post("/incoming-webhooks", json!({"name": ""}))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "HBD_WEBHOOK_VALIDATION_FAILED");
}
