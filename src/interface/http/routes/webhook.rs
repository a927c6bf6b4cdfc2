// HTTP routes: webhook configuration and dispatch.

use crate::application::usecases::create_webhook::{
    CreateWebhookCommand, CreateWebhookError, CreateWebhookUseCase,
};
use crate::application::usecases::delete_webhook::{
    DeleteWebhookCommand, DeleteWebhookError, DeleteWebhookUseCase,
};
use crate::application::usecases::dispatch_webhook::{
    DispatchMode, DispatchWebhookCommand, DispatchWebhookError, DispatchWebhookUseCase,
};
use crate::application::usecases::get_webhook::{GetWebhookError, GetWebhookUseCase};
use crate::application::usecases::list_webhooks::ListWebhooksUseCase;
use crate::application::usecases::update_webhook::{
    UpdateWebhookCommand, UpdateWebhookError, UpdateWebhookUseCase,
};
use crate::domain::value_objects::ids::WebhookId;
use crate::interface::http::dto::execution_log::ExecutionLogEntryResponse;
use crate::interface::http::dto::webhook::{WebhookPayload, WebhookResponse};
use crate::interface::http::problem::{
    HBD_INTERNAL, HBD_REQUEST_MALFORMED, HBD_STORAGE_DB_ERROR, HBD_WEBHOOK_CONFLICT,
    HBD_WEBHOOK_DISABLED, HBD_WEBHOOK_NOT_FOUND, HBD_WEBHOOK_VALIDATION_FAILED, problem,
};
use crate::interface::http::state::AppState;
use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};

/// Builds webhook routes.
pub fn router() -> axum::Router<AppState> {
    axum::Router::new()
        .route("/webhooks", post(create_webhook).get(list_webhooks))
        .route(
            "/webhooks/:webhook_id",
            get(get_webhook).put(update_webhook).delete(delete_webhook),
        )
        .route("/webhooks/:webhook_id/dispatch", post(dispatch_webhook))
        .route("/webhooks/:webhook_id/test", post(test_webhook))
}

fn parse_webhook_id(raw: &str) -> Result<WebhookId, Response> {
    WebhookId::parse(raw).ok_or_else(|| {
        problem(
            StatusCode::BAD_REQUEST,
            HBD_REQUEST_MALFORMED,
            Some("invalid webhook_id".to_string()),
        )
    })
}

/// Creates a webhook.
async fn create_webhook(
    State(state): State<AppState>,
    Json(payload): Json<WebhookPayload>,
) -> Response {
    // Step 1: Translate the payload, rejecting unknown enum values.
    let draft = match payload.into_draft() {
        Ok(draft) => draft,
        Err(detail) => {
            return problem(StatusCode::BAD_REQUEST, HBD_REQUEST_MALFORMED, Some(detail));
        }
    };

    // Step 2: Execute the use case.
    let result = CreateWebhookUseCase::execute(&state.ctx, CreateWebhookCommand { draft }).await;

    // Step 3: Map output to HTTP response.
    match result {
        Ok(stored) => (
            StatusCode::CREATED,
            Json(WebhookResponse::from_definition(stored)),
        )
            .into_response(),
        Err(CreateWebhookError::Validation(detail)) => problem(
            StatusCode::BAD_REQUEST,
            HBD_WEBHOOK_VALIDATION_FAILED,
            Some(detail),
        ),
        Err(CreateWebhookError::Conflict) => problem(
            StatusCode::CONFLICT,
            HBD_WEBHOOK_CONFLICT,
            Some("webhook already exists".to_string()),
        ),
        Err(CreateWebhookError::Storage(_)) => problem(
            StatusCode::SERVICE_UNAVAILABLE,
            HBD_STORAGE_DB_ERROR,
            Some("storage unavailable".to_string()),
        ),
    }
}

/// Lists webhooks, newest first.
async fn list_webhooks(State(state): State<AppState>) -> Response {
    match ListWebhooksUseCase::execute(&state.ctx).await {
        Ok(definitions) => {
            let payload: Vec<WebhookResponse> = definitions
                .into_iter()
                .map(WebhookResponse::from_definition)
                .collect();
            (StatusCode::OK, Json(payload)).into_response()
        }
        Err(_) => problem(
            StatusCode::SERVICE_UNAVAILABLE,
            HBD_STORAGE_DB_ERROR,
            Some("storage unavailable".to_string()),
        ),
    }
}

/// Fetches one webhook.
async fn get_webhook(State(state): State<AppState>, Path(webhook_id): Path<String>) -> Response {
    let webhook_id = match parse_webhook_id(&webhook_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match GetWebhookUseCase::execute(&state.ctx, webhook_id).await {
        Ok(definition) => (
            StatusCode::OK,
            Json(WebhookResponse::from_definition(definition)),
        )
            .into_response(),
        Err(GetWebhookError::NotFound) => problem(
            StatusCode::NOT_FOUND,
            HBD_WEBHOOK_NOT_FOUND,
            Some("webhook not found".to_string()),
        ),
        Err(GetWebhookError::Storage(_)) => problem(
            StatusCode::SERVICE_UNAVAILABLE,
            HBD_STORAGE_DB_ERROR,
            Some("storage unavailable".to_string()),
        ),
    }
}

/// Replaces a webhook (full-object semantics).
async fn update_webhook(
    State(state): State<AppState>,
    Path(webhook_id): Path<String>,
    Json(payload): Json<WebhookPayload>,
) -> Response {
    // Step 1: Parse inputs.
    let webhook_id = match parse_webhook_id(&webhook_id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    let draft = match payload.into_draft() {
        Ok(draft) => draft,
        Err(detail) => {
            return problem(StatusCode::BAD_REQUEST, HBD_REQUEST_MALFORMED, Some(detail));
        }
    };

    // Step 2: Execute the use case.
    let result = UpdateWebhookUseCase::execute(
        &state.ctx,
        UpdateWebhookCommand { webhook_id, draft },
    )
    .await;

    // Step 3: Map output to HTTP response.
    match result {
        Ok(stored) => (
            StatusCode::OK,
            Json(WebhookResponse::from_definition(stored)),
        )
            .into_response(),
        Err(UpdateWebhookError::NotFound) => problem(
            StatusCode::NOT_FOUND,
            HBD_WEBHOOK_NOT_FOUND,
            Some("webhook not found".to_string()),
        ),
        Err(UpdateWebhookError::Validation(detail)) => problem(
            StatusCode::BAD_REQUEST,
            HBD_WEBHOOK_VALIDATION_FAILED,
            Some(detail),
        ),
        Err(UpdateWebhookError::Storage(_)) => problem(
            StatusCode::SERVICE_UNAVAILABLE,
            HBD_STORAGE_DB_ERROR,
            Some("storage unavailable".to_string()),
        ),
    }
}

/// Deletes a webhook and its execution log entries.
async fn delete_webhook(State(state): State<AppState>, Path(webhook_id): Path<String>) -> Response {
    let webhook_id = match parse_webhook_id(&webhook_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match DeleteWebhookUseCase::execute(&state.ctx, DeleteWebhookCommand { webhook_id }).await {
        Ok(_) => StatusCode::NO_CONTENT.into_response(),
        Err(DeleteWebhookError::NotFound) => problem(
            StatusCode::NOT_FOUND,
            HBD_WEBHOOK_NOT_FOUND,
            Some("webhook not found".to_string()),
        ),
        Err(DeleteWebhookError::Storage(_)) => problem(
            StatusCode::SERVICE_UNAVAILABLE,
            HBD_STORAGE_DB_ERROR,
            Some("storage unavailable".to_string()),
        ),
    }
}

/// Dispatches a webhook, appending the outcome to the execution log.
async fn dispatch_webhook(
    State(state): State<AppState>,
    Path(webhook_id): Path<String>,
) -> Response {
    dispatch(state, webhook_id, DispatchMode::Normal).await
}

/// Dispatches a webhook in sandbox mode; the outcome lands in the
/// test-result slot and nothing durable changes.
async fn test_webhook(State(state): State<AppState>, Path(webhook_id): Path<String>) -> Response {
    dispatch(state, webhook_id, DispatchMode::Test).await
}

async fn dispatch(state: AppState, webhook_id: String, mode: DispatchMode) -> Response {
    let webhook_id = match parse_webhook_id(&webhook_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let result =
        DispatchWebhookUseCase::execute(&state.ctx, DispatchWebhookCommand { webhook_id, mode })
            .await;

    match result {
        Ok(entry) => (
            StatusCode::OK,
            Json(ExecutionLogEntryResponse::from_entry(entry)),
        )
            .into_response(),
        Err(DispatchWebhookError::NotFound) => problem(
            StatusCode::NOT_FOUND,
            HBD_WEBHOOK_NOT_FOUND,
            Some("webhook not found".to_string()),
        ),
        Err(DispatchWebhookError::MissingUrl) => problem(
            StatusCode::BAD_REQUEST,
            HBD_WEBHOOK_VALIDATION_FAILED,
            Some("url is required".to_string()),
        ),
        Err(DispatchWebhookError::Disabled) => problem(
            StatusCode::CONFLICT,
            HBD_WEBHOOK_DISABLED,
            Some("webhook is disabled".to_string()),
        ),
        Err(DispatchWebhookError::Client(detail)) => {
            problem(StatusCode::INTERNAL_SERVER_ERROR, HBD_INTERNAL, Some(detail))
        }
        Err(DispatchWebhookError::Storage(_)) => problem(
            StatusCode::SERVICE_UNAVAILABLE,
            HBD_STORAGE_DB_ERROR,
            Some("storage unavailable".to_string()),
        ),
    }
}
