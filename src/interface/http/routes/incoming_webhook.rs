// HTTP routes: incoming endpoint configuration.

use crate::application::usecases::create_incoming_webhook::{
    CreateIncomingWebhookCommand, CreateIncomingWebhookError, CreateIncomingWebhookUseCase,
};
use crate::application::usecases::delete_incoming_webhook::{
    DeleteIncomingWebhookCommand, DeleteIncomingWebhookError, DeleteIncomingWebhookUseCase,
};
use crate::application::usecases::list_incoming_webhooks::ListIncomingWebhooksUseCase;
use crate::application::usecases::update_incoming_webhook::{
    UpdateIncomingWebhookCommand, UpdateIncomingWebhookError, UpdateIncomingWebhookUseCase,
};
use crate::domain::value_objects::ids::IncomingWebhookId;
use crate::interface::http::dto::incoming_webhook::{
    IncomingWebhookPayload, IncomingWebhookResponse,
};
use crate::interface::http::problem::{
    HBD_REQUEST_MALFORMED, HBD_STORAGE_DB_ERROR, HBD_WEBHOOK_CONFLICT, HBD_WEBHOOK_NOT_FOUND,
    HBD_WEBHOOK_VALIDATION_FAILED, problem,
};
use crate::interface::http::state::AppState;
use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{post, put};

/// Builds incoming-endpoint routes.
pub fn router() -> axum::Router<AppState> {
    axum::Router::new()
        .route(
            "/incoming-webhooks",
            post(create_incoming_webhook).get(list_incoming_webhooks),
        )
        .route(
            "/incoming-webhooks/:incoming_webhook_id",
            put(update_incoming_webhook).delete(delete_incoming_webhook),
        )
}

fn parse_incoming_webhook_id(raw: &str) -> Result<IncomingWebhookId, Response> {
    IncomingWebhookId::parse(raw).ok_or_else(|| {
        problem(
            StatusCode::BAD_REQUEST,
            HBD_REQUEST_MALFORMED,
            Some("invalid incoming_webhook_id".to_string()),
        )
    })
}

/// Creates an incoming endpoint; path and secret are generated.
async fn create_incoming_webhook(
    State(state): State<AppState>,
    Json(payload): Json<IncomingWebhookPayload>,
) -> Response {
    let result = CreateIncomingWebhookUseCase::execute(
        &state.ctx,
        CreateIncomingWebhookCommand {
            draft: payload.into_draft(),
        },
    )
    .await;

    match result {
        Ok(stored) => (
            StatusCode::CREATED,
            Json(IncomingWebhookResponse::from_definition(stored)),
        )
            .into_response(),
        Err(CreateIncomingWebhookError::Validation(detail)) => problem(
            StatusCode::BAD_REQUEST,
            HBD_WEBHOOK_VALIDATION_FAILED,
            Some(detail),
        ),
        Err(CreateIncomingWebhookError::Conflict) => problem(
            StatusCode::CONFLICT,
            HBD_WEBHOOK_CONFLICT,
            Some("incoming webhook already exists".to_string()),
        ),
        Err(CreateIncomingWebhookError::Storage(_)) => problem(
            StatusCode::SERVICE_UNAVAILABLE,
            HBD_STORAGE_DB_ERROR,
            Some("storage unavailable".to_string()),
        ),
    }
}

/// Lists incoming endpoints, newest first.
async fn list_incoming_webhooks(State(state): State<AppState>) -> Response {
    match ListIncomingWebhooksUseCase::execute(&state.ctx).await {
        Ok(definitions) => {
            let payload: Vec<IncomingWebhookResponse> = definitions
                .into_iter()
                .map(IncomingWebhookResponse::from_definition)
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

/// Replaces an incoming endpoint's editable fields.
async fn update_incoming_webhook(
    State(state): State<AppState>,
    Path(incoming_webhook_id): Path<String>,
    Json(payload): Json<IncomingWebhookPayload>,
) -> Response {
    let incoming_webhook_id = match parse_incoming_webhook_id(&incoming_webhook_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let result = UpdateIncomingWebhookUseCase::execute(
        &state.ctx,
        UpdateIncomingWebhookCommand {
            incoming_webhook_id,
            draft: payload.into_draft(),
        },
    )
    .await;

    match result {
        Ok(stored) => (
            StatusCode::OK,
            Json(IncomingWebhookResponse::from_definition(stored)),
        )
            .into_response(),
        Err(UpdateIncomingWebhookError::NotFound) => problem(
            StatusCode::NOT_FOUND,
            HBD_WEBHOOK_NOT_FOUND,
            Some("incoming webhook not found".to_string()),
        ),
        Err(UpdateIncomingWebhookError::Validation(detail)) => problem(
            StatusCode::BAD_REQUEST,
            HBD_WEBHOOK_VALIDATION_FAILED,
            Some(detail),
        ),
        Err(UpdateIncomingWebhookError::Storage(_)) => problem(
            StatusCode::SERVICE_UNAVAILABLE,
            HBD_STORAGE_DB_ERROR,
            Some("storage unavailable".to_string()),
        ),
    }
}

/// Deletes an incoming endpoint.
async fn delete_incoming_webhook(
    State(state): State<AppState>,
    Path(incoming_webhook_id): Path<String>,
) -> Response {
    let incoming_webhook_id = match parse_incoming_webhook_id(&incoming_webhook_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let result = DeleteIncomingWebhookUseCase::execute(
        &state.ctx,
        DeleteIncomingWebhookCommand {
            incoming_webhook_id,
        },
    )
    .await;

    match result {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(DeleteIncomingWebhookError::NotFound) => problem(
            StatusCode::NOT_FOUND,
            HBD_WEBHOOK_NOT_FOUND,
            Some("incoming webhook not found".to_string()),
        ),
        Err(DeleteIncomingWebhookError::Storage(_)) => problem(
            StatusCode::SERVICE_UNAVAILABLE,
            HBD_STORAGE_DB_ERROR,
            Some("storage unavailable".to_string()),
        ),
    }
}
