// HTTP routes: session selection, modals, and sandbox mode.

use crate::application::usecases::get_webhook::{GetWebhookError, GetWebhookUseCase};
use crate::domain::value_objects::ids::{IncomingWebhookId, WebhookId};
use crate::interface::http::dto::session::SessionResponse;
use crate::interface::http::problem::{
    HBD_REQUEST_MALFORMED, HBD_STORAGE_DB_ERROR, HBD_WEBHOOK_NOT_FOUND, problem,
};
use crate::interface::http::state::AppState;
use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, post};

/// Builds session routes.
pub fn router() -> axum::Router<AppState> {
    axum::Router::new()
        .route("/session", axum::routing::get(get_session))
        .route(
            "/session/webhook-editor",
            post(open_webhook_creator).delete(close_webhook_modal),
        )
        .route(
            "/session/webhook-editor/:webhook_id",
            post(open_webhook_editor),
        )
        .route(
            "/session/incoming-webhook-editor",
            post(open_incoming_webhook_creator).delete(close_incoming_webhook_modal),
        )
        .route(
            "/session/incoming-webhook-editor/:incoming_webhook_id",
            post(open_incoming_webhook_editor),
        )
        .route(
            "/session/test-mode",
            post(enter_test_mode).delete(leave_test_mode),
        )
        .route("/session/test-result", delete(clear_test_result))
}

fn session_payload(state: &AppState) -> SessionResponse {
    SessionResponse::build(
        state.ctx.session.snapshot(),
        state.ctx.test_slot.mode(),
        state.ctx.test_slot.last_result(),
    )
}

/// Returns the full session snapshot.
async fn get_session(State(state): State<AppState>) -> Response {
    (StatusCode::OK, Json(session_payload(&state))).into_response()
}

/// Opens the webhook modal in edit mode, selecting the target.
async fn open_webhook_editor(
    State(state): State<AppState>,
    Path(webhook_id): Path<String>,
) -> Response {
    let Some(webhook_id) = WebhookId::parse(&webhook_id) else {
        return problem(
            StatusCode::BAD_REQUEST,
            HBD_REQUEST_MALFORMED,
            Some("invalid webhook_id".to_string()),
        );
    };

    match GetWebhookUseCase::execute(&state.ctx, webhook_id).await {
        Ok(definition) => {
            state.ctx.session.open_webhook_editor(definition);
            (StatusCode::OK, Json(session_payload(&state))).into_response()
        }
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

/// Opens the webhook modal in create mode; selection is cleared first.
async fn open_webhook_creator(State(state): State<AppState>) -> Response {
    state.ctx.session.open_webhook_creator();
    (StatusCode::OK, Json(session_payload(&state))).into_response()
}

/// Closes the webhook modal and clears the selection.
async fn close_webhook_modal(State(state): State<AppState>) -> Response {
    state.ctx.session.close_webhook_modal();
    (StatusCode::OK, Json(session_payload(&state))).into_response()
}

/// Opens the incoming-endpoint modal in edit mode.
async fn open_incoming_webhook_editor(
    State(state): State<AppState>,
    Path(incoming_webhook_id): Path<String>,
) -> Response {
    let Some(incoming_webhook_id) = IncomingWebhookId::parse(&incoming_webhook_id) else {
        return problem(
            StatusCode::BAD_REQUEST,
            HBD_REQUEST_MALFORMED,
            Some("invalid incoming_webhook_id".to_string()),
        );
    };

    let row = state
        .ctx
        .repos
        .incoming_webhook
        .get(incoming_webhook_id.0)
        .await;
    match row {
        Ok(Some(row)) => {
            state
                .ctx
                .session
                .open_incoming_webhook_editor(row.into_definition());
            (StatusCode::OK, Json(session_payload(&state))).into_response()
        }
        Ok(None) => problem(
            StatusCode::NOT_FOUND,
            HBD_WEBHOOK_NOT_FOUND,
            Some("incoming webhook not found".to_string()),
        ),
        Err(_) => problem(
            StatusCode::SERVICE_UNAVAILABLE,
            HBD_STORAGE_DB_ERROR,
            Some("storage unavailable".to_string()),
        ),
    }
}

/// Opens the incoming-endpoint modal in create mode.
async fn open_incoming_webhook_creator(State(state): State<AppState>) -> Response {
    state.ctx.session.open_incoming_webhook_creator();
    (StatusCode::OK, Json(session_payload(&state))).into_response()
}

/// Closes the incoming-endpoint modal and clears the selection.
async fn close_incoming_webhook_modal(State(state): State<AppState>) -> Response {
    state.ctx.session.close_incoming_webhook_modal();
    (StatusCode::OK, Json(session_payload(&state))).into_response()
}

/// Enters sandbox mode, clearing any stale test result.
async fn enter_test_mode(State(state): State<AppState>) -> Response {
    state.ctx.test_slot.enter_testing();
    (StatusCode::OK, Json(session_payload(&state))).into_response()
}

/// Leaves sandbox mode; the last test result is kept until cleared.
async fn leave_test_mode(State(state): State<AppState>) -> Response {
    state.ctx.test_slot.leave_testing();
    (StatusCode::OK, Json(session_payload(&state))).into_response()
}

/// Clears the test-result slot.
async fn clear_test_result(State(state): State<AppState>) -> Response {
    state.ctx.test_slot.clear_result();
    (StatusCode::OK, Json(session_payload(&state))).into_response()
}
