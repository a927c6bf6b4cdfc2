// HTTP routes: execution log queries.

use crate::application::usecases::query_execution_logs::{
    QueryExecutionLogsCommand, QueryExecutionLogsUseCase,
};
use crate::domain::value_objects::ids::WebhookId;
use crate::interface::http::dto::execution_log::ExecutionLogEntryResponse;
use crate::interface::http::problem::{HBD_REQUEST_MALFORMED, HBD_STORAGE_DB_ERROR, problem};
use crate::interface::http::state::AppState;
use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use serde::Deserialize;

/// Builds execution log routes.
pub fn router() -> axum::Router<AppState> {
    axum::Router::new().route("/logs", get(query_logs))
}

#[derive(Debug, Deserialize)]
struct LogQueryParams {
    webhook_id: Option<String>,
    search: Option<String>,
}

/// Queries the execution log, newest first. `webhook_id` and `search`
/// compose with AND.
async fn query_logs(
    State(state): State<AppState>,
    Query(params): Query<LogQueryParams>,
) -> Response {
    // Step 1: Parse the optional webhook filter.
    let webhook_id = match params.webhook_id.as_deref() {
        Some(raw) => match WebhookId::parse(raw) {
            Some(id) => Some(id),
            None => {
                return problem(
                    StatusCode::BAD_REQUEST,
                    HBD_REQUEST_MALFORMED,
                    Some("invalid webhook_id".to_string()),
                );
            }
        },
        None => None,
    };

    // Step 2: Execute the query.
    let result = QueryExecutionLogsUseCase::execute(
        &state.ctx,
        QueryExecutionLogsCommand {
            webhook_id,
            search: params.search,
        },
    )
    .await;

    // Step 3: Map output to HTTP response.
    match result {
        Ok(entries) => {
            let payload: Vec<ExecutionLogEntryResponse> = entries
                .into_iter()
                .map(ExecutionLogEntryResponse::from_entry)
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
