pub mod dto;
pub mod problem;
pub mod routes;
pub mod state;
pub mod trace;

use axum::Router;
use state::AppState;

/// Builds the HTTP application with all routes and middleware.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(routes::webhook::router())
        .merge(routes::incoming_webhook::router())
        .merge(routes::execution_log::router())
        .merge(routes::session::router())
        .merge(routes::metrics::router())
        .merge(routes::health::router())
        .layer(axum::middleware::from_fn(trace::request_log_middleware))
        .layer(axum::middleware::from_fn(trace::trace_id_middleware))
        .with_state(state)
}
