use hookboard::application::context::AppContext;
use hookboard::config;
use hookboard::infrastructure::db::postgres::PostgresDatabase;
use hookboard::infrastructure::db::repositories::Repositories;
use hookboard::infrastructure::notify::LogNotifier;
use hookboard::interface::http;
use hookboard::interface::http::state::AppState;
use metrics_exporter_prometheus::PrometheusBuilder;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Step 1: Initialize structured logging and the metrics recorder.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    let metrics = PrometheusBuilder::new()
        .install_recorder()
        .expect("install metrics recorder");

    // Step 2: Load configuration.
    let settings = config::load().expect("load config");

    // Step 3: Build repositories; an empty db url selects in-memory stores.
    let repos = if settings.db.url.is_empty() {
        Repositories::in_memory()
    } else {
        let db = Arc::new(
            PostgresDatabase::connect(&settings.db.url)
                .await
                .expect("connect database"),
        );
        Repositories::postgres(db)
    };

    // Step 4: Assemble shared application context and HTTP state.
    let ctx = AppContext::new(repos, settings.clone(), Arc::new(LogNotifier));
    let state = AppState {
        ctx: Arc::new(ctx),
        metrics: Some(metrics),
    };

    // Step 5: Build the HTTP app.
    let app = http::app(state);
    let bind_addr = format!("{}:{}", settings.server.host, settings.server.port);

    // Step 6: Bind and serve.
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .expect("bind server");

    axum::serve(listener, app).await.expect("serve");
}
