// Use case: dispatch_webhook.

use crate::application::context::AppContext;
use crate::domain::entities::execution_log::{ExecutionLogEntry, classify_status};
use crate::domain::entities::webhook::{ExecutionStatus, HttpMethod, WebhookDefinition};
use crate::domain::services::notifier::Notification;
use crate::domain::services::request_builder::{BuiltRequest, build_request};
use crate::domain::services::response_preview::preview_body;
use crate::domain::value_objects::ids::{LogEntryId, WebhookId};
use crate::domain::value_objects::timestamps::Timestamp;
use crate::infrastructure::db::dto::ExecutionLogRow;
use metrics::counter;
use std::collections::BTreeMap;

/// Issues one webhook dispatch: builds the request, sends it, classifies
/// the outcome, and routes the result to the durable log (normal mode) or
/// the ephemeral test slot (test mode). Dispatches are independent calls;
/// there is no retry and no deduplication.
pub struct DispatchWebhookUseCase;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchMode {
    Normal,
    Test,
}

#[derive(Debug)]
pub enum DispatchWebhookError {
    NotFound,
    /// The definition has no URL; rejected before any network activity.
    MissingUrl,
    /// Normal dispatch of a disabled webhook. Test mode is exempt.
    Disabled,
    Client(String),
    Storage(String),
}

#[derive(Debug, Clone)]
pub struct DispatchWebhookCommand {
    pub webhook_id: WebhookId,
    pub mode: DispatchMode,
}

impl DispatchWebhookUseCase {
    pub async fn execute(
        ctx: &AppContext,
        cmd: DispatchWebhookCommand,
    ) -> Result<ExecutionLogEntry, DispatchWebhookError> {
        // Step 1: Load the definition.
        let row = ctx
            .repos
            .webhook
            .get(cmd.webhook_id.0)
            .await
            .map_err(|e| DispatchWebhookError::Storage(format!("{e:?}")))?;
        let Some(row) = row else {
            return Err(DispatchWebhookError::NotFound);
        };
        let definition = row.into_definition();

        // Step 2: Refuse before any network activity.
        if definition.url.trim().is_empty() {
            return Err(DispatchWebhookError::MissingUrl);
        }
        if !definition.enabled && cmd.mode == DispatchMode::Normal {
            return Err(DispatchWebhookError::Disabled);
        }

        // Step 3: Build and issue the request, measuring wall-clock time.
        let built = build_request(&definition);
        let started_at = Timestamp::now_utc();
        let timer = std::time::Instant::now();
        let entry = Self::send(ctx, &definition, built, started_at, timer).await?;

        // Step 4: Route the outcome by mode.
        match cmd.mode {
            DispatchMode::Test => {
                ctx.test_slot.store_result(entry.clone());
                counter!("webhook_dispatches_total", "mode" => "test").increment(1);
            }
            DispatchMode::Normal => {
                ctx.repos
                    .execution_log
                    .insert(
                        &ExecutionLogRow::from_entry(&entry),
                        ctx.settings.execution_log.max_entries_per_webhook,
                    )
                    .await
                    .map_err(|e| DispatchWebhookError::Storage(format!("{e:?}")))?;

                let status = ExecutionStatus::from_success(entry.success);
                let refreshed = ctx
                    .repos
                    .webhook
                    .record_execution(definition.id.0, started_at.as_inner(), status.as_str())
                    .await
                    .map_err(|e| DispatchWebhookError::Storage(format!("{e:?}")))?;
                ctx.session
                    .refresh_selected_webhook(&refreshed.into_definition());

                let outcome = if entry.success { "success" } else { "error" };
                counter!("webhook_dispatches_total", "mode" => "normal", "outcome" => outcome)
                    .increment(1);
            }
        }

        ctx.notifier.notify(Notification::DispatchCompleted {
            webhook_id: definition.id,
            success: entry.success,
        });
        Ok(entry)
    }

    async fn send(
        ctx: &AppContext,
        definition: &WebhookDefinition,
        built: BuiltRequest,
        started_at: Timestamp,
        timer: std::time::Instant,
    ) -> Result<ExecutionLogEntry, DispatchWebhookError> {
        // Step 1: Build a client with the configured timeout; a hung
        // endpoint resolves as a transport failure instead of stalling.
        let timeout =
            std::time::Duration::from_millis(ctx.settings.dispatcher.request_timeout_ms);
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DispatchWebhookError::Client(e.to_string()))?;

        // Step 2: Issue the request exactly as built.
        let mut request = client.request(to_reqwest_method(built.method), &built.url);
        for (key, value) in &built.headers {
            request = request.header(key.as_str(), value.as_str());
        }
        if let Some(body) = &built.body {
            request = request.body(body.clone());
        }
        let response = request.send().await;

        // Step 3: Classify the outcome.
        let entry = match response {
            Ok(response) => {
                let status = response.status().as_u16();
                let mut response_headers = BTreeMap::new();
                for (name, value) in response.headers() {
                    response_headers.insert(
                        name.to_string(),
                        value.to_str().unwrap_or_default().to_string(),
                    );
                }
                match response.text().await {
                    Ok(text) => Self::completed(
                        definition,
                        &built,
                        started_at,
                        timer,
                        status,
                        response_headers,
                        text,
                    ),
                    Err(e) => {
                        Self::transport_failure(definition, &built, started_at, timer, e.to_string())
                    }
                }
            }
            Err(e) => Self::transport_failure(definition, &built, started_at, timer, e.to_string()),
        };

        Ok(entry)
    }

    fn completed(
        definition: &WebhookDefinition,
        built: &BuiltRequest,
        started_at: Timestamp,
        timer: std::time::Instant,
        status: u16,
        response_headers: BTreeMap<String, String>,
        body: String,
    ) -> ExecutionLogEntry {
        let success = classify_status(status);
        ExecutionLogEntry {
            id: LogEntryId::new(),
            webhook_id: definition.id,
            webhook_name: definition.name.clone(),
            timestamp: started_at,
            request_url: built.url.clone(),
            request_method: built.method,
            request_headers: built.headers.clone(),
            request_body: built.body.clone(),
            response_status: status,
            response_headers,
            response_body: Some(preview_body(&body)),
            duration_ms: elapsed_ms(timer),
            success,
            error: if success {
                None
            } else {
                Some(format!("HTTP {status}"))
            },
        }
    }

    fn transport_failure(
        definition: &WebhookDefinition,
        built: &BuiltRequest,
        started_at: Timestamp,
        timer: std::time::Instant,
        error: String,
    ) -> ExecutionLogEntry {
        ExecutionLogEntry {
            id: LogEntryId::new(),
            webhook_id: definition.id,
            webhook_name: definition.name.clone(),
            timestamp: started_at,
            request_url: built.url.clone(),
            request_method: built.method,
            request_headers: built.headers.clone(),
            request_body: built.body.clone(),
            response_status: 0,
            response_headers: BTreeMap::new(),
            response_body: None,
            duration_ms: elapsed_ms(timer),
            success: false,
            error: Some(error),
        }
    }
}

fn elapsed_ms(timer: std::time::Instant) -> u64 {
    (timer.elapsed().as_millis() as u64).max(1)
}

fn to_reqwest_method(method: HttpMethod) -> reqwest::Method {
    match method {
        HttpMethod::Get => reqwest::Method::GET,
        HttpMethod::Post => reqwest::Method::POST,
        HttpMethod::Put => reqwest::Method::PUT,
        HttpMethod::Delete => reqwest::Method::DELETE,
        HttpMethod::Patch => reqwest::Method::PATCH,
        HttpMethod::Head => reqwest::Method::HEAD,
    }
}
