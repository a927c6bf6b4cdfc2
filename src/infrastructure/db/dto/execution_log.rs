use crate::domain::entities::execution_log::ExecutionLogEntry;
use crate::domain::entities::webhook::HttpMethod;
use crate::domain::value_objects::ids::{LogEntryId, WebhookId};
use crate::domain::value_objects::timestamps::Timestamp;
use sqlx::types::Json;
use std::collections::BTreeMap;
use time::OffsetDateTime;

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ExecutionLogRow {
    pub id: uuid::Uuid,
    pub webhook_id: uuid::Uuid,
    pub webhook_name: String,
    pub timestamp: OffsetDateTime,
    pub request_url: String,
    pub request_method: String,
    pub request_headers: Json<BTreeMap<String, String>>,
    pub request_body: Option<String>,
    pub response_status: i32,
    pub response_headers: Json<BTreeMap<String, String>>,
    pub response_body: Option<String>,
    pub duration_ms: i64,
    pub success: bool,
    pub error: Option<String>,
}

impl ExecutionLogRow {
    pub fn from_entry(entry: &ExecutionLogEntry) -> Self {
        Self {
            id: entry.id.0,
            webhook_id: entry.webhook_id.0,
            webhook_name: entry.webhook_name.clone(),
            timestamp: entry.timestamp.as_inner(),
            request_url: entry.request_url.clone(),
            request_method: entry.request_method.as_str().to_string(),
            request_headers: Json(entry.request_headers.clone()),
            request_body: entry.request_body.clone(),
            response_status: i32::from(entry.response_status),
            response_headers: Json(entry.response_headers.clone()),
            response_body: entry.response_body.clone(),
            duration_ms: entry.duration_ms as i64,
            success: entry.success,
            error: entry.error.clone(),
        }
    }

    pub fn into_entry(self) -> ExecutionLogEntry {
        ExecutionLogEntry {
            id: LogEntryId(self.id),
            webhook_id: WebhookId(self.webhook_id),
            webhook_name: self.webhook_name,
            timestamp: Timestamp::from(self.timestamp),
            request_url: self.request_url,
            request_method: HttpMethod::parse(&self.request_method).unwrap_or(HttpMethod::Get),
            request_headers: self.request_headers.0,
            request_body: self.request_body,
            response_status: u16::try_from(self.response_status).unwrap_or(0),
            response_headers: self.response_headers.0,
            response_body: self.response_body,
            duration_ms: u64::try_from(self.duration_ms).unwrap_or(0),
            success: self.success,
            error: self.error,
        }
    }
}
