use crate::domain::entities::execution_log::ExecutionLogEntry;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Serialize)]
pub struct ExecutionLogEntryResponse {
    pub id: String,
    pub webhook_id: String,
    pub webhook_name: String,
    pub timestamp: String,
    pub request_url: String,
    pub request_method: String,
    pub request_headers: BTreeMap<String, String>,
    pub request_body: Option<String>,
    pub response_status: u16,
    pub response_headers: BTreeMap<String, String>,
    pub response_body: Option<String>,
    pub duration_ms: u64,
    pub success: bool,
    pub error: Option<String>,
}

impl ExecutionLogEntryResponse {
    pub fn from_entry(entry: ExecutionLogEntry) -> Self {
        Self {
            id: entry.id.to_string(),
            webhook_id: entry.webhook_id.to_string(),
            webhook_name: entry.webhook_name,
            timestamp: entry.timestamp.rfc3339(),
            request_url: entry.request_url,
            request_method: entry.request_method.as_str().to_string(),
            request_headers: entry.request_headers,
            request_body: entry.request_body,
            response_status: entry.response_status,
            response_headers: entry.response_headers,
            response_body: entry.response_body,
            duration_ms: entry.duration_ms,
            success: entry.success,
            error: entry.error,
        }
    }
}
