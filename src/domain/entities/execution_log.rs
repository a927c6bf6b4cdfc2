use crate::domain::entities::webhook::HttpMethod;
use crate::domain::value_objects::ids::{LogEntryId, WebhookId};
use crate::domain::value_objects::timestamps::Timestamp;
use std::collections::BTreeMap;

/// Durable record of one non-test dispatch attempt. Entries are written
/// once and never mutated; `webhook_name` is a snapshot taken at dispatch
/// time and is not kept in sync with later renames.
#[derive(Debug, Clone, PartialEq)]
pub struct ExecutionLogEntry {
    pub id: LogEntryId,
    pub webhook_id: WebhookId,
    pub webhook_name: String,
    pub timestamp: Timestamp,
    pub request_url: String,
    pub request_method: HttpMethod,
    pub request_headers: BTreeMap<String, String>,
    pub request_body: Option<String>,
    /// Zero when the request never completed (transport failure).
    pub response_status: u16,
    pub response_headers: BTreeMap<String, String>,
    pub response_body: Option<String>,
    pub duration_ms: u64,
    pub success: bool,
    pub error: Option<String>,
}

impl ExecutionLogEntry {
    pub fn is_transport_failure(&self) -> bool {
        self.response_status == 0
    }
}

/// `success` iff the response status is in the 2xx range.
pub fn classify_status(status: u16) -> bool {
    (200..300).contains(&status)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_statuses_when_classified_should_only_accept_2xx() {
        assert!(classify_status(200));
        assert!(classify_status(204));
        assert!(classify_status(299));
        assert!(!classify_status(199));
        assert!(!classify_status(300));
        assert!(!classify_status(404));
        assert!(!classify_status(500));
        assert!(!classify_status(0));
    }

    #[test]
    fn given_zero_status_when_checked_should_be_transport_failure() {
        let entry = ExecutionLogEntry {
            id: LogEntryId::new(),
            webhook_id: WebhookId::new(),
            webhook_name: "hook".to_string(),
            timestamp: Timestamp::now_utc(),
            request_url: "https://api.example.com".to_string(),
            request_method: HttpMethod::Get,
            request_headers: BTreeMap::new(),
            request_body: None,
            response_status: 0,
            response_headers: BTreeMap::new(),
            response_body: None,
            duration_ms: 12,
            success: false,
            error: Some("connection refused".to_string()),
        };
        assert!(entry.is_transport_failure());
    }
}
