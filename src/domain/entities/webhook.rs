use crate::domain::value_objects::ids::{TagId, WebhookId};
use crate::domain::value_objects::timestamps::Timestamp;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
    Patch,
    Head,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Head => "HEAD",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.to_ascii_uppercase().as_str() {
            "GET" => Some(HttpMethod::Get),
            "POST" => Some(HttpMethod::Post),
            "PUT" => Some(HttpMethod::Put),
            "DELETE" => Some(HttpMethod::Delete),
            "PATCH" => Some(HttpMethod::Patch),
            "HEAD" => Some(HttpMethod::Head),
            _ => None,
        }
    }

    /// Methods whose requests never carry a body.
    pub fn forbids_body(&self) -> bool {
        matches!(self, HttpMethod::Get | HttpMethod::Head)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExecutionStatus {
    Success,
    Error,
}

impl ExecutionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExecutionStatus::Success => "success",
            ExecutionStatus::Error => "error",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "success" => Some(ExecutionStatus::Success),
            "error" => Some(ExecutionStatus::Error),
            _ => None,
        }
    }

    pub fn from_success(success: bool) -> Self {
        if success {
            ExecutionStatus::Success
        } else {
            ExecutionStatus::Error
        }
    }
}

/// One header or query-param row as configured in the editor. Disabled
/// entries stay in the configuration but are excluded from built requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyValueEntry {
    pub key: String,
    pub value: String,
    pub enabled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BodyContentType {
    Json,
    Form,
    Text,
}

impl BodyContentType {
    pub fn mime(&self) -> &'static str {
        match self {
            BodyContentType::Json => "application/json",
            BodyContentType::Form => "application/x-www-form-urlencoded",
            BodyContentType::Text => "text/plain",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BodySpec {
    pub content_type: BodyContentType,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: TagId,
    pub name: String,
    pub color: String,
}

/// Informational only; nothing in the system acts on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Schedule {
    Manual,
    Daily,
    Weekly,
    Interval,
}

impl Schedule {
    pub fn as_str(&self) -> &'static str {
        match self {
            Schedule::Manual => "manual",
            Schedule::Daily => "daily",
            Schedule::Weekly => "weekly",
            Schedule::Interval => "interval",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "manual" => Some(Schedule::Manual),
            "daily" => Some(Schedule::Daily),
            "weekly" => Some(Schedule::Weekly),
            "interval" => Some(Schedule::Interval),
            _ => None,
        }
    }
}

/// A user-configured outbound HTTP call descriptor.
#[derive(Debug, Clone, PartialEq)]
pub struct WebhookDefinition {
    pub id: WebhookId,
    pub name: String,
    pub description: String,
    pub url: String,
    pub method: HttpMethod,
    pub headers: Vec<KeyValueEntry>,
    pub params: Vec<KeyValueEntry>,
    pub body: Option<BodySpec>,
    pub enabled: bool,
    pub tags: Vec<Tag>,
    pub schedule: Schedule,
    pub last_executed_at: Option<Timestamp>,
    pub last_execution_status: Option<ExecutionStatus>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Mutable fields accepted by create and update (full-object replace).
#[derive(Debug, Clone)]
pub struct WebhookDraft {
    pub name: String,
    pub description: String,
    pub url: String,
    pub method: HttpMethod,
    pub headers: Vec<KeyValueEntry>,
    pub params: Vec<KeyValueEntry>,
    pub body: Option<BodySpec>,
    pub enabled: bool,
    pub tags: Vec<Tag>,
    pub schedule: Schedule,
}

impl WebhookDefinition {
    /// Build a fresh definition from a draft. Execution status starts empty.
    pub fn create(draft: WebhookDraft, now: Timestamp) -> Self {
        Self {
            id: WebhookId::new(),
            name: draft.name,
            description: draft.description,
            url: draft.url,
            method: draft.method,
            headers: draft.headers,
            params: draft.params,
            body: draft.body,
            enabled: draft.enabled,
            tags: draft.tags,
            schedule: draft.schedule,
            last_executed_at: None,
            last_execution_status: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace every draft field, preserving identity, creation time, and
    /// the execution-status cache.
    pub fn apply_draft(&mut self, draft: WebhookDraft, now: Timestamp) {
        self.name = draft.name;
        self.description = draft.description;
        self.url = draft.url;
        self.method = draft.method;
        self.headers = draft.headers;
        self.params = draft.params;
        self.body = draft.body;
        self.enabled = draft.enabled;
        self.tags = draft.tags;
        self.schedule = draft.schedule;
        self.updated_at = now;
    }

    /// Record a non-test dispatch outcome. Both cache fields move together;
    /// an outcome older than the recorded one is ignored (last-started wins).
    pub fn record_execution(&mut self, executed_at: Timestamp, status: ExecutionStatus) {
        if let Some(previous) = self.last_executed_at {
            if executed_at < previous {
                return;
            }
        }
        self.last_executed_at = Some(executed_at);
        self.last_execution_status = Some(status);
        self.updated_at = executed_at;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::OffsetDateTime;

    fn draft() -> WebhookDraft {
        WebhookDraft {
            name: "deploy hook".to_string(),
            description: String::new(),
            url: "https://api.example.com/deploy".to_string(),
            method: HttpMethod::Post,
            headers: vec![],
            params: vec![],
            body: None,
            enabled: true,
            tags: vec![],
            schedule: Schedule::Manual,
        }
    }

    fn at(unix: i64) -> Timestamp {
        Timestamp::from(OffsetDateTime::from_unix_timestamp(unix).unwrap())
    }

    #[test]
    fn given_draft_when_create_should_start_with_empty_execution_cache() {
        let webhook = WebhookDefinition::create(draft(), Timestamp::now_utc());
        assert_eq!(webhook.last_executed_at, None);
        assert_eq!(webhook.last_execution_status, None);
        assert_eq!(webhook.created_at, webhook.updated_at);
    }

    #[test]
    fn given_apply_draft_when_called_should_preserve_id_and_execution_cache() {
        let mut webhook = WebhookDefinition::create(draft(), at(1_000));
        webhook.record_execution(at(2_000), ExecutionStatus::Success);
        let id = webhook.id;

        let mut replacement = draft();
        replacement.name = "renamed".to_string();
        replacement.enabled = false;
        webhook.apply_draft(replacement, at(3_000));

        assert_eq!(webhook.id, id);
        assert_eq!(webhook.name, "renamed");
        assert!(!webhook.enabled);
        assert_eq!(webhook.created_at, at(1_000));
        assert_eq!(webhook.last_executed_at, Some(at(2_000)));
        assert_eq!(webhook.last_execution_status, Some(ExecutionStatus::Success));
        assert_eq!(webhook.updated_at, at(3_000));
    }

    #[test]
    fn given_record_execution_when_called_should_set_both_cache_fields() {
        let mut webhook = WebhookDefinition::create(draft(), at(1_000));
        webhook.record_execution(at(2_000), ExecutionStatus::Error);
        assert_eq!(webhook.last_executed_at, Some(at(2_000)));
        assert_eq!(webhook.last_execution_status, Some(ExecutionStatus::Error));
    }

    #[test]
    fn given_stale_outcome_when_record_execution_should_keep_newer_one() {
        let mut webhook = WebhookDefinition::create(draft(), at(1_000));
        webhook.record_execution(at(5_000), ExecutionStatus::Success);
        webhook.record_execution(at(4_000), ExecutionStatus::Error);
        assert_eq!(webhook.last_executed_at, Some(at(5_000)));
        assert_eq!(webhook.last_execution_status, Some(ExecutionStatus::Success));
    }

    #[test]
    fn given_method_strings_when_parse_should_round_trip() {
        for method in [
            HttpMethod::Get,
            HttpMethod::Post,
            HttpMethod::Put,
            HttpMethod::Delete,
            HttpMethod::Patch,
            HttpMethod::Head,
        ] {
            assert_eq!(HttpMethod::parse(method.as_str()), Some(method));
        }
        assert_eq!(HttpMethod::parse("TRACE"), None);
    }

    #[test]
    fn given_get_and_head_when_forbids_body_should_be_true() {
        assert!(HttpMethod::Get.forbids_body());
        assert!(HttpMethod::Head.forbids_body());
        assert!(!HttpMethod::Post.forbids_body());
    }

    #[test]
    fn given_content_types_when_mime_should_match_transport_values() {
        assert_eq!(BodyContentType::Json.mime(), "application/json");
        assert_eq!(
            BodyContentType::Form.mime(),
            "application/x-www-form-urlencoded"
        );
        assert_eq!(BodyContentType::Text.mime(), "text/plain");
    }
}
