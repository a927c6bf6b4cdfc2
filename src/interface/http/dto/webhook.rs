use crate::domain::entities::webhook::{
    BodyContentType, BodySpec, HttpMethod, KeyValueEntry, Schedule, Tag, WebhookDefinition,
    WebhookDraft,
};
use crate::domain::value_objects::ids::TagId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct KeyValueEntryPayload {
    pub key: String,
    pub value: String,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

#[derive(Debug, Deserialize)]
pub struct BodyPayload {
    pub content_type: String,
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct TagPayload {
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub color: String,
}

/// Create/update payload; update carries full-object replace semantics.
#[derive(Debug, Deserialize)]
pub struct WebhookPayload {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub url: String,
    pub method: String,
    #[serde(default)]
    pub headers: Vec<KeyValueEntryPayload>,
    #[serde(default)]
    pub params: Vec<KeyValueEntryPayload>,
    pub body: Option<BodyPayload>,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default)]
    pub tags: Vec<TagPayload>,
    #[serde(default = "default_schedule")]
    pub schedule: String,
}

fn default_schedule() -> String {
    "manual".to_string()
}

impl WebhookPayload {
    /// Translate the payload into a draft; unknown enum values are
    /// rejected here so use cases never see them.
    pub fn into_draft(self) -> Result<WebhookDraft, String> {
        let method = HttpMethod::parse(&self.method)
            .ok_or_else(|| format!("unsupported method: {}", self.method))?;
        let schedule = Schedule::parse(&self.schedule)
            .ok_or_else(|| format!("unsupported schedule: {}", self.schedule))?;
        let body = self
            .body
            .map(|body| {
                let content_type = match body.content_type.as_str() {
                    "json" => BodyContentType::Json,
                    "form" => BodyContentType::Form,
                    "text" => BodyContentType::Text,
                    other => return Err(format!("unsupported content type: {other}")),
                };
                Ok(BodySpec {
                    content_type,
                    content: body.content,
                })
            })
            .transpose()?;
        let tags = self
            .tags
            .into_iter()
            .map(|tag| Tag {
                id: tag
                    .id
                    .as_deref()
                    .and_then(TagId::parse)
                    .unwrap_or_default(),
                name: tag.name,
                color: tag.color,
            })
            .collect();

        Ok(WebhookDraft {
            name: self.name,
            description: self.description,
            url: self.url,
            method,
            headers: self.headers.into_iter().map(into_entry).collect(),
            params: self.params.into_iter().map(into_entry).collect(),
            body,
            enabled: self.enabled,
            tags,
            schedule,
        })
    }
}

fn into_entry(payload: KeyValueEntryPayload) -> KeyValueEntry {
    KeyValueEntry {
        key: payload.key,
        value: payload.value,
        enabled: payload.enabled,
    }
}

#[derive(Debug, Serialize)]
pub struct WebhookResponse {
    pub id: String,
    pub name: String,
    pub description: String,
    pub url: String,
    pub method: String,
    pub headers: Vec<KeyValueEntry>,
    pub params: Vec<KeyValueEntry>,
    pub body: Option<BodySpec>,
    pub enabled: bool,
    pub tags: Vec<Tag>,
    pub schedule: String,
    pub last_executed_at: Option<String>,
    pub last_execution_status: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl WebhookResponse {
    pub fn from_definition(definition: WebhookDefinition) -> Self {
        Self {
            id: definition.id.to_string(),
            name: definition.name,
            description: definition.description,
            url: definition.url,
            method: definition.method.as_str().to_string(),
            headers: definition.headers,
            params: definition.params,
            body: definition.body,
            enabled: definition.enabled,
            tags: definition.tags,
            schedule: definition.schedule.as_str().to_string(),
            last_executed_at: definition.last_executed_at.map(|t| t.rfc3339()),
            last_execution_status: definition
                .last_execution_status
                .map(|s| s.as_str().to_string()),
            created_at: definition.created_at.rfc3339(),
            updated_at: definition.updated_at.rfc3339(),
        }
    }
}
