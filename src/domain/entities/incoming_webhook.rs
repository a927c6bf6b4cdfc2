use crate::domain::value_objects::ids::IncomingWebhookId;
use crate::domain::value_objects::timestamps::Timestamp;
use uuid::Uuid;

/// A passive, externally-triggered receiver definition. It carries no
/// dispatch logic; the receiving endpoint itself lives server-side.
#[derive(Debug, Clone, PartialEq)]
pub struct IncomingWebhookDefinition {
    pub id: IncomingWebhookId,
    pub name: String,
    pub description: String,
    pub endpoint_path: String,
    pub secret_key: String,
    pub enabled: bool,
    pub last_called_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone)]
pub struct IncomingWebhookDraft {
    pub name: String,
    pub description: String,
    pub enabled: bool,
}

impl IncomingWebhookDefinition {
    /// Build a fresh definition. Endpoint path and secret are generated,
    /// never user-supplied.
    pub fn create(draft: IncomingWebhookDraft, now: Timestamp) -> Self {
        let id = IncomingWebhookId::new();
        Self {
            id,
            name: draft.name,
            description: draft.description,
            endpoint_path: format!("/hooks/{}", id.0.simple()),
            secret_key: Uuid::new_v4().simple().to_string(),
            enabled: draft.enabled,
            last_called_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace the editable fields; path and secret are immutable.
    pub fn apply_draft(&mut self, draft: IncomingWebhookDraft, now: Timestamp) {
        self.name = draft.name;
        self.description = draft.description;
        self.enabled = draft.enabled;
        self.updated_at = now;
    }
}
