use crate::domain::entities::incoming_webhook::{IncomingWebhookDefinition, IncomingWebhookDraft};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct IncomingWebhookPayload {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

impl IncomingWebhookPayload {
    pub fn into_draft(self) -> IncomingWebhookDraft {
        IncomingWebhookDraft {
            name: self.name,
            description: self.description,
            enabled: self.enabled,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct IncomingWebhookResponse {
    pub id: String,
    pub name: String,
    pub description: String,
    pub endpoint_path: String,
    pub secret_key: String,
    pub enabled: bool,
    pub last_called_at: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl IncomingWebhookResponse {
    pub fn from_definition(definition: IncomingWebhookDefinition) -> Self {
        Self {
            id: definition.id.to_string(),
            name: definition.name,
            description: definition.description,
            endpoint_path: definition.endpoint_path,
            secret_key: definition.secret_key,
            enabled: definition.enabled,
            last_called_at: definition.last_called_at.map(|t| t.rfc3339()),
            created_at: definition.created_at.rfc3339(),
            updated_at: definition.updated_at.rfc3339(),
        }
    }
}
