use crate::domain::entities::incoming_webhook::IncomingWebhookDefinition;
use crate::domain::value_objects::ids::IncomingWebhookId;
use crate::domain::value_objects::timestamps::Timestamp;
use time::OffsetDateTime;

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct IncomingWebhookRow {
    pub id: uuid::Uuid,
    pub name: String,
    pub description: String,
    pub endpoint_path: String,
    pub secret_key: String,
    pub enabled: bool,
    pub last_called_at: Option<OffsetDateTime>,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

impl IncomingWebhookRow {
    pub fn from_definition(definition: &IncomingWebhookDefinition) -> Self {
        Self {
            id: definition.id.0,
            name: definition.name.clone(),
            description: definition.description.clone(),
            endpoint_path: definition.endpoint_path.clone(),
            secret_key: definition.secret_key.clone(),
            enabled: definition.enabled,
            last_called_at: definition.last_called_at.map(|t| t.as_inner()),
            created_at: definition.created_at.as_inner(),
            updated_at: definition.updated_at.as_inner(),
        }
    }

    pub fn into_definition(self) -> IncomingWebhookDefinition {
        IncomingWebhookDefinition {
            id: IncomingWebhookId(self.id),
            name: self.name,
            description: self.description,
            endpoint_path: self.endpoint_path,
            secret_key: self.secret_key,
            enabled: self.enabled,
            last_called_at: self.last_called_at.map(Timestamp::from),
            created_at: Timestamp::from(self.created_at),
            updated_at: Timestamp::from(self.updated_at),
        }
    }
}
