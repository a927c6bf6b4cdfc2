use crate::domain::entities::webhook::{
    BodySpec, ExecutionStatus, HttpMethod, KeyValueEntry, Schedule, Tag, WebhookDefinition,
};
use crate::domain::value_objects::ids::WebhookId;
use crate::domain::value_objects::timestamps::Timestamp;
use sqlx::types::Json;
use time::OffsetDateTime;

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct WebhookRow {
    pub id: uuid::Uuid,
    pub name: String,
    pub description: String,
    pub url: String,
    pub method: String,
    pub headers: Json<Vec<KeyValueEntry>>,
    pub params: Json<Vec<KeyValueEntry>>,
    pub body: Option<Json<BodySpec>>,
    pub enabled: bool,
    pub tags: Json<Vec<Tag>>,
    pub schedule: String,
    pub last_executed_at: Option<OffsetDateTime>,
    pub last_execution_status: Option<String>,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

impl WebhookRow {
    pub fn from_definition(definition: &WebhookDefinition) -> Self {
        Self {
            id: definition.id.0,
            name: definition.name.clone(),
            description: definition.description.clone(),
            url: definition.url.clone(),
            method: definition.method.as_str().to_string(),
            headers: Json(definition.headers.clone()),
            params: Json(definition.params.clone()),
            body: definition.body.clone().map(Json),
            enabled: definition.enabled,
            tags: Json(definition.tags.clone()),
            schedule: definition.schedule.as_str().to_string(),
            last_executed_at: definition.last_executed_at.map(|t| t.as_inner()),
            last_execution_status: definition
                .last_execution_status
                .map(|s| s.as_str().to_string()),
            created_at: definition.created_at.as_inner(),
            updated_at: definition.updated_at.as_inner(),
        }
    }

    pub fn into_definition(self) -> WebhookDefinition {
        WebhookDefinition {
            id: WebhookId(self.id),
            name: self.name,
            description: self.description,
            url: self.url,
            method: HttpMethod::parse(&self.method).unwrap_or(HttpMethod::Get),
            headers: self.headers.0,
            params: self.params.0,
            body: self.body.map(|b| b.0),
            enabled: self.enabled,
            tags: self.tags.0,
            schedule: Schedule::parse(&self.schedule).unwrap_or(Schedule::Manual),
            last_executed_at: self.last_executed_at.map(Timestamp::from),
            last_execution_status: self
                .last_execution_status
                .as_deref()
                .and_then(ExecutionStatus::parse),
            created_at: Timestamp::from(self.created_at),
            updated_at: Timestamp::from(self.updated_at),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::WebhookRow;
    use crate::domain::entities::webhook::{
        BodyContentType, BodySpec, ExecutionStatus, HttpMethod, KeyValueEntry, Schedule,
        WebhookDefinition, WebhookDraft,
    };
    use crate::domain::value_objects::timestamps::Timestamp;

    fn sample_definition() -> WebhookDefinition {
        WebhookDefinition::create(
            WebhookDraft {
                name: "deploy hook".to_string(),
                description: "fires on deploy".to_string(),
                url: "https://api.example.com/deploy".to_string(),
                method: HttpMethod::Post,
                headers: vec![KeyValueEntry {
                    key: "X-Token".to_string(),
                    value: "secret".to_string(),
                    enabled: true,
                }],
                params: vec![],
                body: Some(BodySpec {
                    content_type: BodyContentType::Json,
                    content: "{\"a\":1}".to_string(),
                }),
                enabled: true,
                tags: vec![],
                schedule: Schedule::Daily,
            },
            Timestamp::now_utc(),
        )
    }

    #[test]
    fn given_definition_when_from_definition_should_map_fields() {
        let mut definition = sample_definition();
        definition.record_execution(Timestamp::now_utc(), ExecutionStatus::Success);

        let row = WebhookRow::from_definition(&definition);

        assert_eq!(row.id, definition.id.0);
        assert_eq!(row.method, "POST");
        assert_eq!(row.schedule, "daily");
        assert_eq!(row.headers.0, definition.headers);
        assert_eq!(row.last_execution_status.as_deref(), Some("success"));
        assert_eq!(
            row.last_executed_at,
            definition.last_executed_at.map(|t| t.as_inner())
        );
    }

    #[test]
    fn given_row_when_into_definition_should_round_trip() {
        let definition = sample_definition();
        let restored = WebhookRow::from_definition(&definition).into_definition();
        assert_eq!(restored, definition);
    }

    #[test]
    fn given_row_with_unknown_values_when_into_definition_should_map_defaults() {
        let mut row = WebhookRow::from_definition(&sample_definition());
        row.method = "BOGUS".to_string();
        row.schedule = "yearly".to_string();
        row.last_execution_status = Some("unknown".to_string());

        let definition = row.into_definition();

        assert_eq!(definition.method, HttpMethod::Get);
        assert_eq!(definition.schedule, Schedule::Manual);
        assert_eq!(definition.last_execution_status, None);
    }
}
