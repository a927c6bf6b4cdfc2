// Use case: create_webhook.

use crate::application::context::AppContext;
use crate::domain::entities::webhook::{WebhookDefinition, WebhookDraft};
use crate::domain::services::notifier::Notification;
use crate::domain::value_objects::timestamps::Timestamp;
use crate::infrastructure::db::dto::WebhookRow;
use crate::infrastructure::db::stores::webhook_store::WebhookRepositoryError;

/// Creates a webhook definition from an editor draft.
pub struct CreateWebhookUseCase;

#[derive(Debug)]
pub enum CreateWebhookError {
    Validation(String),
    Conflict,
    Storage(String),
}

#[derive(Debug, Clone)]
pub struct CreateWebhookCommand {
    pub draft: WebhookDraft,
}

impl CreateWebhookUseCase {
    /// Create a new webhook and return what the store acknowledged.
    pub async fn execute(
        ctx: &AppContext,
        cmd: CreateWebhookCommand,
    ) -> Result<WebhookDefinition, CreateWebhookError> {
        // Step 1: Reject drafts that could never dispatch.
        if cmd.draft.name.trim().is_empty() {
            return Err(CreateWebhookError::Validation("name is required".to_string()));
        }
        if cmd.draft.url.trim().is_empty() {
            return Err(CreateWebhookError::Validation("url is required".to_string()));
        }

        // Step 2: Build the definition and persist it.
        let definition = WebhookDefinition::create(cmd.draft, Timestamp::now_utc());
        let stored = ctx
            .repos
            .webhook
            .insert(&WebhookRow::from_definition(&definition))
            .await
            .map_err(|e| match e {
                WebhookRepositoryError::Conflict => CreateWebhookError::Conflict,
                _ => CreateWebhookError::Storage(format!("{e:?}")),
            })?;

        // Step 3: Announce and return the stored definition.
        let stored = stored.into_definition();
        ctx.notifier.notify(Notification::WebhookCreated {
            name: stored.name.clone(),
        });
        Ok(stored)
    }
}

#[cfg(test)]
mod tests {
    use super::{CreateWebhookCommand, CreateWebhookError, CreateWebhookUseCase};
    use crate::application::context::test_support::test_context;
    use crate::domain::entities::webhook::{HttpMethod, Schedule, WebhookDraft};

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

    #[tokio::test]
    async fn given_valid_draft_when_execute_should_store_webhook() {
        let ctx = test_context();

        let stored = CreateWebhookUseCase::execute(&ctx, CreateWebhookCommand { draft: draft() })
            .await
            .unwrap();

        assert_eq!(stored.name, "deploy hook");
        assert_eq!(stored.last_execution_status, None);
        let listed = ctx.repos.webhook.list().await.unwrap();
        assert_eq!(listed.len(), 1);
    }

    #[tokio::test]
    async fn given_empty_name_when_execute_should_reject_without_storing() {
        let ctx = test_context();
        let mut invalid = draft();
        invalid.name = "  ".to_string();

        let result =
            CreateWebhookUseCase::execute(&ctx, CreateWebhookCommand { draft: invalid }).await;

        assert!(matches!(result, Err(CreateWebhookError::Validation(_))));
        assert!(ctx.repos.webhook.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn given_empty_url_when_execute_should_reject_without_storing() {
        let ctx = test_context();
        let mut invalid = draft();
        invalid.url = String::new();

        let result =
            CreateWebhookUseCase::execute(&ctx, CreateWebhookCommand { draft: invalid }).await;

        assert!(matches!(result, Err(CreateWebhookError::Validation(_))));
        assert!(ctx.repos.webhook.list().await.unwrap().is_empty());
    }
}
