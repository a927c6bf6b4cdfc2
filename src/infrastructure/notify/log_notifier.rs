use crate::domain::services::notifier::{Notification, Notifier};
use tracing::{info, warn};

/// Emits user-facing notifications as structured log events. Best effort
/// only; callers never wait on delivery.
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, notification: Notification) {
        match notification {
            Notification::WebhookCreated { name } => {
                info!(name = %name, "webhook_created");
            }
            Notification::WebhookUpdated { name } => {
                info!(name = %name, "webhook_updated");
            }
            Notification::WebhookDeleted { name } => {
                info!(name = %name, "webhook_deleted");
            }
            Notification::DispatchCompleted {
                webhook_id,
                success,
            } => {
                info!(webhook_id = %webhook_id, success, "dispatch_completed");
            }
            Notification::IncomingWebhookCreated { name } => {
                info!(name = %name, "incoming_webhook_created");
            }
            Notification::IncomingWebhookUpdated { name } => {
                info!(name = %name, "incoming_webhook_updated");
            }
            Notification::IncomingWebhookDeleted { name } => {
                info!(name = %name, "incoming_webhook_deleted");
            }
            Notification::Failure { detail } => {
                warn!(detail = %detail, "operation_failed");
            }
        }
    }
}
