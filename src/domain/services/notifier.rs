use crate::domain::value_objects::ids::WebhookId;

/// A user-facing, best-effort notification. Delivery is fire-and-forget;
/// nothing in the system waits on or retries these.
#[derive(Debug, Clone, PartialEq)]
pub enum Notification {
    WebhookCreated { name: String },
    WebhookUpdated { name: String },
    WebhookDeleted { name: String },
    DispatchCompleted { webhook_id: WebhookId, success: bool },
    IncomingWebhookCreated { name: String },
    IncomingWebhookUpdated { name: String },
    IncomingWebhookDeleted { name: String },
    Failure { detail: String },
}

pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Swallows everything; used in tests that don't assert on notifications.
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn notify(&self, _notification: Notification) {}
}
