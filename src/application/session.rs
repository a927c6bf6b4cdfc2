use crate::domain::entities::incoming_webhook::IncomingWebhookDefinition;
use crate::domain::entities::webhook::WebhookDefinition;
use crate::domain::value_objects::ids::{IncomingWebhookId, WebhookId};
use std::sync::Mutex;

/// Selection and modal state shared by the presentation layer. A non-null
/// selection while a modal is open discriminates edit from create.
pub struct SessionState {
    inner: Mutex<SessionInner>,
}

#[derive(Default)]
struct SessionInner {
    selected_webhook: Option<WebhookDefinition>,
    selected_incoming_webhook: Option<IncomingWebhookDefinition>,
    webhook_modal_open: bool,
    incoming_webhook_modal_open: bool,
}

/// Point-in-time copy of the session for rendering.
#[derive(Debug, Clone)]
pub struct SessionSnapshot {
    pub selected_webhook: Option<WebhookDefinition>,
    pub selected_incoming_webhook: Option<IncomingWebhookDefinition>,
    pub webhook_modal_open: bool,
    pub incoming_webhook_modal_open: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(SessionInner::default()),
        }
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let inner = self.inner.lock().unwrap();
        SessionSnapshot {
            selected_webhook: inner.selected_webhook.clone(),
            selected_incoming_webhook: inner.selected_incoming_webhook.clone(),
            webhook_modal_open: inner.webhook_modal_open,
            incoming_webhook_modal_open: inner.incoming_webhook_modal_open,
        }
    }

    /// Open the webhook modal in edit mode, selecting the target.
    pub fn open_webhook_editor(&self, webhook: WebhookDefinition) {
        let mut inner = self.inner.lock().unwrap();
        inner.selected_webhook = Some(webhook);
        inner.webhook_modal_open = true;
    }

    /// Open the webhook modal in create mode; selection is cleared first.
    pub fn open_webhook_creator(&self) {
        let mut inner = self.inner.lock().unwrap();
        inner.selected_webhook = None;
        inner.webhook_modal_open = true;
    }

    /// Close the webhook modal (cancel or after save), clearing selection.
    pub fn close_webhook_modal(&self) {
        let mut inner = self.inner.lock().unwrap();
        inner.selected_webhook = None;
        inner.webhook_modal_open = false;
    }

    pub fn open_incoming_webhook_editor(&self, endpoint: IncomingWebhookDefinition) {
        let mut inner = self.inner.lock().unwrap();
        inner.selected_incoming_webhook = Some(endpoint);
        inner.incoming_webhook_modal_open = true;
    }

    pub fn open_incoming_webhook_creator(&self) {
        let mut inner = self.inner.lock().unwrap();
        inner.selected_incoming_webhook = None;
        inner.incoming_webhook_modal_open = true;
    }

    pub fn close_incoming_webhook_modal(&self) {
        let mut inner = self.inner.lock().unwrap();
        inner.selected_incoming_webhook = None;
        inner.incoming_webhook_modal_open = false;
    }

    pub fn selected_webhook_id(&self) -> Option<WebhookId> {
        self.inner
            .lock()
            .unwrap()
            .selected_webhook
            .as_ref()
            .map(|w| w.id)
    }

    /// Replace the selected webhook snapshot when it is the given one, so
    /// dispatch outcomes show up without reopening the modal.
    pub fn refresh_selected_webhook(&self, webhook: &WebhookDefinition) {
        let mut inner = self.inner.lock().unwrap();
        if let Some(selected) = &inner.selected_webhook {
            if selected.id == webhook.id {
                inner.selected_webhook = Some(webhook.clone());
            }
        }
    }

    /// Drop the selection when the given webhook is deleted.
    pub fn clear_webhook_selection_if(&self, webhook_id: WebhookId) {
        let mut inner = self.inner.lock().unwrap();
        if inner
            .selected_webhook
            .as_ref()
            .map(|w| w.id == webhook_id)
            .unwrap_or(false)
        {
            inner.selected_webhook = None;
        }
    }

    /// Drop the selection when the given endpoint is deleted.
    pub fn clear_incoming_webhook_selection_if(&self, incoming_webhook_id: IncomingWebhookId) {
        let mut inner = self.inner.lock().unwrap();
        if inner
            .selected_incoming_webhook
            .as_ref()
            .map(|w| w.id == incoming_webhook_id)
            .unwrap_or(false)
        {
            inner.selected_incoming_webhook = None;
        }
    }
}
