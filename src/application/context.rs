use std::sync::Arc;

use crate::application::session::SessionState;
use crate::application::test_slot::TestSlot;
use crate::config::Settings;
use crate::domain::services::notifier::Notifier;
use crate::infrastructure::db::repositories::Repositories;

/// Shared application resources used by use cases. Built once at process
/// start and passed explicitly; there is no ambient provider.
pub struct AppContext {
    pub repos: Repositories,
    pub settings: Settings,
    pub session: SessionState,
    pub test_slot: TestSlot,
    pub notifier: Arc<dyn Notifier>,
}

impl AppContext {
    /// Build a new application context with shared repositories and services.
    pub fn new(repos: Repositories, settings: Settings, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            repos,
            settings,
            session: SessionState::new(),
            test_slot: TestSlot::new(),
            notifier,
        }
    }
}
