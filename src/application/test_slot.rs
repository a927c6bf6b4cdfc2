use crate::domain::entities::execution_log::ExecutionLogEntry;
use std::sync::Mutex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SandboxMode {
    Normal,
    Testing,
}

/// Sandbox-mode state and the single ephemeral test-result slot. Test
/// dispatches land here instead of the durable log; a second dispatch
/// overwrites the slot. Leaving test mode keeps the last result until it
/// is cleared explicitly.
pub struct TestSlot {
    inner: Mutex<TestSlotInner>,
}

struct TestSlotInner {
    mode: SandboxMode,
    last_result: Option<ExecutionLogEntry>,
}

impl Default for TestSlot {
    fn default() -> Self {
        Self::new()
    }
}

impl TestSlot {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(TestSlotInner {
                mode: SandboxMode::Normal,
                last_result: None,
            }),
        }
    }

    pub fn mode(&self) -> SandboxMode {
        self.inner.lock().unwrap().mode
    }

    /// Enter test mode, discarding any stale result from a previous session.
    pub fn enter_testing(&self) {
        let mut inner = self.inner.lock().unwrap();
        inner.mode = SandboxMode::Testing;
        inner.last_result = None;
    }

    /// Leave test mode. In-flight dispatches and the stored result are
    /// unaffected.
    pub fn leave_testing(&self) {
        self.inner.lock().unwrap().mode = SandboxMode::Normal;
    }

    /// Overwrite the slot with the latest test outcome.
    pub fn store_result(&self, entry: ExecutionLogEntry) {
        self.inner.lock().unwrap().last_result = Some(entry);
    }

    pub fn last_result(&self) -> Option<ExecutionLogEntry> {
        self.inner.lock().unwrap().last_result.clone()
    }

    pub fn clear_result(&self) {
        self.inner.lock().unwrap().last_result = None;
    }
}
