//! In-memory transfer clipboard.

use std::sync::{Mutex, MutexGuard};

use anyhow::Result;
use serde_json::Value;

use na_core::ports::TransferClipboardPort;

/// Single-slot staging store living for the host session.
///
/// Cut/copy replace the slot, paste reads it without consuming. The slot
/// keeps the writer's MIME identifier next to the data so readers can tell
/// an attachments payload from foreign clipboard content. Share one handle
/// (`Arc<InMemoryClipboard>`) per process; the clipboard is ambient state
/// with last-writer-wins semantics.
#[derive(Debug, Default)]
pub struct InMemoryClipboard {
    slot: Mutex<Option<(String, Value)>>,
}

impl InMemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&self) -> MutexGuard<'_, Option<(String, Value)>> {
        // A poisoned lock only means a writer panicked mid-store; the slot
        // itself is still a valid Option.
        self.slot.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl TransferClipboardPort for InMemoryClipboard {
    fn clear(&self) {
        self.slot().take();
    }

    fn set_data(&self, mime: &str, data: Value) -> Result<()> {
        *self.slot() = Some((mime.to_owned(), data));
        Ok(())
    }

    fn get_data(&self, mime: &str) -> Option<Value> {
        self.slot()
            .as_ref()
            .filter(|(key, _)| key == mime)
            .map(|(_, value)| value.clone())
    }

    fn has_data(&self, mime: &str) -> bool {
        self.slot().as_ref().is_some_and(|(key, _)| key == mime)
    }
}
