use std::sync::Arc;

use anyhow::Result;
use tracing::{debug, info};

use na_core::attachments::{AttachmentsPayload, ATTACHMENTS_MIME};
use na_core::notebook::NotebookMode;
use na_core::ports::{NotebookPort, TransferClipboardPort};

use super::{capable_targets, has_selected_cells};

/// Whether a transfer clears its source cells after staging them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferKind {
    Copy,
    Cut,
}

/// Stage the attachments of the selected cells on the transfer clipboard.
///
/// Cut and copy share this body behind the [`TransferKind`] flag; only cut
/// clears the sources afterwards. The ordering invariant is
/// serialize-before-clear: sources are cleared only once the payload has
/// been written, so a failed write never loses data.
pub struct TransferCellAttachments {
    notebook: Arc<dyn NotebookPort>,
    clipboard: Arc<dyn TransferClipboardPort>,
}

impl TransferCellAttachments {
    pub fn new(
        notebook: Arc<dyn NotebookPort>,
        clipboard: Arc<dyn TransferClipboardPort>,
    ) -> Self {
        Self {
            notebook,
            clipboard,
        }
    }

    /// At least one cell is selected or active in the current notebook.
    pub fn is_enabled(&self) -> bool {
        has_selected_cells(self.notebook.as_ref())
    }

    pub fn execute(&self, kind: TransferKind) -> Result<()> {
        if !self.is_enabled() {
            return Ok(());
        }

        // 1. Command mode, so no text edit is in flight while cells mutate
        self.notebook.set_mode(NotebookMode::Command)?;

        // 2. The staging store only ever holds the latest transfer
        self.clipboard.clear();

        // 3. Capable cells of the selection, display order
        let sources = capable_targets(&self.notebook.cells());

        // 4. Serialize every source before any of them is cleared
        let mut entries = Vec::with_capacity(sources.len());
        for cell in &sources {
            entries.push(self.notebook.attachments(&cell.id)?);
        }
        let payload = AttachmentsPayload::new(entries);
        debug!(
            cells = sources.len(),
            bytes = payload.total_size_bytes(),
            "Staging cell attachments"
        );
        self.clipboard.set_data(ATTACHMENTS_MIME, payload.to_value()?)?;

        // 5. Cut only: clear the sources now that the payload is safe
        if kind == TransferKind::Cut {
            for cell in &sources {
                self.notebook.clear_attachments(&cell.id)?;
            }
        }

        // 6. The operation consumed the selection
        self.notebook.deselect_all()?;

        info!(cells = sources.len(), ?kind, "Staged cell attachments");
        Ok(())
    }
}
