use std::sync::Arc;

use anyhow::Result;
use tracing::{info, warn};

use na_core::attachments::{AttachmentsPayload, ATTACHMENTS_MIME};
use na_core::notebook::NotebookMode;
use na_core::ports::{NotebookPort, TransferClipboardPort};

use super::{capable_targets, has_selected_cells};

/// Merge the staged payload into the selected cells.
///
/// Paste reads the clipboard without consuming it; the same payload can be
/// pasted repeatedly until the next cut/copy overwrites it.
pub struct PasteCellAttachments {
    notebook: Arc<dyn NotebookPort>,
    clipboard: Arc<dyn TransferClipboardPort>,
}

impl PasteCellAttachments {
    pub fn new(
        notebook: Arc<dyn NotebookPort>,
        clipboard: Arc<dyn TransferClipboardPort>,
    ) -> Self {
        Self {
            notebook,
            clipboard,
        }
    }

    /// The clipboard holds an attachments payload and a target is selected.
    pub fn is_enabled(&self) -> bool {
        self.clipboard.has_data(ATTACHMENTS_MIME) && has_selected_cells(self.notebook.as_ref())
    }

    pub fn execute(&self) -> Result<()> {
        let Some(value) = self.clipboard.get_data(ATTACHMENTS_MIME) else {
            return Ok(());
        };
        if !has_selected_cells(self.notebook.as_ref()) {
            return Ok(());
        }

        let payload = match AttachmentsPayload::from_value(value) {
            Ok(payload) => payload,
            Err(error) => {
                // Foreign writer under our MIME key; leave the cells alone
                warn!(%error, "Discarding malformed attachments payload");
                return Ok(());
            }
        };

        self.notebook.set_mode(NotebookMode::Command)?;
        let targets = capable_targets(&self.notebook.cells());

        // Broadcast: every source entry merges into every target cell, so a
        // multi-cell copy pasted onto a multi-cell selection propagates each
        // attachment to each target. Sources iterate outermost, which makes
        // later sources win on name collision.
        for source in payload.iter() {
            for cell in &targets {
                for (name, bundle) in source.iter() {
                    self.notebook.set_attachment(&cell.id, name, bundle)?;
                }
            }
        }

        self.notebook.deselect_all()?;

        info!(
            sources = payload.len(),
            targets = targets.len(),
            "Pasted cell attachments"
        );
        Ok(())
    }
}
