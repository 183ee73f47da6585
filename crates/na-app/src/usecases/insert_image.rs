use std::sync::Arc;

use anyhow::Result;
use tracing::{info, warn};

use na_core::contents::FetchOptions;
use na_core::notebook::sole_active_cell;
use na_core::ports::{ContentsPort, NotebookPort, OpenPathDialogPort};

use super::attach_file;

/// Insert an image from disk as an attachment of the active markdown cell.
///
/// The flow prompts for a path, fetches the file base64-encoded, stores it
/// in the cell's attachment mapping under the file name, and appends a
/// markdown reference to the cell source. Cancelling the prompt is a
/// silent no-op; a failed fetch is logged and aborts before any mutation.
pub struct InsertImage {
    notebook: Arc<dyn NotebookPort>,
    contents: Arc<dyn ContentsPort>,
    dialog: Arc<dyn OpenPathDialogPort>,
}

impl InsertImage {
    pub fn new(
        notebook: Arc<dyn NotebookPort>,
        contents: Arc<dyn ContentsPort>,
        dialog: Arc<dyn OpenPathDialogPort>,
    ) -> Self {
        Self {
            notebook,
            contents,
            dialog,
        }
    }

    /// Exactly one cell is selected or active, and it is a markdown cell.
    ///
    /// A selection beside the active cell makes the target ambiguous, so
    /// the command disables itself rather than guessing.
    pub fn is_enabled(&self) -> bool {
        if !self.notebook.is_active_surface() {
            return false;
        }
        match sole_active_cell(&self.notebook.cells()) {
            Some(cell) => cell.supports_attachments(),
            None => false,
        }
    }

    pub async fn execute(&self) -> Result<()> {
        if !self.is_enabled() {
            return Ok(());
        }
        let Some(cell) = sole_active_cell(&self.notebook.cells()) else {
            return Ok(());
        };

        let Some(path) = self.dialog.prompt_path().await? else {
            // cancelled
            return Ok(());
        };
        if path.is_empty() {
            return Ok(());
        }

        let file = match self
            .contents
            .fetch(&path, &FetchOptions::base64_file())
            .await
        {
            Ok(file) => file,
            Err(error) => {
                warn!(%path, %error, "Couldn't open path");
                return Ok(());
            }
        };

        attach_file(self.notebook.as_ref(), &cell.id, &file)?;

        info!(name = %file.name, cell = %cell.id, "Inserted image attachment");
        Ok(())
    }
}
