use std::sync::Arc;

use anyhow::Result;
use tracing::{info, warn};

use na_core::contents::FetchOptions;
use na_core::ports::{ContentsPort, FileBrowserPort, NotebookPort};

use super::attach_file;

/// Insert the image selected in the file browser into the active cell.
///
/// Exposed as a context-menu entry on file rows; `is_enabled` doubles as
/// the visibility predicate for that entry. Browser items may carry their
/// content already (a loaded preview), in which case the fetch is skipped.
pub struct InsertImageFromBrowser {
    notebook: Arc<dyn NotebookPort>,
    contents: Arc<dyn ContentsPort>,
    file_browser: Arc<dyn FileBrowserPort>,
}

impl InsertImageFromBrowser {
    pub fn new(
        notebook: Arc<dyn NotebookPort>,
        contents: Arc<dyn ContentsPort>,
        file_browser: Arc<dyn FileBrowserPort>,
    ) -> Self {
        Self {
            notebook,
            contents,
            file_browser,
        }
    }

    /// Exactly one file is selected, it is an image, and the notebook's
    /// active cell can hold attachments.
    pub fn is_enabled(&self) -> bool {
        if !self.notebook.is_active_surface() {
            return false;
        }
        let selected = self.file_browser.selected_files();
        let [file] = selected.as_slice() else {
            return false;
        };
        if !file.is_image() {
            return false;
        }
        match self.notebook.cells().iter().find(|cell| cell.active) {
            Some(cell) => cell.supports_attachments(),
            None => false,
        }
    }

    pub async fn execute(&self) -> Result<()> {
        if !self.is_enabled() {
            return Ok(());
        }
        let cells = self.notebook.cells();
        let Some(cell) = cells.iter().find(|cell| cell.active) else {
            return Ok(());
        };
        let Some(selected) = self.file_browser.selected_files().into_iter().next() else {
            return Ok(());
        };

        // Reuse content already resident in the browser model, fetch otherwise
        let file = if selected.content.is_some() {
            selected
        } else {
            match self
                .contents
                .fetch(&selected.path, &FetchOptions::base64_file())
                .await
            {
                Ok(file) => file,
                Err(error) => {
                    warn!(path = %selected.path, %error, "Couldn't open path");
                    return Ok(());
                }
            }
        };

        attach_file(self.notebook.as_ref(), &cell.id, &file)?;

        info!(name = %file.name, cell = %cell.id, "Inserted image attachment from file browser");
        Ok(())
    }
}
