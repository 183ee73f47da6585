//! Notebook port - abstracts the host notebook widget and document model.

use anyhow::Result;

use crate::attachments::{AttachmentName, Attachments, MimeBundle};
use crate::notebook::{CellId, CellSnapshot, NotebookMode};

/// Notebook port - read and mutate the active notebook surface.
///
/// Cell queries return snapshots in display order. Mutations address cells
/// by id; the host owns the widget tree and the document model, and the
/// mutation methods fail for unknown cells or cells without attachment
/// support (see [`crate::ports::errors::NotebookAccessError`]).
pub trait NotebookPort: Send + Sync {
    /// True when a notebook is the application's current surface.
    fn is_active_surface(&self) -> bool;

    /// All cells of the current notebook, in display order.
    fn cells(&self) -> Vec<CellSnapshot>;

    /// Switch the notebook interaction mode.
    fn set_mode(&self, mode: NotebookMode) -> Result<()>;

    /// Drop every selection mark, keeping only the active cell.
    fn deselect_all(&self) -> Result<()>;

    /// Attachment mapping of a cell.
    fn attachments(&self, cell: &CellId) -> Result<Attachments>;

    /// Store `bundle` under `name` in a cell's attachment mapping,
    /// overwriting any existing entry of that name.
    fn set_attachment(
        &self,
        cell: &CellId,
        name: &AttachmentName,
        bundle: &MimeBundle,
    ) -> Result<()>;

    /// Remove every attachment from a cell.
    fn clear_attachments(&self, cell: &CellId) -> Result<()>;

    /// Append text to the end of a cell's source.
    fn append_source(&self, cell: &CellId, text: &str) -> Result<()>;
}
