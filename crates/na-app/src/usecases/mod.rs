//! Use cases of the attachment transfer controller.
//!
//! Each use case pairs a side-effect-free `is_enabled` predicate with an
//! `execute` body. The host may query `is_enabled` at any time to drive
//! menu state; `execute` re-checks its preconditions and no-ops when the
//! host dispatches a command that should have been disabled.

mod insert_image;
mod insert_image_from_browser;
mod paste_attachments;
mod transfer_attachments;

pub use insert_image::InsertImage;
pub use insert_image_from_browser::InsertImageFromBrowser;
pub use paste_attachments::PasteCellAttachments;
pub use transfer_attachments::{TransferCellAttachments, TransferKind};

use anyhow::{Context, Result};

use na_core::attachments::{image_reference, AttachmentName, BundleData, MimeBundle, MimeType};
use na_core::contents::FileModel;
use na_core::notebook::{attachment_capable, selected_or_active, CellId, CellSnapshot};
use na_core::ports::NotebookPort;

/// True when a notebook is active and at least one cell is selected or
/// active. Gates cut, copy and paste.
pub(crate) fn has_selected_cells(notebook: &dyn NotebookPort) -> bool {
    if !notebook.is_active_surface() {
        return false;
    }
    !selected_or_active(&notebook.cells()).is_empty()
}

/// Selected-or-active cells that can hold attachments, in display order.
pub(crate) fn capable_targets(cells: &[CellSnapshot]) -> Vec<CellSnapshot> {
    attachment_capable(&selected_or_active(cells))
}

/// Store a fetched file as a cell attachment and reference it from the
/// cell source.
///
/// Runs only after a successful fetch, so a failed fetch never leaves a
/// partial attachment or a dangling markdown reference.
pub(crate) fn attach_file(
    notebook: &dyn NotebookPort,
    cell: &CellId,
    file: &FileModel,
) -> Result<()> {
    let content = file
        .content
        .clone()
        .with_context(|| format!("file model for {} has no content", file.name))?;

    let name = AttachmentName::from(file.name.as_str());
    let mime = file.mimetype.clone().unwrap_or_else(MimeType::octet_stream);
    let bundle = MimeBundle::single(mime, BundleData::Base64 { data: content });

    notebook.set_attachment(cell, &name, &bundle)?;
    notebook.append_source(cell, &image_reference(&name))
}
