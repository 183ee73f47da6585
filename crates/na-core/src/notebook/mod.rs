//! Notebook cell model as seen by the attachment operations.
mod cell;
mod selection;

pub use cell::{CellId, CellKind, CellSnapshot, NotebookMode};
pub use selection::{attachment_capable, selected_or_active, sole_active_cell};
