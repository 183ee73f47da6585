//! Selection rules shared by every operation.

use crate::notebook::CellSnapshot;

/// Cells that are explicitly selected or currently active, in display order.
pub fn selected_or_active(cells: &[CellSnapshot]) -> Vec<CellSnapshot> {
    cells
        .iter()
        .filter(|cell| cell.is_selected_or_active())
        .cloned()
        .collect()
}

/// Cells that can hold attachments, keeping display order.
pub fn attachment_capable(cells: &[CellSnapshot]) -> Vec<CellSnapshot> {
    cells
        .iter()
        .filter(|cell| cell.supports_attachments())
        .cloned()
        .collect()
}

/// The active cell, but only when it is the sole target.
///
/// Any selection mark besides the active cell makes the target ambiguous,
/// so single-target operations are disabled in that state.
pub fn sole_active_cell(cells: &[CellSnapshot]) -> Option<CellSnapshot> {
    let active = cells.iter().find(|cell| cell.active)?;
    let ambiguous = cells
        .iter()
        .any(|cell| cell.selected && cell.id != active.id);
    if ambiguous {
        None
    } else {
        Some(active.clone())
    }
}
