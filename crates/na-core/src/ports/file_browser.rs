//! File browser port - read the current file-browser selection.

use crate::contents::FileModel;

pub trait FileBrowserPort: Send + Sync {
    /// Files currently selected in the active browser panel, in selection
    /// order. Empty when no browser is open or nothing is selected.
    fn selected_files(&self) -> Vec<FileModel>;
}
