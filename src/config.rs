//! Registration settings.

use serde::Deserialize;

/// Where the extension's commands surface in the host UI.
///
/// Hosts can override individual fields through their settings system; the
/// defaults reproduce the extension's stock placement.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ExtensionConfig {
    /// Command palette category for the cell attachment commands.
    pub palette_category: String,
    /// Edit menu rank of the cut/copy/paste group.
    pub transfer_group_rank: u32,
    /// Edit menu rank of the insert-image group.
    pub insert_group_rank: u32,
    /// Host selector for the file rows that get the context-menu entry.
    pub context_menu_selector: String,
    pub context_menu_rank: u32,
}

impl Default for ExtensionConfig {
    fn default() -> Self {
        Self {
            palette_category: "Notebook Cell Operations".to_owned(),
            transfer_group_rank: 10,
            insert_group_rank: 11,
            // matches only non-directory rows
            context_menu_selector: ".jp-DirListing-item[data-isdir=\"false\"]".to_owned(),
            context_menu_rank: 1,
        }
    }
}
