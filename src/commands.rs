//! Command identifiers exposed to the host.

use std::fmt;

/// Commands registered by the extension, addressed by stable id strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandId {
    InsertImage,
    CutCellAttachments,
    CopyCellAttachments,
    PasteCellAttachments,
    InsertImageFromFileBrowser,
}

impl CommandId {
    pub const ALL: [CommandId; 5] = [
        CommandId::InsertImage,
        CommandId::CutCellAttachments,
        CommandId::CopyCellAttachments,
        CommandId::PasteCellAttachments,
        CommandId::InsertImageFromFileBrowser,
    ];

    /// Stable identifier used for registration and dispatch.
    pub fn as_str(self) -> &'static str {
        match self {
            CommandId::InsertImage => "notebook:insert-image",
            CommandId::CutCellAttachments => "notebook:cut-cell-attachment",
            CommandId::CopyCellAttachments => "notebook:copy-cell-attachment",
            CommandId::PasteCellAttachments => "notebook:paste-cell-attachment",
            CommandId::InsertImageFromFileBrowser => "notebook:insert-image-from-file-browser",
        }
    }

    /// Human label shown in menus and the palette.
    pub fn label(self) -> &'static str {
        match self {
            CommandId::InsertImage => "Insert Image",
            CommandId::CutCellAttachments => "Cut Cell Attachments",
            CommandId::CopyCellAttachments => "Copy Cell Attachments",
            CommandId::PasteCellAttachments => "Paste Cell Attachments",
            CommandId::InsertImageFromFileBrowser => "Insert Image as Attachment",
        }
    }

    /// Icon class for surfaces that render one.
    pub fn icon_class(self) -> Option<&'static str> {
        match self {
            CommandId::InsertImageFromFileBrowser => Some("jp-MaterialIcon jp-AddIcon"),
            _ => None,
        }
    }

    /// Resolve a host-dispatched id string back to a command.
    pub fn parse(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|command| command.as_str() == id)
    }
}

impl fmt::Display for CommandId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
