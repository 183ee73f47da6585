use serde::{Deserialize, Serialize};
use std::fmt;

/// Host-assigned identifier of a cell within the current notebook.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CellId(pub String);

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for CellId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Kind of a notebook cell.
///
/// Attachment support is a property of the kind: only markdown cells carry
/// an attachment mapping, and every operation filters on this.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CellKind {
    Markdown,
    Code,
    Raw,
}

impl CellKind {
    pub fn supports_attachments(self) -> bool {
        matches!(self, CellKind::Markdown)
    }
}

/// Notebook interaction mode.
///
/// Operations switch to command mode before mutating cells so no text edit
/// is in flight while attachments move.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum NotebookMode {
    Command,
    Edit,
}

/// One cell as reported by the notebook port, in display order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CellSnapshot {
    pub id: CellId,
    pub kind: CellKind,
    /// Part of the explicit multi-selection.
    pub selected: bool,
    /// The single focused cell.
    pub active: bool,
}

impl CellSnapshot {
    pub fn is_selected_or_active(&self) -> bool {
        self.selected || self.active
    }

    pub fn supports_attachments(&self) -> bool {
        self.kind.supports_attachments()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_markdown_supports_attachments() {
        assert!(CellKind::Markdown.supports_attachments());
        assert!(!CellKind::Code.supports_attachments());
        assert!(!CellKind::Raw.supports_attachments());
    }

    #[test]
    fn test_selected_or_active() {
        let cell = CellSnapshot {
            id: "c1".into(),
            kind: CellKind::Markdown,
            selected: false,
            active: true,
        };
        assert!(cell.is_selected_or_active());

        let idle = CellSnapshot {
            selected: false,
            active: false,
            ..cell
        };
        assert!(!idle.is_selected_or_active());
    }
}
