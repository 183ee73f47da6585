//! UI registration ports - commands, menus, palette, context menu.
//!
//! Registration is data driven: the extension hands the host descriptor
//! structs during activation, and the host dispatches invocations back by
//! command id. Enablement, visibility and execution never live in the
//! descriptors themselves.

use anyhow::Result;

/// A command registered with the host command registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    /// Stable id the host dispatches by.
    pub id: String,
    /// Human label shown in menus and the palette.
    pub label: String,
    /// Host icon class for surfaces that render one.
    pub icon_class: Option<String>,
}

pub trait CommandRegistryPort: Send + Sync {
    fn add_command(&self, spec: CommandSpec) -> Result<()>;
}

/// A ranked group of commands appended to the host edit menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuGroup {
    pub commands: Vec<String>,
    pub rank: u32,
}

pub trait MainMenuPort: Send + Sync {
    fn add_edit_group(&self, group: MenuGroup) -> Result<()>;
}

/// A command palette entry under a category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteItem {
    pub command: String,
    pub category: String,
}

pub trait CommandPalettePort: Send + Sync {
    fn add_item(&self, item: PaletteItem) -> Result<()>;
}

/// A context-menu entry scoped to host rows matching `selector`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextMenuItem {
    pub command: String,
    pub selector: String,
    pub rank: u32,
}

pub trait ContextMenuPort: Send + Sync {
    fn add_item(&self, item: ContextMenuItem) -> Result<()>;
}
