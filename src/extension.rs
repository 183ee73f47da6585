//! Extension wiring: command dispatch and host registration.

use anyhow::Result;
use tracing::info;

use na_app::{
    ExtensionDeps, InsertImage, InsertImageFromBrowser, PasteCellAttachments,
    TransferCellAttachments, TransferKind,
};
use na_core::ports::{
    CommandPalettePort, CommandRegistryPort, CommandSpec, ContextMenuItem, ContextMenuPort,
    MainMenuPort, MenuGroup, PaletteItem,
};

use crate::commands::CommandId;
use crate::config::ExtensionConfig;

/// The attachment transfer controller bound to a host.
///
/// The host dispatches command invocations by id; enablement and
/// visibility are queried through the same ids and are safe to evaluate
/// at any time without side effects.
pub struct AttachmentsExtension {
    transfer: TransferCellAttachments,
    paste: PasteCellAttachments,
    insert_image: InsertImage,
    insert_from_browser: InsertImageFromBrowser,
    config: ExtensionConfig,
}

impl AttachmentsExtension {
    pub fn new(deps: ExtensionDeps) -> Self {
        Self::with_config(deps, ExtensionConfig::default())
    }

    pub fn with_config(deps: ExtensionDeps, config: ExtensionConfig) -> Self {
        Self {
            transfer: TransferCellAttachments::new(deps.notebook.clone(), deps.clipboard.clone()),
            paste: PasteCellAttachments::new(deps.notebook.clone(), deps.clipboard.clone()),
            insert_image: InsertImage::new(
                deps.notebook.clone(),
                deps.contents.clone(),
                deps.dialog,
            ),
            insert_from_browser: InsertImageFromBrowser::new(
                deps.notebook,
                deps.contents,
                deps.file_browser,
            ),
            config,
        }
    }

    /// Register every command, the edit-menu groups, the palette entries
    /// and the file-browser context-menu item with the host.
    pub fn activate(
        &self,
        commands: &dyn CommandRegistryPort,
        menu: &dyn MainMenuPort,
        palette: &dyn CommandPalettePort,
        context_menu: &dyn ContextMenuPort,
    ) -> Result<()> {
        for id in CommandId::ALL {
            commands.add_command(CommandSpec {
                id: id.as_str().to_owned(),
                label: id.label().to_owned(),
                icon_class: id.icon_class().map(str::to_owned),
            })?;
        }

        menu.add_edit_group(MenuGroup {
            commands: vec![
                CommandId::CutCellAttachments.as_str().to_owned(),
                CommandId::CopyCellAttachments.as_str().to_owned(),
                CommandId::PasteCellAttachments.as_str().to_owned(),
            ],
            rank: self.config.transfer_group_rank,
        })?;
        menu.add_edit_group(MenuGroup {
            commands: vec![CommandId::InsertImage.as_str().to_owned()],
            rank: self.config.insert_group_rank,
        })?;

        for id in [
            CommandId::InsertImage,
            CommandId::CopyCellAttachments,
            CommandId::CutCellAttachments,
            CommandId::PasteCellAttachments,
        ] {
            palette.add_item(PaletteItem {
                command: id.as_str().to_owned(),
                category: self.config.palette_category.clone(),
            })?;
        }

        context_menu.add_item(ContextMenuItem {
            command: CommandId::InsertImageFromFileBrowser.as_str().to_owned(),
            selector: self.config.context_menu_selector.clone(),
            rank: self.config.context_menu_rank,
        })?;

        info!("notebook-attachments extension activated");
        Ok(())
    }

    /// Enablement predicate of a command. Free of side effects.
    pub fn is_enabled(&self, id: CommandId) -> bool {
        match id {
            CommandId::InsertImage => self.insert_image.is_enabled(),
            CommandId::CutCellAttachments | CommandId::CopyCellAttachments => {
                self.transfer.is_enabled()
            }
            CommandId::PasteCellAttachments => self.paste.is_enabled(),
            CommandId::InsertImageFromFileBrowser => self.insert_from_browser.is_enabled(),
        }
    }

    /// Visibility predicate; only the context-menu command hides itself.
    pub fn is_visible(&self, id: CommandId) -> bool {
        match id {
            CommandId::InsertImageFromFileBrowser => self.insert_from_browser.is_enabled(),
            _ => true,
        }
    }

    /// Execute a command. Preconditions are re-checked inside each use
    /// case, so dispatching a disabled command is a silent no-op.
    pub async fn execute(&self, id: CommandId) -> Result<()> {
        match id {
            CommandId::InsertImage => self.insert_image.execute().await,
            CommandId::CutCellAttachments => self.transfer.execute(TransferKind::Cut),
            CommandId::CopyCellAttachments => self.transfer.execute(TransferKind::Copy),
            CommandId::PasteCellAttachments => self.paste.execute(),
            CommandId::InsertImageFromFileBrowser => self.insert_from_browser.execute().await,
        }
    }
}
