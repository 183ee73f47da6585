//! Hand-written mock host shared by the integration tests.
//!
//! The notebook mock keeps real cell state behind a mutex so tests can
//! assert on the document after an operation, the way the host model
//! would look.
#![allow(dead_code)]

use std::sync::{Mutex, MutexGuard};

use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;

use na_core::attachments::{AttachmentName, Attachments, BundleData, MimeBundle, MimeType};
use na_core::contents::{FetchOptions, FileModel};
use na_core::notebook::{CellId, CellKind, CellSnapshot, NotebookMode};
use na_core::ports::{
    ClipboardAccessError, ContentsPort, FileBrowserPort, NotebookAccessError, NotebookPort,
    OpenPathDialogPort, TransferClipboardPort,
};

/// Route use-case diagnostics to the test output when RUST_LOG asks for it.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn png_bundle(data: &str) -> MimeBundle {
    MimeBundle::single(
        MimeType::image_png(),
        BundleData::Base64 { data: data.into() },
    )
}

pub fn image_file(name: &str, path: &str, content: Option<&str>) -> FileModel {
    FileModel {
        name: name.into(),
        path: path.into(),
        mimetype: Some(MimeType::image_png()),
        content: content.map(str::to_owned),
    }
}

/// One cell of the mock notebook, with builder-style setup.
pub struct CellFixture {
    pub id: CellId,
    pub kind: CellKind,
    pub selected: bool,
    pub active: bool,
    pub attachments: Attachments,
    pub source: String,
}

impl CellFixture {
    fn new(id: &str, kind: CellKind) -> Self {
        Self {
            id: id.into(),
            kind,
            selected: false,
            active: false,
            attachments: Attachments::new(),
            source: String::new(),
        }
    }

    pub fn markdown(id: &str) -> Self {
        Self::new(id, CellKind::Markdown)
    }

    pub fn code(id: &str) -> Self {
        Self::new(id, CellKind::Code)
    }

    pub fn raw(id: &str) -> Self {
        Self::new(id, CellKind::Raw)
    }

    pub fn selected(mut self) -> Self {
        self.selected = true;
        self
    }

    pub fn active(mut self) -> Self {
        self.active = true;
        self
    }

    pub fn with_attachment(mut self, name: &str, data: &str) -> Self {
        self.attachments.set(name.into(), png_bundle(data));
        self
    }
}

struct NotebookState {
    active_surface: bool,
    cells: Vec<CellFixture>,
    mode: Option<NotebookMode>,
    deselect_calls: usize,
    attachment_writes: usize,
}

/// Stateful [`NotebookPort`] double.
pub struct MockNotebook {
    state: Mutex<NotebookState>,
}

impl MockNotebook {
    pub fn with_cells(cells: Vec<CellFixture>) -> Self {
        Self {
            state: Mutex::new(NotebookState {
                active_surface: true,
                cells,
                mode: None,
                deselect_calls: 0,
                attachment_writes: 0,
            }),
        }
    }

    /// A notebook that is open but not the application's current surface.
    pub fn background(cells: Vec<CellFixture>) -> Self {
        let mock = Self::with_cells(cells);
        mock.state().active_surface = false;
        mock
    }

    fn state(&self) -> MutexGuard<'_, NotebookState> {
        self.state.lock().unwrap()
    }

    /// Mark a cell as part of the multi-selection (test setup between
    /// operations, e.g. copy here then paste there).
    pub fn select(&self, id: &str) {
        let target: CellId = id.into();
        let mut state = self.state();
        if let Some(cell) = state.cells.iter_mut().find(|cell| cell.id == target) {
            cell.selected = true;
        }
    }

    /// Move the active mark to a cell.
    pub fn activate_cell(&self, id: &str) {
        let target: CellId = id.into();
        let mut state = self.state();
        for cell in state.cells.iter_mut() {
            cell.active = cell.id == target;
        }
    }

    pub fn attachments_of(&self, id: &str) -> Attachments {
        let target: CellId = id.into();
        let state = self.state();
        state
            .cells
            .iter()
            .find(|cell| cell.id == target)
            .map(|cell| cell.attachments.clone())
            .unwrap_or_default()
    }

    pub fn source_of(&self, id: &str) -> String {
        let target: CellId = id.into();
        let state = self.state();
        state
            .cells
            .iter()
            .find(|cell| cell.id == target)
            .map(|cell| cell.source.clone())
            .unwrap_or_default()
    }

    pub fn mode(&self) -> Option<NotebookMode> {
        self.state().mode
    }

    pub fn deselect_calls(&self) -> usize {
        self.state().deselect_calls
    }

    /// Number of `set_attachment` calls observed.
    pub fn attachment_writes(&self) -> usize {
        self.state().attachment_writes
    }
}

impl NotebookPort for MockNotebook {
    fn is_active_surface(&self) -> bool {
        self.state().active_surface
    }

    fn cells(&self) -> Vec<CellSnapshot> {
        self.state()
            .cells
            .iter()
            .map(|cell| CellSnapshot {
                id: cell.id.clone(),
                kind: cell.kind,
                selected: cell.selected,
                active: cell.active,
            })
            .collect()
    }

    fn set_mode(&self, mode: NotebookMode) -> Result<()> {
        self.state().mode = Some(mode);
        Ok(())
    }

    fn deselect_all(&self) -> Result<()> {
        let mut state = self.state();
        for cell in state.cells.iter_mut() {
            cell.selected = false;
        }
        state.deselect_calls += 1;
        Ok(())
    }

    fn attachments(&self, cell: &CellId) -> Result<Attachments> {
        let state = self.state();
        let cell = state
            .cells
            .iter()
            .find(|candidate| &candidate.id == cell)
            .ok_or(NotebookAccessError::CellNotFound)?;
        if !cell.kind.supports_attachments() {
            return Err(NotebookAccessError::NotAttachmentCapable.into());
        }
        Ok(cell.attachments.clone())
    }

    fn set_attachment(
        &self,
        cell: &CellId,
        name: &AttachmentName,
        bundle: &MimeBundle,
    ) -> Result<()> {
        let mut state = self.state();
        state.attachment_writes += 1;
        let cell = state
            .cells
            .iter_mut()
            .find(|candidate| &candidate.id == cell)
            .ok_or(NotebookAccessError::CellNotFound)?;
        if !cell.kind.supports_attachments() {
            return Err(NotebookAccessError::NotAttachmentCapable.into());
        }
        cell.attachments.set(name.clone(), bundle.clone());
        Ok(())
    }

    fn clear_attachments(&self, cell: &CellId) -> Result<()> {
        let mut state = self.state();
        let cell = state
            .cells
            .iter_mut()
            .find(|candidate| &candidate.id == cell)
            .ok_or(NotebookAccessError::CellNotFound)?;
        cell.attachments.clear();
        Ok(())
    }

    fn append_source(&self, cell: &CellId, text: &str) -> Result<()> {
        let mut state = self.state();
        let cell = state
            .cells
            .iter_mut()
            .find(|candidate| &candidate.id == cell)
            .ok_or(NotebookAccessError::CellNotFound)?;
        cell.source.push_str(text);
        Ok(())
    }
}

/// Clipboard double whose writes always fail, for ordering tests.
pub struct FailingClipboard;

impl TransferClipboardPort for FailingClipboard {
    fn clear(&self) {}

    fn set_data(&self, _mime: &str, _data: Value) -> Result<()> {
        Err(ClipboardAccessError::WriteFailed("injected failure".into()).into())
    }

    fn get_data(&self, _mime: &str) -> Option<Value> {
        None
    }

    fn has_data(&self, _mime: &str) -> bool {
        false
    }
}

/// Contents double serving one configured file.
pub struct StubContents {
    pub file: Option<FileModel>,
    pub should_error: bool,
}

#[async_trait]
impl ContentsPort for StubContents {
    async fn fetch(&self, path: &str, _options: &FetchOptions) -> Result<FileModel> {
        if self.should_error {
            return Err(anyhow::anyhow!("couldn't open path {path}"));
        }
        self.file
            .clone()
            .ok_or_else(|| anyhow::anyhow!("no file configured for {path}"))
    }
}

/// Dialog double returning a fixed choice.
pub struct StubDialog {
    pub path: Option<String>,
}

#[async_trait]
impl OpenPathDialogPort for StubDialog {
    async fn prompt_path(&self) -> Result<Option<String>> {
        Ok(self.path.clone())
    }
}

/// File browser double with a fixed selection.
pub struct StubBrowser {
    pub files: Vec<FileModel>,
}

impl FileBrowserPort for StubBrowser {
    fn selected_files(&self) -> Vec<FileModel> {
        self.files.clone()
    }
}
