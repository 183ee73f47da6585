//! Dependency grouping for extension construction.
//!
//! This is NOT a builder: no build steps, no default values, no hidden
//! logic. It only groups the host service handles every operation consumes.

use std::sync::Arc;

use na_core::ports::{
    ContentsPort, FileBrowserPort, NotebookPort, OpenPathDialogPort, TransferClipboardPort,
};

/// Host service handles required by the extension.
///
/// All dependencies are required; the host passes them in at activation.
#[derive(Clone)]
pub struct ExtensionDeps {
    pub notebook: Arc<dyn NotebookPort>,
    pub clipboard: Arc<dyn TransferClipboardPort>,
    pub contents: Arc<dyn ContentsPort>,
    pub dialog: Arc<dyn OpenPathDialogPort>,
    pub file_browser: Arc<dyn FileBrowserPort>,
}
