//! Mock implementations of the host ports for testing.
//!
//! This module provides `mockall` mocks so dependents can unit test
//! operations without a real host. Enable the `testing` feature to use
//! them from another crate.

use async_trait::async_trait;
use mockall::mock;
use serde_json::Value;

use crate::attachments::{AttachmentName, Attachments, MimeBundle};
use crate::contents::{FetchOptions, FileModel};
use crate::notebook::{CellId, CellSnapshot, NotebookMode};
use crate::ports::{
    ContentsPort, FileBrowserPort, NotebookPort, OpenPathDialogPort, TransferClipboardPort,
};

mock! {
    pub Notebook {}

    impl NotebookPort for Notebook {
        fn is_active_surface(&self) -> bool;
        fn cells(&self) -> Vec<CellSnapshot>;
        fn set_mode(&self, mode: NotebookMode) -> anyhow::Result<()>;
        fn deselect_all(&self) -> anyhow::Result<()>;
        fn attachments(&self, cell: &CellId) -> anyhow::Result<Attachments>;
        fn set_attachment(
            &self,
            cell: &CellId,
            name: &AttachmentName,
            bundle: &MimeBundle,
        ) -> anyhow::Result<()>;
        fn clear_attachments(&self, cell: &CellId) -> anyhow::Result<()>;
        fn append_source(&self, cell: &CellId, text: &str) -> anyhow::Result<()>;
    }
}

mock! {
    pub TransferClipboard {}

    impl TransferClipboardPort for TransferClipboard {
        fn clear(&self);
        fn set_data(&self, mime: &str, data: Value) -> anyhow::Result<()>;
        fn get_data(&self, mime: &str) -> Option<Value>;
        fn has_data(&self, mime: &str) -> bool;
    }
}

mock! {
    pub Contents {}

    #[async_trait]
    impl ContentsPort for Contents {
        async fn fetch(&self, path: &str, options: &FetchOptions) -> anyhow::Result<FileModel>;
    }
}

mock! {
    pub OpenPathDialog {}

    #[async_trait]
    impl OpenPathDialogPort for OpenPathDialog {
        async fn prompt_path(&self) -> anyhow::Result<Option<String>>;
    }
}

mock! {
    pub FileBrowser {}

    impl FileBrowserPort for FileBrowser {
        fn selected_files(&self) -> Vec<FileModel>;
    }
}
