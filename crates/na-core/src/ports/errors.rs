use thiserror::Error;

#[derive(Debug, Error)]
pub enum NotebookAccessError {
    #[error("cell not found")]
    CellNotFound,

    #[error("cell has no attachment support")]
    NotAttachmentCapable,

    #[error("model error: {0}")]
    Model(String),
}

#[derive(Debug, Error)]
pub enum ClipboardAccessError {
    #[error("clipboard write failed: {0}")]
    WriteFailed(String),
}
