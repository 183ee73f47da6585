//! # na-core
//!
//! Core domain models and host ports for the notebook attachments extension.
//!
//! This crate contains pure domain logic without any infrastructure dependencies.

// Public module exports
pub mod attachments;
pub mod contents;
pub mod notebook;
pub mod ports;

// Re-export commonly used types at the crate root
pub use attachments::{
    AttachmentName, Attachments, AttachmentsPayload, BundleData, MimeBundle, MimeType,
    ATTACHMENTS_MIME,
};
pub use contents::{FetchFormat, FetchKind, FetchOptions, FileModel};
pub use notebook::{CellId, CellKind, CellSnapshot, NotebookMode};
