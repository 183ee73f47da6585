//! # na-app
//!
//! Use cases and adapters for the notebook attachments extension.
//!
//! Every operation of the extension lives here as a use case over the host
//! ports defined in `na-core`; the adapters are reference implementations
//! for hosts that do not bring their own clipboard or content provider.

pub mod adapters;
pub mod deps;
pub mod usecases;

pub use deps::ExtensionDeps;
pub use usecases::{
    InsertImage, InsertImageFromBrowser, PasteCellAttachments, TransferCellAttachments,
    TransferKind,
};
