//! # notebook-attachments
//!
//! Cut, copy and paste image attachments between notebook markdown cells,
//! and insert images from disk or the file browser as `attachment:` links.
//!
//! The crate is a thin extension over a host notebook application: every
//! operation delegates to host services behind the port traits in
//! [`na_core::ports`]. [`AttachmentsExtension`] binds the use cases to
//! command ids and registers them with the host command registry, menus,
//! palette and context menu; the host dispatches invocations back by id.

pub mod commands;
pub mod config;
pub mod extension;

pub use commands::CommandId;
pub use config::ExtensionConfig;
pub use extension::AttachmentsExtension;

pub use na_app::ExtensionDeps;
