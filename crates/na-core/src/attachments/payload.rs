//! Clipboard payload staged by cut/copy and read by paste.
//!
//! The payload is an ordered sequence of per-cell attachment mappings, one
//! entry per copied cell in display order. It travels through the transfer
//! clipboard as plain JSON tagged with [`ATTACHMENTS_MIME`], which is the
//! only thing that distinguishes it from foreign clipboard content.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::attachments::Attachments;

/// MIME identifier the payload is stored under in the transfer clipboard.
pub const ATTACHMENTS_MIME: &str = "application/vnd.jupyter.attachments";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct AttachmentsPayload(Vec<Attachments>);

impl AttachmentsPayload {
    pub fn new(entries: Vec<Attachments>) -> Self {
        Self(entries)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Attachments> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Summed decoded size of everything staged.
    pub fn total_size_bytes(&self) -> usize {
        self.0.iter().map(Attachments::total_size_bytes).sum()
    }

    /// JSON form written to the transfer clipboard.
    pub fn to_value(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// Parse a payload read back from the transfer clipboard.
    pub fn from_value(value: Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }
}
