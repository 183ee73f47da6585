//! Per-cell attachment mapping.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::attachments::MimeBundle;

/// Filename-like key of an attachment within a cell.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AttachmentName(pub String);

impl AttachmentName {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AttachmentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for AttachmentName {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Attachment mapping of a single cell: name to MIME bundle.
///
/// Each cell holds at most one attachment per name; setting a name that
/// exists overwrites it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct Attachments(BTreeMap<AttachmentName, MimeBundle>);

impl Attachments {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `bundle` under `name`, replacing any previous entry.
    pub fn set(&mut self, name: AttachmentName, bundle: MimeBundle) {
        self.0.insert(name, bundle);
    }

    pub fn get(&self, name: &AttachmentName) -> Option<&MimeBundle> {
        self.0.get(name)
    }

    /// Copy every entry of `other` into this mapping, overwriting on
    /// name collision.
    pub fn merge_from(&mut self, other: &Attachments) {
        for (name, bundle) in other.iter() {
            self.0.insert(name.clone(), bundle.clone());
        }
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (&AttachmentName, &MimeBundle)> {
        self.0.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &AttachmentName> {
        self.0.keys()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Summed decoded size of every bundle in the mapping.
    pub fn total_size_bytes(&self) -> usize {
        self.0.values().map(MimeBundle::total_size_bytes).sum()
    }
}
