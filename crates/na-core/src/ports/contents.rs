//! Contents port - fetch file content from the host content provider.

use anyhow::Result;
use async_trait::async_trait;

use crate::contents::{FetchOptions, FileModel};

/// Asynchronous file access through the host.
///
/// This is the single suspension point of the insert operations: the use
/// case awaits the fetch and resumes on completion or failure, nothing else
/// runs concurrently.
#[async_trait]
pub trait ContentsPort: Send + Sync {
    /// Fetch the file at `path`. Rejects when the path cannot be resolved
    /// or read.
    async fn fetch(&self, path: &str, options: &FetchOptions) -> Result<FileModel>;
}
