//! Path prompt port - the host's open-file dialog.

use anyhow::Result;
use async_trait::async_trait;

#[async_trait]
pub trait OpenPathDialogPort: Send + Sync {
    /// Prompt the user for a file path.
    ///
    /// `None` means the prompt was cancelled or left empty; callers treat
    /// that as a silent no-op, not an error.
    async fn prompt_path(&self) -> Result<Option<String>>;
}
