//! Transfer clipboard port - the ambient staging store for cut/copy/paste.

use anyhow::Result;
use serde_json::Value;

/// Single-slot, process-wide staging store keyed by a MIME identifier.
///
/// The store holds the payload of the most recent cut/copy until the next
/// writer overwrites it (last writer wins). Readers do not consume the
/// payload; a cut/copy followed by several pastes replays the same data.
pub trait TransferClipboardPort: Send + Sync {
    /// Drop the current payload, whatever its key.
    fn clear(&self);

    /// Replace the store contents with `data` under `mime`.
    fn set_data(&self, mime: &str, data: Value) -> Result<()>;

    /// Payload stored under `mime`, if that is the current key.
    fn get_data(&self, mime: &str) -> Option<Value>;

    /// True when the current payload is keyed by `mime`.
    fn has_data(&self, mime: &str) -> bool;
}
