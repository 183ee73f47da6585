//! File models served by the host content provider.

use serde::{Deserialize, Serialize};

use crate::attachments::MimeType;

/// What kind of entry to fetch.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FetchKind {
    File,
}

/// Encoding of the returned content.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FetchFormat {
    Base64,
    Text,
}

/// Options of a content fetch, mirroring the provider's wire signature.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FetchOptions {
    pub content: bool,
    #[serde(rename = "type")]
    pub kind: FetchKind,
    pub format: FetchFormat,
}

impl FetchOptions {
    /// The options every image insert uses: full content, base64-encoded.
    pub fn base64_file() -> Self {
        Self {
            content: true,
            kind: FetchKind::File,
            format: FetchFormat::Base64,
        }
    }
}

/// A file as described by the content provider or the file browser.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FileModel {
    pub name: String,
    pub path: String,
    pub mimetype: Option<MimeType>,
    /// Present when the content was requested or is already resident
    /// (for browser items with a loaded preview). Encoded per the fetch
    /// format, base64 for every image insert.
    pub content: Option<String>,
}

impl FileModel {
    pub fn is_image(&self) -> bool {
        self.mimetype.as_ref().is_some_and(MimeType::is_image)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_options_match_wire_shape() {
        let json = serde_json::to_value(FetchOptions::base64_file()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"content": true, "type": "file", "format": "base64"})
        );
    }

    #[test]
    fn test_is_image_requires_mimetype() {
        let mut file = FileModel {
            name: "cat.png".into(),
            path: "pics/cat.png".into(),
            mimetype: Some(MimeType::image_png()),
            content: None,
        };
        assert!(file.is_image());

        file.mimetype = None;
        assert!(!file.is_image());
    }
}
