//! MIME-typed content bundles.
//!
//! An attachment is stored as a bundle mapping MIME type to payload, so the
//! same attachment can carry more than one representation of its content. A
//! bundle built from a fetched file holds exactly one entry: the file's MIME
//! type pointing at its base64-encoded bytes.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MimeType(pub String);

impl MimeType {
    pub fn image_png() -> Self {
        Self("image/png".into())
    }
    pub fn octet_stream() -> Self {
        Self("application/octet-stream".into())
    }

    /// Loose image check, matching any type whose name mentions "image".
    pub fn is_image(&self) -> bool {
        self.0.contains("image")
    }
}

impl fmt::Display for MimeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for MimeType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(MimeType(s.to_string()))
    }
}

/// One concrete payload inside a bundle.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BundleData {
    /// UTF-8 text
    Text { text: String },

    /// base64-encoded bytes (images, binaries)
    Base64 { data: String },
}

impl BundleData {
    /// Decoded payload size in bytes (estimated for base64 data).
    pub fn size_bytes(&self) -> usize {
        match self {
            BundleData::Text { text } => text.len(),
            BundleData::Base64 { data } => base64::decoded_len_estimate(data.len()),
        }
    }
}

/// MIME type indexed content of a single attachment.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct MimeBundle(BTreeMap<MimeType, BundleData>);

impl MimeBundle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bundle with a single representation.
    pub fn single(mime: MimeType, data: BundleData) -> Self {
        let mut map = BTreeMap::new();
        map.insert(mime, data);
        Self(map)
    }

    pub fn insert(&mut self, mime: MimeType, data: BundleData) {
        self.0.insert(mime, data);
    }

    pub fn get(&self, mime: &MimeType) -> Option<&BundleData> {
        self.0.get(mime)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&MimeType, &BundleData)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Summed decoded size of every representation.
    pub fn total_size_bytes(&self) -> usize {
        self.0.values().map(BundleData::size_bytes).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_image_matches_substring() {
        assert!(MimeType::image_png().is_image());
        assert!(MimeType("image/svg+xml".into()).is_image());
        assert!(!MimeType("text/plain".into()).is_image());
        assert!(!MimeType::octet_stream().is_image());
    }

    #[test]
    fn test_bundle_data_size() {
        let text = BundleData::Text {
            text: "hello".into(),
        };
        assert_eq!(text.size_bytes(), 5);

        // "aGVsbG8=" decodes to the 5 bytes of "hello"
        let b64 = BundleData::Base64 {
            data: "aGVsbG8=".into(),
        };
        assert!(b64.size_bytes() >= 5);
    }

    #[test]
    fn test_single_bundle() {
        let bundle = MimeBundle::single(
            MimeType::image_png(),
            BundleData::Base64 {
                data: "aGVsbG8=".into(),
            },
        );
        assert_eq!(bundle.len(), 1);
        assert!(bundle.get(&MimeType::image_png()).is_some());
        assert!(bundle.get(&MimeType::octet_stream()).is_none());
    }

    #[test]
    fn test_bundle_data_serializes_tagged() {
        let data = BundleData::Base64 {
            data: "Zm9v".into(),
        };
        let json = serde_json::to_value(&data).unwrap();
        assert_eq!(json["kind"], "base64");
        assert_eq!(json["data"], "Zm9v");
    }

    #[test]
    fn test_bundle_serializes_as_plain_map() {
        let bundle = MimeBundle::single(
            MimeType::image_png(),
            BundleData::Text { text: "x".into() },
        );
        let json = serde_json::to_value(&bundle).unwrap();
        assert!(json.is_object());
        assert!(json.get("image/png").is_some());
    }
}
