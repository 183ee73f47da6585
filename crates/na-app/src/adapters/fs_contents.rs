//! Filesystem-backed contents provider.

use std::path::PathBuf;

use anyhow::{Context, Result};
use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

use na_core::attachments::MimeType;
use na_core::contents::{FetchFormat, FetchOptions, FileModel};
use na_core::ports::ContentsPort;

/// Serves files from a root directory the way a host content manager
/// would: content encoded per the fetch options, MIME type guessed from
/// the file extension.
pub struct LocalContentsProvider {
    root: PathBuf,
}

impl LocalContentsProvider {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn resolve(&self, path: &str) -> PathBuf {
        self.root.join(path.trim_start_matches('/'))
    }
}

#[async_trait]
impl ContentsPort for LocalContentsProvider {
    async fn fetch(&self, path: &str, options: &FetchOptions) -> Result<FileModel> {
        let resolved = self.resolve(path);

        let name = resolved
            .file_name()
            .and_then(|name| name.to_str())
            .map(str::to_owned)
            .with_context(|| format!("path has no file name: {path}"))?;

        let mimetype = mime_guess::from_path(&resolved)
            .first()
            .map(|mime| MimeType(mime.essence_str().to_owned()));

        let content = if options.content {
            let bytes = tokio::fs::read(&resolved)
                .await
                .with_context(|| format!("couldn't open path {path}"))?;
            Some(match options.format {
                FetchFormat::Base64 => BASE64.encode(&bytes),
                FetchFormat::Text => String::from_utf8(bytes)
                    .with_context(|| format!("file {path} is not valid UTF-8"))?,
            })
        } else {
            None
        };

        Ok(FileModel {
            name,
            path: path.to_owned(),
            mimetype,
            content,
        })
    }
}
