//! File-backed blob store

use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;

use super::BlobStore;
use crate::{Error, Result};

/// Blob store persisted as one JSON document: `{ "<key>": "<value>" }`.
///
/// Every write rewrites the whole document through a sibling temp file and a
/// rename, so readers never observe a half-written file.
#[derive(Debug, Clone)]
pub struct FileBlobStore {
    path: PathBuf,
}

impl FileBlobStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    async fn read_document(&self) -> Result<BTreeMap<String, String>> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(error) if error.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(error) => return Err(error.into()),
        };

        if raw.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        serde_json::from_str(&raw).map_err(|error| {
            Error::Storage(format!(
                "Failed to parse storage file {}: {error}",
                self.path.display()
            ))
        })
    }

    async fn write_document(&self, document: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let serialized = serde_json::to_string_pretty(document)?;
        let tmp_path = self.tmp_path();
        tokio::fs::write(&tmp_path, serialized).await?;
        tokio::fs::rename(&tmp_path, &self.path).await?;
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(std::ffi::OsStr::to_os_string)
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[async_trait]
impl BlobStore for FileBlobStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let mut document = self.read_document().await?;
        Ok(document.remove(key))
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut document = self.read_document().await?;
        document.insert(key.to_string(), value.to_string());
        self.write_document(&document).await?;
        tracing::debug!(
            "Wrote {} bytes under '{}' to {}",
            value.len(),
            key,
            self.path.display()
        );
        Ok(())
    }
}
