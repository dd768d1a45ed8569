//! In-memory blob store

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::BlobStore;
use crate::{Error, Result};

#[derive(Debug, Default)]
struct Inner {
    values: HashMap<String, String>,
    fail_reads: bool,
    fail_writes: bool,
}

/// Blob store kept in process memory.
///
/// Clones share the same contents. Reads and writes can be made to fail to
/// exercise error paths.
#[derive(Debug, Clone, Default)]
pub struct MemoryBlobStore {
    inner: Arc<Mutex<Inner>>,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds `value` under `key`
    pub fn with_value(key: &str, value: impl Into<String>) -> Self {
        let mut inner = Inner::default();
        inner.values.insert(key.to_string(), value.into());
        Self {
            inner: Arc::new(Mutex::new(inner)),
        }
    }

    pub async fn set_fail_reads(&self, fail: bool) {
        self.inner.lock().await.fail_reads = fail;
    }

    pub async fn set_fail_writes(&self, fail: bool) {
        self.inner.lock().await.fail_writes = fail;
    }

    /// Raw value under `key`, ignoring injected failures
    pub async fn peek(&self, key: &str) -> Option<String> {
        self.inner.lock().await.values.get(key).cloned()
    }
}

#[async_trait]
impl BlobStore for MemoryBlobStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let inner = self.inner.lock().await;
        if inner.fail_reads {
            return Err(Error::Storage(format!("read of '{key}' failed")));
        }
        Ok(inner.values.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut inner = self.inner.lock().await;
        if inner.fail_writes {
            return Err(Error::Storage(format!("write of '{key}' failed")));
        }
        inner.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
