//! Key-value blob storage used to persist the collection.
//!
//! A [`BlobStore`] maps string keys to string values, nothing more. The list
//! store keeps its entire collection under a single key.

mod file;
mod memory;

pub use file::FileBlobStore;
pub use memory::MemoryBlobStore;

use async_trait::async_trait;

use crate::Result;

/// Storage key the collection is written under.
pub const STORAGE_KEY: &str = "@toDos";

/// Trait for string blob storage operations
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Read the value stored under `key`, `None` when absent
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value stored under `key`
    async fn set(&self, key: &str, value: &str) -> Result<()>;
}

#[async_trait]
impl<S: BlobStore + ?Sized> BlobStore for Box<S> {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key).await
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value).await
    }
}
