//! Shared list service wrapper used across clients.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::config::StoreConfig;
use crate::models::{Category, Item, ItemKey};
use crate::storage::{BlobStore, FileBlobStore, MemoryBlobStore};
use crate::store::{Confirm, Hydration, ListStore, RemoveOutcome};
use crate::Result;

type DynListStore = ListStore<Box<dyn BlobStore>>;

/// Cloneable handle to a single [`ListStore`].
///
/// Each operation holds the store lock for the whole call, storage write
/// included, and releases it when the guard drops.
#[derive(Clone)]
pub struct ListService {
    store: Arc<Mutex<DynListStore>>,
}

impl ListService {
    /// Service over a file blob store described by `config`.
    pub fn open(config: &StoreConfig) -> Self {
        tracing::info!("Using list storage at {}", config.data_path.display());
        let storage: Box<dyn BlobStore> = Box::new(FileBlobStore::new(&config.data_path));
        Self::from_store(ListStore::with_storage_key(
            storage,
            config.storage_key.clone(),
        ))
    }

    /// Service over any blob store, under the default storage key.
    pub fn with_storage(storage: impl BlobStore + 'static) -> Self {
        let storage: Box<dyn BlobStore> = Box::new(storage);
        Self::from_store(ListStore::new(storage))
    }

    /// In-memory service (primarily for tests).
    pub fn in_memory() -> Self {
        Self::with_storage(MemoryBlobStore::new())
    }

    fn from_store(store: DynListStore) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
        }
    }

    /// Hydrate from storage.
    pub async fn load(&self) -> Hydration {
        let mut store = self.store.lock().await;
        store.load().await
    }

    /// Add an item; blank text is ignored.
    pub async fn add(&self, text: &str, category: Category) -> Result<Option<ItemKey>> {
        let mut store = self.store.lock().await;
        store.add(text, category).await
    }

    /// Delete an item after confirmation.
    pub async fn remove(&self, key: &ItemKey, confirm: impl Confirm) -> Result<RemoveOutcome> {
        let mut store = self.store.lock().await;
        store.remove(key, confirm).await
    }

    /// Snapshot of the items in `category`, in collection order.
    pub async fn list(&self, category: Category) -> Vec<(ItemKey, Item)> {
        let store = self.store.lock().await;
        store
            .filter_by_category(category)
            .map(|(key, item)| (key.clone(), item.clone()))
            .collect()
    }

    pub async fn count(&self, category: Category) -> usize {
        let store = self.store.lock().await;
        store.count(category)
    }

    /// Resolve a full key or unique key prefix.
    pub async fn resolve_key(&self, query: &str) -> Result<ItemKey> {
        let store = self.store.lock().await;
        store.resolve_key(query)
    }

    pub async fn error_message(&self) -> Option<String> {
        let store = self.store.lock().await;
        store.error_message().map(str::to_string)
    }

    pub async fn clear_error(&self) {
        let mut store = self.store.lock().await;
        store.clear_error();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Confirmation;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn clones_share_one_store() {
        let service = ListService::in_memory();
        let other = service.clone();
        service.load().await;

        service.add("Email boss", Category::Work).await.unwrap();

        assert_eq!(other.count(Category::Work).await, 1);
        assert_eq!(other.count(Category::Travel).await, 0);
    }

    #[tokio::test]
    async fn file_backed_service_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let config = StoreConfig::new(dir.path().join("storage.json"));

        let service = ListService::open(&config);
        assert_eq!(service.load().await, Hydration::Empty);
        let key = service.add("Lisbon", Category::Travel).await.unwrap().unwrap();
        service.add("Porto", Category::Travel).await.unwrap();
        service.remove(&key, Confirmation::Confirm).await.unwrap();

        let reopened = ListService::open(&config);
        assert_eq!(reopened.load().await, Hydration::Loaded(1));
        let travel = reopened.list(Category::Travel).await;
        assert_eq!(travel.len(), 1);
        assert_eq!(travel[0].1.text, "Porto");
    }

    #[tokio::test]
    async fn write_failure_is_reported_through_error_message() {
        let storage = MemoryBlobStore::new();
        let service = ListService::with_storage(storage.clone());
        service.load().await;

        storage.set_fail_writes(true).await;
        assert!(service.add("x", Category::Work).await.is_err());
        assert!(service.error_message().await.is_some());

        service.clear_error().await;
        assert_eq!(service.error_message().await, None);
    }
}
