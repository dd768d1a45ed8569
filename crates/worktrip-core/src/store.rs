//! The persisted list store.
//!
//! [`ListStore`] owns the in-memory [`Collection`] and keeps the blob store in
//! step with it: every successful mutation rewrites the whole collection
//! under one storage key, and a failed write leaves memory untouched.

use crate::models::{Category, Collection, Item, ItemKey};
use crate::storage::{BlobStore, STORAGE_KEY};
use crate::util::normalize_text;
use crate::{Error, Result};

/// Message surfaced when the saved collection cannot be read or parsed.
pub const LOAD_ERROR_MESSAGE: &str = "Failed to load the saved to-do list.";

/// Message surfaced when a mutation cannot be written back.
pub const SAVE_ERROR_MESSAGE: &str = "Failed to save the to-do list.";

/// Number of characters shown for each candidate of an ambiguous prefix.
const SHORT_KEY_LEN: usize = 13;

/// Outcome of [`ListStore::load`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Hydration {
    /// A saved collection was found and parsed.
    Loaded(usize),
    /// Nothing was saved yet.
    Empty,
    /// Reading or parsing failed; the collection was left empty.
    Failed(String),
}

/// Two-choice dialog shown before an item is deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeletePrompt {
    pub title: &'static str,
    pub message: &'static str,
    pub cancel_label: &'static str,
    /// Label of the destructive choice
    pub confirm_label: &'static str,
}

pub const DELETE_PROMPT: DeletePrompt = DeletePrompt {
    title: "Delete To Do",
    message: "Are you sure",
    cancel_label: "Cancel",
    confirm_label: "I'm Sure",
};

/// The user's answer to a [`DeletePrompt`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Cancel,
    Confirm,
}

/// Something that can answer a [`DeletePrompt`].
pub trait Confirm {
    fn confirm(&mut self, prompt: &DeletePrompt) -> Confirmation;
}

impl Confirm for Confirmation {
    fn confirm(&mut self, _prompt: &DeletePrompt) -> Confirmation {
        *self
    }
}

impl<F> Confirm for F
where
    F: FnMut(&DeletePrompt) -> Confirmation,
{
    fn confirm(&mut self, prompt: &DeletePrompt) -> Confirmation {
        self(prompt)
    }
}

/// Outcome of [`ListStore::remove`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoveOutcome {
    Removed(Item),
    Cancelled,
}

/// In-memory collection backed by a [`BlobStore`].
pub struct ListStore<S: BlobStore> {
    storage: S,
    storage_key: String,
    collection: Collection,
    error_message: Option<String>,
}

impl<S: BlobStore> ListStore<S> {
    /// Create an empty store writing under the default storage key.
    ///
    /// Nothing is read until [`load`](Self::load) is called.
    pub fn new(storage: S) -> Self {
        Self::with_storage_key(storage, STORAGE_KEY)
    }

    pub fn with_storage_key(storage: S, storage_key: impl Into<String>) -> Self {
        Self {
            storage,
            storage_key: storage_key.into(),
            collection: Collection::new(),
            error_message: None,
        }
    }

    /// Hydrate the collection from storage.
    ///
    /// Any read or parse failure leaves the collection empty and sets
    /// [`error_message`](Self::error_message). There is no retry.
    pub async fn load(&mut self) -> Hydration {
        self.collection = Collection::new();
        self.error_message = None;

        let blob = match self.storage.get(&self.storage_key).await {
            Ok(Some(blob)) if !blob.trim().is_empty() => blob,
            Ok(_) => {
                tracing::info!("No saved list under '{}'", self.storage_key);
                return Hydration::Empty;
            }
            Err(error) => return self.hydration_failed(&error),
        };

        match Collection::from_blob(&blob) {
            Ok(collection) => {
                let count = collection.len();
                tracing::info!("Loaded {count} items from '{}'", self.storage_key);
                self.collection = collection;
                Hydration::Loaded(count)
            }
            Err(error) => self.hydration_failed(&error),
        }
    }

    fn hydration_failed(&mut self, error: &Error) -> Hydration {
        tracing::warn!("Failed to load list from '{}': {error}", self.storage_key);
        self.error_message = Some(LOAD_ERROR_MESSAGE.to_string());
        Hydration::Failed(LOAD_ERROR_MESSAGE.to_string())
    }

    /// Add an item to `category` and persist the collection.
    ///
    /// Empty or whitespace-only text is ignored and yields `Ok(None)`.
    pub async fn add(&mut self, text: &str, category: Category) -> Result<Option<ItemKey>> {
        let Some(text) = normalize_text(text) else {
            return Ok(None);
        };

        let mut key = ItemKey::new();
        while self.collection.contains(&key) {
            key = ItemKey::new();
        }

        let mut next = self.collection.clone();
        next.insert(key.clone(), Item::new(text, category));
        self.commit(next).await?;

        tracing::debug!("Added item {key} to {category}");
        Ok(Some(key))
    }

    /// Ask `confirm` whether to delete `key`, then delete and persist.
    ///
    /// Unknown keys fail with [`Error::NotFound`] without prompting.
    pub async fn remove(
        &mut self,
        key: &ItemKey,
        mut confirm: impl Confirm,
    ) -> Result<RemoveOutcome> {
        if !self.collection.contains(key) {
            return Err(Error::NotFound(key.to_string()));
        }

        if confirm.confirm(&DELETE_PROMPT) == Confirmation::Cancel {
            return Ok(RemoveOutcome::Cancelled);
        }

        let mut next = self.collection.clone();
        let item = next
            .remove(key)
            .ok_or_else(|| Error::NotFound(key.to_string()))?;
        self.commit(next).await?;

        tracing::debug!("Removed item {key}");
        Ok(RemoveOutcome::Removed(item))
    }

    /// Write `next` to storage and adopt it only once the write succeeded.
    async fn commit(&mut self, next: Collection) -> Result<()> {
        let blob = next.to_blob()?;
        match self.storage.set(&self.storage_key, &blob).await {
            Ok(()) => {
                self.collection = next;
                Ok(())
            }
            Err(error) => {
                tracing::warn!("Failed to save list to '{}': {error}", self.storage_key);
                self.error_message = Some(SAVE_ERROR_MESSAGE.to_string());
                Err(error)
            }
        }
    }

    /// Lazy, restartable view of the items in `category`
    pub fn filter_by_category(
        &self,
        category: Category,
    ) -> impl Iterator<Item = (&ItemKey, &Item)> + Clone + '_ {
        self.collection.filter_by_category(category)
    }

    /// Resolve a full key or a unique key prefix
    pub fn resolve_key(&self, query: &str) -> Result<ItemKey> {
        let query = query.trim();
        if query.is_empty() {
            return Err(Error::InvalidInput("Item key cannot be empty".to_string()));
        }

        let exact = ItemKey::from(query);
        if self.collection.contains(&exact) {
            return Ok(exact);
        }

        let matches = self.collection.keys_with_prefix(query, 3);
        match matches.as_slice() {
            [] => Err(Error::NotFound(query.to_string())),
            [key] => Ok((*key).clone()),
            _ => Err(Error::AmbiguousKey {
                prefix: query.to_string(),
                matches: matches
                    .iter()
                    .map(|key| key.as_str().chars().take(SHORT_KEY_LEN).collect::<String>())
                    .collect::<Vec<_>>()
                    .join(", "),
            }),
        }
    }

    pub const fn collection(&self) -> &Collection {
        &self.collection
    }

    pub fn get(&self, key: &ItemKey) -> Option<&Item> {
        self.collection.get(key)
    }

    pub fn len(&self) -> usize {
        self.collection.len()
    }

    pub fn is_empty(&self) -> bool {
        self.collection.is_empty()
    }

    pub fn count(&self, category: Category) -> usize {
        self.collection.count(category)
    }

    /// User-facing message from the last failed load or save
    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn clear_error(&mut self) {
        self.error_message = None;
    }

    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }
}
