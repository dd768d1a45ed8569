//! Keyed item collection and its blob encoding

use std::collections::btree_map;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{Category, Item, ItemKey};
use crate::error::Result;

/// All items, keyed by [`ItemKey`].
///
/// Iteration follows key order, which for both UUID v7 and timestamp keys is
/// creation order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Collection {
    items: BTreeMap<ItemKey, Item>,
}

impl Collection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a stored blob: `{ "<key>": { "text": "...", "work": bool } }`
    pub fn from_blob(blob: &str) -> Result<Self> {
        Ok(serde_json::from_str(blob)?)
    }

    /// Serialize the whole collection into a blob
    pub fn to_blob(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn get(&self, key: &ItemKey) -> Option<&Item> {
        self.items.get(key)
    }

    pub fn contains(&self, key: &ItemKey) -> bool {
        self.items.contains_key(key)
    }

    /// Insert an item, returning the one previously stored under `key`
    pub fn insert(&mut self, key: ItemKey, item: Item) -> Option<Item> {
        self.items.insert(key, item)
    }

    pub fn remove(&mut self, key: &ItemKey) -> Option<Item> {
        self.items.remove(key)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, ItemKey, Item> {
        self.items.iter()
    }

    /// Lazy view of the items in `category`.
    ///
    /// The iterator is `Clone`, so a caller can walk it more than once.
    pub fn filter_by_category(
        &self,
        category: Category,
    ) -> impl Iterator<Item = (&ItemKey, &Item)> + Clone + '_ {
        self.items
            .iter()
            .filter(move |(_, item)| item.category == category)
    }

    pub fn count(&self, category: Category) -> usize {
        self.filter_by_category(category).count()
    }

    /// Keys starting with `prefix`, at most `limit` of them
    pub fn keys_with_prefix(&self, prefix: &str, limit: usize) -> Vec<&ItemKey> {
        self.items
            .keys()
            .filter(|key| key.as_str().starts_with(prefix))
            .take(limit)
            .collect()
    }
}

impl<'a> IntoIterator for &'a Collection {
    type Item = (&'a ItemKey, &'a Item);
    type IntoIter = btree_map::Iter<'a, ItemKey, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<(ItemKey, Item)> for Collection {
    fn from_iter<T: IntoIterator<Item = (ItemKey, Item)>>(iter: T) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> Collection {
        [
            ("1700000000001", Item::new("Email boss", Category::Work)),
            ("1700000000002", Item::new("Lisbon", Category::Travel)),
            ("1700000000003", Item::new("Ship release", Category::Work)),
        ]
        .into_iter()
        .map(|(key, item)| (ItemKey::from(key), item))
        .collect()
    }

    #[test]
    fn test_blob_round_trip() {
        let collection = sample();
        let restored = Collection::from_blob(&collection.to_blob().unwrap()).unwrap();
        assert_eq!(restored, collection);
    }

    #[test]
    fn test_reads_timestamp_keyed_blob() {
        let blob = r#"{"1690000000000":{"text":"Buy milk","work":true},"1690000000500":{"text":"Jeju","work":false}}"#;
        let collection = Collection::from_blob(blob).unwrap();

        assert_eq!(collection.len(), 2);
        assert_eq!(
            collection.get(&ItemKey::from("1690000000500")),
            Some(&Item::new("Jeju", Category::Travel))
        );
    }

    #[test]
    fn test_rejects_malformed_blob() {
        assert!(Collection::from_blob("{not json").is_err());
        assert!(Collection::from_blob(r#"{"1":{"text":"x"}}"#).is_err());
        assert!(Collection::from_blob("[]").is_err());
    }

    #[test]
    fn test_filter_by_category() {
        let collection = sample();
        let work: Vec<&str> = collection
            .filter_by_category(Category::Work)
            .map(|(_, item)| item.text.as_str())
            .collect();
        assert_eq!(work, vec!["Email boss", "Ship release"]);
        assert_eq!(collection.count(Category::Travel), 1);
    }

    #[test]
    fn test_filter_is_restartable() {
        let collection = sample();
        let view = collection.filter_by_category(Category::Work);
        let first: Vec<_> = view.clone().collect();
        let second: Vec<_> = view.collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_keys_with_prefix() {
        let collection = sample();
        assert_eq!(collection.keys_with_prefix("170000000000", 10).len(), 3);
        assert_eq!(collection.keys_with_prefix("1700000000002", 10).len(), 1);
        assert!(collection.keys_with_prefix("9", 10).is_empty());
    }
}
