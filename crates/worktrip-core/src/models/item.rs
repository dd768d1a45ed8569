//! Item model

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use uuid::Uuid;

/// A unique identifier for an item.
///
/// New keys are UUID v7 strings (time-sortable). Keys read back from storage
/// are kept verbatim, so collections written with millisecond timestamp keys
/// still load.
///
/// Keys order by creation time, then by their text, so timestamp keys and
/// UUID keys interleave in the order the items were created.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemKey(String);

impl ItemKey {
    /// Create a new unique item key using UUID v7
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    /// Get the string representation of this key
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Creation time in Unix milliseconds, when the key encodes one.
    pub fn created_at_millis(&self) -> Option<i64> {
        if let Ok(millis) = self.0.parse::<i64>() {
            return Some(millis);
        }

        let (secs, nanos) = Uuid::parse_str(&self.0).ok()?.get_timestamp()?.to_unix();
        let millis = secs
            .checked_mul(1000)?
            .checked_add(u64::from(nanos / 1_000_000))?;
        i64::try_from(millis).ok()
    }
}

impl Ord for ItemKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.created_at_millis()
            .cmp(&other.created_at_millis())
            .then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for ItemKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Default for ItemKey {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ItemKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemKey {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ItemKey {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// The two lists an item can belong to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Category {
    #[default]
    Work,
    Travel,
}

impl Category {
    pub const ALL: [Self; 2] = [Self::Work, Self::Travel];

    /// Map the persisted `work` flag to a category
    #[must_use]
    pub const fn from_work_flag(work: bool) -> Self {
        if work {
            Self::Work
        } else {
            Self::Travel
        }
    }

    #[must_use]
    pub const fn is_work(self) -> bool {
        matches!(self, Self::Work)
    }

    /// The other category
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Work => Self::Travel,
            Self::Travel => Self::Work,
        }
    }

    /// Input placeholder shown while this category is active
    #[must_use]
    pub const fn placeholder(self) -> &'static str {
        match self {
            Self::Work => "Add a To Do",
            Self::Travel => "Where do you want to go?",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Work => "Work",
            Self::Travel => "Travel",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single entry in a list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ItemRecord", into = "ItemRecord")]
pub struct Item {
    /// Free text as entered
    pub text: String,
    /// Which list the item belongs to
    pub category: Category,
}

impl Item {
    #[must_use]
    pub fn new(text: impl Into<String>, category: Category) -> Self {
        Self {
            text: text.into(),
            category,
        }
    }
}

/// Stored shape of an item: `{ "text": "...", "work": true }`
#[derive(Serialize, Deserialize)]
struct ItemRecord {
    text: String,
    work: bool,
}

impl From<ItemRecord> for Item {
    fn from(record: ItemRecord) -> Self {
        Self {
            text: record.text,
            category: Category::from_work_flag(record.work),
        }
    }
}

impl From<Item> for ItemRecord {
    fn from(item: Item) -> Self {
        Self {
            text: item.text,
            work: item.category.is_work(),
        }
    }
}
