//! Data models for worktrip

mod collection;
mod item;

pub use collection::Collection;
pub use item::{Category, Item, ItemKey};
