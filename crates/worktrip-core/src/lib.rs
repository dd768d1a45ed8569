//! worktrip-core - Core library for worktrip
//!
//! This crate contains the item models, the persisted list store, and the
//! blob storage backends shared by every worktrip interface.

pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod state;
pub mod storage;
pub mod store;
pub mod util;

pub use error::{Error, Result};
pub use models::{Category, Collection, Item, ItemKey};
pub use store::{Confirm, Confirmation, DeletePrompt, Hydration, ListStore, RemoveOutcome};
