//! Transient state of the single list screen.
//!
//! None of this is persisted: the active category starts at Work on every
//! launch and the input box starts empty.

use crate::models::{Category, Item, ItemKey};
use crate::services::ListService;
use crate::store::Hydration;
use crate::Result;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScreenState {
    /// Category whose items are visible and receive new entries
    pub active: Category,
    /// Current contents of the input box
    pub input: String,
    /// True while the initial load is in flight
    pub loading: bool,
    /// Last user-facing error
    pub error_message: Option<String>,
}

impl ScreenState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&mut self, category: Category) {
        self.active = category;
    }

    pub fn toggle(&mut self) {
        self.active = self.active.toggled();
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub const fn placeholder(&self) -> &'static str {
        self.active.placeholder()
    }

    /// Run the initial load with the loading flag raised.
    pub async fn hydrate(&mut self, service: &ListService) -> Hydration {
        self.loading = true;
        let hydration = service.load().await;
        self.loading = false;
        self.error_message = match &hydration {
            Hydration::Failed(message) => Some(message.clone()),
            Hydration::Loaded(_) | Hydration::Empty => None,
        };
        hydration
    }

    /// Submit the input box into the active category.
    ///
    /// Blank input is ignored and kept as is. The input is cleared only once
    /// the item has been saved; on failure it stays so nothing typed is lost.
    pub async fn submit(&mut self, service: &ListService) -> Result<Option<ItemKey>> {
        match service.add(&self.input, self.active).await {
            Ok(Some(key)) => {
                self.input.clear();
                Ok(Some(key))
            }
            Ok(None) => Ok(None),
            Err(error) => {
                self.error_message = service.error_message().await;
                Err(error)
            }
        }
    }

    /// Items shown for the active category
    pub async fn visible(&self, service: &ListService) -> Vec<(ItemKey, Item)> {
        service.list(self.active).await
    }
}
