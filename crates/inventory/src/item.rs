use serde::{Deserialize, Serialize};

use gildedrose_core::{DomainError, DomainResult};

use crate::category::Category;

/// Construction record for an item, as supplied by a caller or a stock file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewItem {
    pub name: String,
    pub sell_in: i32,
    pub quality: i32,
}

impl NewItem {
    pub fn new(name: impl Into<String>, sell_in: i32, quality: i32) -> Self {
        Self {
            name: name.into(),
            sell_in,
            quality,
        }
    }
}

/// A stocked item.
///
/// The category is resolved from the name once, when the item is built, and
/// never changes afterwards. Only `sell_in` and `quality` evolve, and only
/// through the daily update in [`crate::rules`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "NewItem")]
pub struct Item {
    name: String,
    pub(crate) sell_in: i32,
    pub(crate) quality: i32,
    category: Category,
}

impl Item {
    /// Build an item, rejecting blank names.
    pub fn new(name: impl Into<String>, sell_in: i32, quality: i32) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::invalid_item("name cannot be empty"));
        }
        let category = Category::classify(&name);
        Ok(Self {
            name,
            sell_in,
            quality,
            category,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sell_in(&self) -> i32 {
        self.sell_in
    }

    pub fn quality(&self) -> i32 {
        self.quality
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Whether the sell-by date has passed (`sell_in < 0`).
    pub fn sell_date_passed(&self) -> bool {
        self.sell_in < 0
    }
}

impl TryFrom<NewItem> for Item {
    type Error = DomainError;

    fn try_from(record: NewItem) -> Result<Self, Self::Error> {
        Item::new(record.name, record.sell_in, record.quality)
    }
}

/// Listing line: `name, sellIn, quality`.
impl core::fmt::Display for Item {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}, {}, {}", self.name, self.sell_in, self.quality)
    }
}
