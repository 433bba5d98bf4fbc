//! Item categories and the name-based classifier.

use serde::{Deserialize, Serialize};

use gildedrose_core::ValueObject;

pub const LEGENDARY_NAME: &str = "Sulfuras, Hand of Ragnaros";
pub const BRIE_NAME: &str = "Aged Brie";
pub const BACKSTAGE_PASS_NAME: &str = "Backstage passes to a TAFKAL80ETC concert";

/// Behavioral category of an item; decides which aging rule applies.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Never ages, quality pinned at 80.
    Legendary,
    /// Gains quality with age.
    Brie,
    /// Gains quality as the concert nears, worthless afterwards.
    BackstagePass,
    /// Everything else: loses quality with age.
    Ordinary,
}

impl ValueObject for Category {}

impl Category {
    /// Classify an item by its exact name. Unknown names are `Ordinary`.
    pub fn classify(name: &str) -> Self {
        match name {
            LEGENDARY_NAME => Category::Legendary,
            BRIE_NAME => Category::Brie,
            BACKSTAGE_PASS_NAME => Category::BackstagePass,
            _ => Category::Ordinary,
        }
    }

    /// Legendary items have no sell-by date.
    pub fn has_expiry_date(self) -> bool {
        !matches!(self, Category::Legendary)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Legendary => "legendary",
            Category::Brie => "brie",
            Category::BackstagePass => "backstage_pass",
            Category::Ordinary => "ordinary",
        }
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
