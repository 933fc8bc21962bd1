//! Item classification: which aging behavior an item follows.
//!
//! Classification is driven by the item name. Three legacy items are matched by
//! their exact name; anything mentioning "conjured" (any case, anywhere in the
//! name) is conjured; everything else ages as a normal item.

use serde::{Deserialize, Serialize};

pub const SULFURAS: &str = "Sulfuras, Hand of Ragnaros";
pub const AGED_BRIE: &str = "Aged Brie";
pub const BACKSTAGE_PASS: &str = "Backstage passes to a TAFKAL80ETC concert";

const CONJURED_MARKER: &str = "conjured";

/// Aging behavior of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemClass {
    /// Legendary: never sold, never degrades.
    Sulfuras,
    /// Improves with age.
    AgedBrie,
    /// Improves as the concert nears, worthless afterwards.
    BackstagePass,
    /// Degrades twice as fast as a normal item.
    Conjured,
    Normal,
}

impl ItemClass {
    pub fn classify(name: &str) -> Self {
        match name {
            SULFURAS => ItemClass::Sulfuras,
            AGED_BRIE => ItemClass::AgedBrie,
            BACKSTAGE_PASS => ItemClass::BackstagePass,
            _ if is_conjured(name) => ItemClass::Conjured,
            _ => ItemClass::Normal,
        }
    }

    /// Whether `sell_in` counts down for this class.
    pub fn ages(self) -> bool {
        !matches!(self, ItemClass::Sulfuras)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ItemClass::Sulfuras => "sulfuras",
            ItemClass::AgedBrie => "aged_brie",
            ItemClass::BackstagePass => "backstage_pass",
            ItemClass::Conjured => "conjured",
            ItemClass::Normal => "normal",
        }
    }
}

impl core::fmt::Display for ItemClass {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

fn is_conjured(name: &str) -> bool {
    name.to_lowercase().contains(CONJURED_MARKER)
}
