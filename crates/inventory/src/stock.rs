//! The shop's stock: an owned item list aged one day at a time.

use crate::class::{AGED_BRIE, BACKSTAGE_PASS, SULFURAS};
use crate::engine::{ItemAged, QualityEngine};
use crate::item::Item;

/// Opening stock of the shop.
pub fn default_items() -> Vec<Item> {
    vec![
        Item::new("+5 Dexterity Vest", 10, 20),
        Item::new(AGED_BRIE, 2, 0),
        Item::new("Elixir of the Mongoose", 5, 7),
        Item::new(SULFURAS, 0, 80),
        Item::new(BACKSTAGE_PASS, 15, 20),
        Item::new("Conjured Mana Cake", 3, 6),
    ]
}

/// Items plus the engine that ages them and the number of days elapsed.
///
/// Only the current state is kept; earlier days are not retained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inventory {
    items: Vec<Item>,
    engine: QualityEngine,
    day: u64,
}

impl Inventory {
    pub fn new(items: Vec<Item>) -> Self {
        Self::with_engine(items, QualityEngine::default())
    }

    pub fn with_engine(items: Vec<Item>, engine: QualityEngine) -> Self {
        Self {
            items,
            engine,
            day: 0,
        }
    }

    pub fn opening_stock() -> Self {
        Self::new(default_items())
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn day(&self) -> u64 {
        self.day
    }

    pub fn engine(&self) -> &QualityEngine {
        &self.engine
    }

    /// Advance one day, returning a report per item in stock order.
    pub fn tick(&mut self) -> Vec<ItemAged> {
        let engine = self.engine;
        let reports: Vec<ItemAged> = self.items.iter_mut().map(|item| engine.age(item)).collect();
        self.day = self.day.saturating_add(1);

        tracing::debug!(day = self.day, items = reports.len(), "inventory aged");
        reports
    }

    /// Restore the opening stock and rewind to day zero. The engine is kept.
    pub fn reset(&mut self) {
        self.items = default_items();
        self.day = 0;
    }
}

impl Default for Inventory {
    fn default() -> Self {
        Self::opening_stock()
    }
}
