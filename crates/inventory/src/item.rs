use serde::{Deserialize, Serialize};

/// A stocked item: its name plus the two fields aged once per day.
///
/// Construction accepts any values; quality may start above the ceiling or
/// below zero. Only the engine mutates `sell_in` and `quality`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    name: String,
    sell_in: i64,
    quality: i64,
}

impl Item {
    pub fn new(name: impl Into<String>, sell_in: i64, quality: i64) -> Self {
        Self {
            name: name.into(),
            sell_in,
            quality,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Days remaining to sell; negative once expired.
    pub fn sell_in(&self) -> i64 {
        self.sell_in
    }

    pub fn quality(&self) -> i64 {
        self.quality
    }

    pub(crate) fn set_sell_in(&mut self, sell_in: i64) {
        self.sell_in = sell_in;
    }

    pub(crate) fn set_quality(&mut self, quality: i64) {
        self.quality = quality;
    }
}

impl core::fmt::Display for Item {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}, {}, {}", self.name, self.sell_in, self.quality)
    }
}
