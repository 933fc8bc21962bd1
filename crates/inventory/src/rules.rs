//! Rule configuration: the magnitudes the aging rules are built from.

use gildedrose_core::{DomainError, DomainResult, ValueObject};

pub const DEFAULT_DEGRADATION_RATE: i64 = 1;
pub const DEFAULT_CONJURED_MULTIPLIER: i64 = 2;
pub const DEFAULT_EXPIRY_MULTIPLIER: i64 = 2;
pub const DEFAULT_QUALITY_CEILING: i64 = 50;

/// Immutable magnitudes for one rule set.
///
/// Every per-day delta is derived from these four values:
/// - normal items lose `degradation_rate` per day
/// - conjured items lose `conjured_multiplier` times as much
/// - once expired (`sell_in < 0`) losses and Aged Brie gains are scaled by
///   `expiry_multiplier`
/// - increases never push quality past `quality_ceiling`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QualityRules {
    degradation_rate: i64,
    conjured_multiplier: i64,
    expiry_multiplier: i64,
    quality_ceiling: i64,
}

impl Default for QualityRules {
    fn default() -> Self {
        Self {
            degradation_rate: DEFAULT_DEGRADATION_RATE,
            conjured_multiplier: DEFAULT_CONJURED_MULTIPLIER,
            expiry_multiplier: DEFAULT_EXPIRY_MULTIPLIER,
            quality_ceiling: DEFAULT_QUALITY_CEILING,
        }
    }
}

impl ValueObject for QualityRules {}

impl QualityRules {
    pub fn with_degradation_rate(mut self, degradation_rate: i64) -> Self {
        self.degradation_rate = degradation_rate;
        self
    }

    pub fn with_conjured_multiplier(mut self, conjured_multiplier: i64) -> Self {
        self.conjured_multiplier = conjured_multiplier;
        self
    }

    pub fn with_expiry_multiplier(mut self, expiry_multiplier: i64) -> Self {
        self.expiry_multiplier = expiry_multiplier;
        self
    }

    pub fn with_quality_ceiling(mut self, quality_ceiling: i64) -> Self {
        self.quality_ceiling = quality_ceiling;
        self
    }

    pub fn degradation_rate(&self) -> i64 {
        self.degradation_rate
    }

    pub fn conjured_multiplier(&self) -> i64 {
        self.conjured_multiplier
    }

    pub fn expiry_multiplier(&self) -> i64 {
        self.expiry_multiplier
    }

    pub fn quality_ceiling(&self) -> i64 {
        self.quality_ceiling
    }

    pub fn validate(&self) -> DomainResult<()> {
        if self.degradation_rate <= 0 {
            return Err(DomainError::validation("degradation_rate must be positive"));
        }
        if self.conjured_multiplier < 1 {
            return Err(DomainError::validation("conjured_multiplier must be at least 1"));
        }
        if self.expiry_multiplier < 1 {
            return Err(DomainError::validation("expiry_multiplier must be at least 1"));
        }
        if self.quality_ceiling < 0 {
            return Err(DomainError::validation("quality_ceiling cannot be negative"));
        }
        Ok(())
    }

    /// Quality lost in one day by a normal or conjured item.
    pub fn decay(&self, conjured: bool, expired: bool) -> i64 {
        let base = self.step(expired);
        if conjured {
            base.saturating_mul(self.conjured_multiplier)
        } else {
            base
        }
    }

    /// Quality gained in one day by Aged Brie.
    pub fn maturation(&self, expired: bool) -> i64 {
        self.step(expired)
    }

    /// Quality gained in one day by a backstage pass in the given band
    /// (1 far out, 2 within ten days, 3 within five).
    pub fn anticipation(&self, band: i64) -> i64 {
        self.degradation_rate.saturating_mul(band)
    }

    fn step(&self, expired: bool) -> i64 {
        if expired {
            self.degradation_rate.saturating_mul(self.expiry_multiplier)
        } else {
            self.degradation_rate
        }
    }
}
