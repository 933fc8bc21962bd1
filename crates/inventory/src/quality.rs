//! Quality and sell-in arithmetic shared by every aging rule.
//!
//! All arithmetic saturates, so extreme constructed values never panic.

/// Change a rule applies to an item's quality for one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QualityChange {
    Unchanged,
    /// Add a (possibly negative) delta, subject to the ceiling.
    Adjust(i64),
    /// Drop straight to zero, whatever the current quality.
    Reset,
}

/// Apply `change` to `quality`.
///
/// A positive delta is skipped entirely when quality is already at or above
/// `ceiling` (constructed values above the ceiling are kept, not lowered), and
/// otherwise stops at `ceiling`. Negative deltas are never limited here; see
/// [`floor_quality`].
pub fn apply_change(quality: i64, change: QualityChange, ceiling: i64) -> i64 {
    match change {
        QualityChange::Unchanged => quality,
        QualityChange::Reset => 0,
        QualityChange::Adjust(delta) if delta > 0 => {
            if quality >= ceiling {
                quality
            } else {
                quality.saturating_add(delta).min(ceiling)
            }
        }
        QualityChange::Adjust(delta) => quality.saturating_add(delta),
    }
}

/// Quality is never observed below zero after an update.
pub fn floor_quality(quality: i64) -> i64 {
    quality.max(0)
}

pub fn decrement_sell_in(sell_in: i64) -> i64 {
    sell_in.saturating_sub(1)
}
