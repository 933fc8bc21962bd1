//! Inventory domain module: daily quality and sell-in aging.
//!
//! This crate contains business rules for the shop inventory, implemented purely
//! as deterministic domain logic (no IO, no rendering, no storage).

pub mod class;
pub mod engine;
pub mod item;
pub mod quality;
pub mod rules;
pub mod stock;

pub use class::ItemClass;
pub use engine::{ItemAged, QualityEngine, update_quality};
pub use item::Item;
pub use quality::QualityChange;
pub use rules::QualityRules;
pub use stock::{Inventory, default_items};
