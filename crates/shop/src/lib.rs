//! `gildedrose-shop`
//!
//! Command-line day-tick simulator: loads stock, ages it one day at a time and
//! prints the inventory table after each day.

pub mod config;
pub mod render;
pub mod run;

pub use config::ShopConfig;
pub use render::render_table;
pub use run::{load_items, run};
