//! Simulation loop: load stock, tick, print.

use std::io::Write;
use std::path::Path;

use anyhow::Context;

use gildedrose_inventory::{Inventory, Item, default_items};

use crate::config::ShopConfig;
use crate::render::render_table;

/// Load items from a JSON array file, or the opening stock when no path is given.
pub fn load_items(path: Option<&Path>) -> anyhow::Result<Vec<Item>> {
    let Some(path) = path else {
        return Ok(default_items());
    };

    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read inventory file {}", path.display()))?;
    let items: Vec<Item> = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse inventory file {}", path.display()))?;

    tracing::info!(path = %path.display(), items = items.len(), "loaded inventory");
    Ok(items)
}

/// Print the starting table, then age the inventory `config.days` times,
/// printing the table after every day.
pub fn run(config: &ShopConfig, out: &mut impl Write) -> anyhow::Result<Inventory> {
    let items = load_items(config.inventory_path.as_deref())?;
    let mut inventory = Inventory::new(items);

    write!(out, "{}", render_table(inventory.day(), inventory.items()))
        .context("failed to write inventory table")?;

    for _ in 0..config.days {
        let reports = inventory.tick();
        let expired = reports.iter().filter(|r| r.expired()).count();
        tracing::info!(day = inventory.day(), items = reports.len(), expired, "day ticked");

        writeln!(out).context("failed to write inventory table")?;
        write!(out, "{}", render_table(inventory.day(), inventory.items()))
            .context("failed to write inventory table")?;
    }

    Ok(inventory)
}
