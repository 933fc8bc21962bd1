//! Plain-text inventory table.

use gildedrose_inventory::Item;

const NAME_HEADER: &str = "Name";
const QUALITY_HEADER: &str = "Quality";
const SELL_IN_HEADER: &str = "Sell In";

/// Render one day's inventory as a table, items in stock order.
pub fn render_table(day: u64, items: &[Item]) -> String {
    let name_width = items
        .iter()
        .map(|i| i.name().chars().count())
        .chain(std::iter::once(NAME_HEADER.len()))
        .max()
        .unwrap_or(NAME_HEADER.len());

    let mut out = format!("Day {day}\n");
    out.push_str(&format!(
        "{NAME_HEADER:<name_width$} | {QUALITY_HEADER} | {SELL_IN_HEADER}\n"
    ));
    for item in items {
        out.push_str(&format!(
            "{:<name_width$} | {:>7} | {:>7}\n",
            item.name(),
            item.quality(),
            item.sell_in()
        ));
    }
    out
}
