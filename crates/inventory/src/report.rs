//! Console renderings of the inventory and of search results.

use std::collections::BTreeMap;
use std::io::{self, Write};

use crate::item::Item;

pub const NO_MATCHES: &str = "No items matched the search.";

/// Write the `Inventory:` listing, grouped by brand then category in
/// lexicographic order of their stored spelling.
pub fn write_inventory<'a, W, I>(out: &mut W, items: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a Item>,
{
    let mut grouped: BTreeMap<&str, BTreeMap<&str, i64>> = BTreeMap::new();
    for item in items {
        grouped
            .entry(item.brand())
            .or_default()
            .insert(item.category(), item.quantity());
    }

    writeln!(out)?;
    writeln!(out, "Inventory:")?;
    for (brand, categories) in &grouped {
        for (category, quantity) in categories {
            writeln!(out, "{brand} -> {category} -> {quantity}")?;
        }
    }
    Ok(())
}

/// Write one display line per item in the given order, or the no-match line.
pub fn write_search_results<W: Write>(out: &mut W, items: &[Item]) -> io::Result<()> {
    if items.is_empty() {
        return writeln!(out, "{NO_MATCHES}");
    }
    for item in items {
        writeln!(out, "{item}")?;
    }
    Ok(())
}
