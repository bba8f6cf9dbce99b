//! Scripted walkthrough of the inventory: fixed add/stock calls followed by
//! a listing and a handful of searches.
//!
//! The script stops at the first failing call; the error is returned to the
//! caller untouched.

use std::io::Write;

use anyhow::Result;

use stockbook_inventory::{InventoryService, PriceRange, SearchQuery, report};

/// Run the whole script against `service`, writing the transcript to `out`.
pub fn run<W: Write>(service: &mut InventoryService, out: &mut W) -> Result<()> {
    for (brand, category, price) in [
        ("Amul", "Milk", 100),
        ("Amul", "Curd", 50),
        ("Nestle", "Milk", 60),
        ("Nestle", "Curd", 90),
    ] {
        let event = service.add_item(brand, category, price)?;
        writeln!(out, "{event}")?;
    }

    for (brand, category, quantity) in [
        ("Amul", "Milk", 10),
        ("Nestle", "Milk", 5),
        ("Nestle", "Curd", 10),
        ("Amul", "Milk", 10),
        ("Amul", "Curd", 5),
    ] {
        let event = service.add_stock(brand, category, quantity)?;
        writeln!(out, "{event}")?;
    }

    service.write_inventory(out)?;

    let by_brand = SearchQuery::new().with_brands(["Nestle"]);
    let by_category = SearchQuery::new().with_categories(["Milk"]);
    let in_range = PriceRange::from_bounds(70, 100);

    let searches = [
        ("Search by brand = Nestle:", by_brand),
        ("Search by category = Milk:", by_category.clone()),
        (
            "Search by category = Milk, Order by price desc:",
            by_category.clone().descending(),
        ),
        (
            "Search by price = [70, 100]:",
            SearchQuery::new().with_price_range(in_range),
        ),
        (
            "Search by category = Milk and price range [70, 100], Order by price desc:",
            by_category.with_price_range(in_range).descending(),
        ),
    ];

    for (title, query) in &searches {
        writeln!(out)?;
        writeln!(out, "{title}")?;
        report::write_search_results(out, &service.search(query))?;
    }

    tracing::debug!(items = service.len(), "script finished");
    Ok(())
}
