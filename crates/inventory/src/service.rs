use std::collections::BTreeMap;
use std::io;

use stockbook_core::{DomainError, DomainResult};

use crate::event::{InventoryEvent, ItemAdded, StockAdded};
use crate::item::{Item, ItemKey};
use crate::query::SearchQuery;
use crate::report;

/// In-memory inventory: one [`Item`] per case-insensitive (brand, category).
///
/// Entries are created only by [`InventoryService::add_item`] and mutated only
/// by [`InventoryService::add_stock`]; there is no removal. Every call either
/// fully applies or leaves the store untouched.
#[derive(Debug, Clone, Default)]
pub struct InventoryService {
    items: BTreeMap<ItemKey, Item>,
}

impl InventoryService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new item with zero stock.
    pub fn add_item(&mut self, brand: &str, category: &str, price: i64) -> DomainResult<InventoryEvent> {
        let key = ItemKey::new(brand, category);
        if self.items.contains_key(&key) {
            return Err(DomainError::already_exists(format!(
                "Item already exists: {brand}, {category}"
            )));
        }

        let item = Item::new(brand, category, price)?;
        self.items.insert(key, item);

        tracing::info!(brand, category, price, "item added");
        Ok(InventoryEvent::ItemAdded(ItemAdded {
            brand: brand.to_string(),
            category: category.to_string(),
            price,
        }))
    }

    /// Increase the stock of an existing item.
    pub fn add_stock(&mut self, brand: &str, category: &str, quantity: i64) -> DomainResult<InventoryEvent> {
        let key = ItemKey::new(brand, category);
        let item = self.items.get_mut(&key).ok_or_else(|| {
            DomainError::not_found(format!(
                "Cannot add inventory. Item not found: {brand}, {category}"
            ))
        })?;

        item.add_quantity(quantity)?;

        tracing::info!(brand, category, quantity, total = item.quantity(), "stock added");
        Ok(InventoryEvent::StockAdded(StockAdded {
            brand: brand.to_string(),
            category: category.to_string(),
            quantity,
        }))
    }

    /// Items passing every filter of `query`, in the query's order.
    ///
    /// Items tied on the sort key come out in normalized-key order.
    pub fn search(&self, query: &SearchQuery) -> Vec<Item> {
        let mut matched: Vec<Item> = self
            .items
            .values()
            .filter(|item| query.matches(item))
            .cloned()
            .collect();
        query.sort(&mut matched);

        tracing::debug!(
            order_by = ?query.sort_field(),
            ascending = query.is_ascending(),
            price_range = ?query.price_range(),
            matched = matched.len(),
            "search"
        );
        matched
    }

    pub fn get(&self, brand: &str, category: &str) -> Option<&Item> {
        self.items.get(&ItemKey::new(brand, category))
    }

    /// All items in normalized-key order.
    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.items.values()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn write_inventory<W: io::Write>(&self, out: &mut W) -> io::Result<()> {
        report::write_inventory(out, self.items.values())
    }

    pub fn print_inventory(&self) -> io::Result<()> {
        self.write_inventory(&mut io::stdout().lock())
    }

    pub fn print_search_results(&self, items: &[Item]) -> io::Result<()> {
        report::write_search_results(&mut io::stdout().lock(), items)
    }
}
