//! Structured search query over the inventory.

use std::collections::BTreeSet;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use stockbook_core::DomainError;

use crate::item::Item;

/// A filterable attribute of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Facet {
    Brand,
    Category,
}

impl FromStr for Facet {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "brand" => Ok(Facet::Brand),
            "category" => Ok(Facet::Category),
            other => Err(DomainError::invalid_argument(format!("unknown facet: {other}"))),
        }
    }
}

/// Sort key for search results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    #[default]
    Price,
    ItemQty,
}

impl SortField {
    /// Lenient lookup by name: `"itemqty"` (any case) selects quantity,
    /// anything else falls back to price.
    pub fn from_name(name: &str) -> Self {
        if name.eq_ignore_ascii_case("itemqty") {
            SortField::ItemQty
        } else {
            SortField::Price
        }
    }

    fn key(self, item: &Item) -> i64 {
        match self {
            SortField::Price => item.price(),
            SortField::ItemQty => item.quantity(),
        }
    }
}

/// Inclusive price bounds; `None` on a side means unbounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    pub low: Option<i64>,
    pub high: Option<i64>,
}

impl PriceRange {
    /// Bound value that means "no limit" in [`PriceRange::from_bounds`].
    pub const UNBOUNDED: i64 = -1;

    pub fn new(low: Option<i64>, high: Option<i64>) -> Self {
        Self { low, high }
    }

    /// Build from a `[low, high]` pair where `-1` leaves that side open.
    pub fn from_bounds(low: i64, high: i64) -> Self {
        let bound = |v: i64| (v != Self::UNBOUNDED).then_some(v);
        Self {
            low: bound(low),
            high: bound(high),
        }
    }

    pub fn contains(&self, price: i64) -> bool {
        self.low.is_none_or(|low| price >= low) && self.high.is_none_or(|high| price <= high)
    }
}

/// Search criteria: facet filters, an optional price range and the ordering.
///
/// Facet values are compared case-insensitively; an absent facet accepts
/// every item, while a present but empty one accepts none.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    brands: Option<BTreeSet<String>>,
    categories: Option<BTreeSet<String>>,
    price_range: Option<PriceRange>,
    order_by: SortField,
    descending: bool,
}

impl SearchQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the accepted values for `facet`.
    pub fn with_filter<I, S>(mut self, facet: Facet, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let accepted = values.into_iter().map(|v| v.as_ref().to_lowercase()).collect();
        match facet {
            Facet::Brand => self.brands = Some(accepted),
            Facet::Category => self.categories = Some(accepted),
        }
        self
    }

    pub fn with_brands<I, S>(self, brands: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.with_filter(Facet::Brand, brands)
    }

    pub fn with_categories<I, S>(self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.with_filter(Facet::Category, categories)
    }

    pub fn with_price_range(mut self, range: PriceRange) -> Self {
        self.price_range = Some(range);
        self
    }

    pub fn order_by(mut self, field: SortField) -> Self {
        self.order_by = field;
        self
    }

    pub fn ascending(mut self) -> Self {
        self.descending = false;
        self
    }

    pub fn descending(mut self) -> Self {
        self.descending = true;
        self
    }

    pub fn sort_field(&self) -> SortField {
        self.order_by
    }

    pub fn is_ascending(&self) -> bool {
        !self.descending
    }

    pub fn price_range(&self) -> Option<PriceRange> {
        self.price_range
    }

    /// True when `item` passes every present filter.
    pub fn matches(&self, item: &Item) -> bool {
        let accepts = |set: &Option<BTreeSet<String>>, value: &str| {
            set.as_ref().is_none_or(|s| s.contains(&value.to_lowercase()))
        };

        accepts(&self.brands, item.brand())
            && accepts(&self.categories, item.category())
            && self.price_range.is_none_or(|r| r.contains(item.price()))
    }

    /// Order `items` in place on the single sort key. Ties keep their input order.
    pub fn sort(&self, items: &mut [Item]) {
        let field = self.order_by;
        if self.descending {
            items.sort_by(|a, b| field.key(b).cmp(&field.key(a)));
        } else {
            items.sort_by_key(|item| field.key(item));
        }
    }
}
