//! Inventory domain module.
//!
//! Items keyed by case-insensitive (brand, category), stock accumulation and
//! filtered/sorted search. Pure in-memory logic; the only IO is the optional
//! console rendering in [`report`].

pub mod event;
pub mod item;
pub mod query;
pub mod report;
pub mod service;

pub use event::{InventoryEvent, ItemAdded, StockAdded};
pub use item::{Item, ItemKey};
pub use query::{Facet, PriceRange, SearchQuery, SortField};
pub use service::InventoryService;
