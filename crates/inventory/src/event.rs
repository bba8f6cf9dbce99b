use serde::{Deserialize, Serialize};

/// Event: ItemAdded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemAdded {
    pub brand: String,
    pub category: String,
    pub price: i64,
}

/// Event: StockAdded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockAdded {
    pub brand: String,
    pub category: String,
    pub quantity: i64,
}

/// What a successful inventory mutation did.
///
/// `Display` yields the console echo line for the call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InventoryEvent {
    ItemAdded(ItemAdded),
    StockAdded(StockAdded),
}

impl InventoryEvent {
    pub fn event_type(&self) -> &'static str {
        match self {
            InventoryEvent::ItemAdded(_) => "inventory.item.added",
            InventoryEvent::StockAdded(_) => "inventory.stock.added",
        }
    }
}

impl core::fmt::Display for InventoryEvent {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            InventoryEvent::ItemAdded(e) => {
                write!(f, "AddItem({}, {}, {})", e.brand, e.category, e.price)
            }
            InventoryEvent::StockAdded(e) => {
                write!(f, "AddInventory({}, {}, {})", e.brand, e.category, e.quantity)
            }
        }
    }
}
