use serde::Serialize;

use stockbook_core::{DomainError, DomainResult, Entity, ValueObject};

/// Normalized identity of an item: the case-folded (brand, category) pair.
///
/// Ordering is lexicographic on brand, then category, which is also the
/// iteration order of the inventory store.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct ItemKey {
    brand: String,
    category: String,
}

impl ItemKey {
    pub fn new(brand: &str, category: &str) -> Self {
        Self {
            brand: brand.to_lowercase(),
            category: category.to_lowercase(),
        }
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn category(&self) -> &str {
        &self.category
    }
}

impl ValueObject for ItemKey {}

impl core::fmt::Display for ItemKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}#{}", self.brand, self.category)
    }
}

/// A tracked (brand, category) product.
///
/// Brand, category and price are fixed at creation; quantity starts at zero
/// and only grows through [`Item::add_quantity`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    brand: String,
    category: String,
    price: i64,
    quantity: i64,
}

impl Item {
    pub fn new(brand: impl Into<String>, category: impl Into<String>, price: i64) -> DomainResult<Self> {
        if price < 0 {
            return Err(DomainError::invalid_argument("Price cannot be negative."));
        }
        Ok(Self {
            brand: brand.into(),
            category: category.into(),
            price,
            quantity: 0,
        })
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn price(&self) -> i64 {
        self.price
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    pub fn key(&self) -> ItemKey {
        ItemKey::new(&self.brand, &self.category)
    }

    /// Increase stock by `amount`. Nothing changes on error.
    pub fn add_quantity(&mut self, amount: i64) -> DomainResult<()> {
        if amount < 0 {
            return Err(DomainError::invalid_argument("Quantity cannot be negative."));
        }
        self.quantity = self
            .quantity
            .checked_add(amount)
            .ok_or_else(|| DomainError::invalid_argument("Quantity overflow."))?;
        Ok(())
    }
}

impl Entity for Item {
    type Id = ItemKey;

    fn id(&self) -> Self::Id {
        self.key()
    }
}

impl core::fmt::Display for Item {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}, {}, {}", self.brand, self.category, self.quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_item_starts_with_zero_quantity() {
        let item = Item::new("Amul", "Milk", 100).unwrap();
        assert_eq!(item.brand(), "Amul");
        assert_eq!(item.category(), "Milk");
        assert_eq!(item.price(), 100);
        assert_eq!(item.quantity(), 0);
    }

    #[test]
    fn zero_price_is_allowed() {
        assert_eq!(Item::new("Amul", "Sample", 0).unwrap().price(), 0);
    }

    #[test]
    fn negative_price_is_rejected() {
        let err = Item::new("Amul", "Milk", -1).unwrap_err();
        assert_eq!(err, DomainError::invalid_argument("Price cannot be negative."));
    }

    #[test]
    fn add_quantity_accumulates() {
        let mut item = Item::new("Amul", "Milk", 100).unwrap();
        item.add_quantity(10).unwrap();
        item.add_quantity(0).unwrap();
        item.add_quantity(10).unwrap();
        assert_eq!(item.quantity(), 20);
    }

    #[test]
    fn negative_quantity_is_rejected_without_mutation() {
        let mut item = Item::new("Amul", "Milk", 100).unwrap();
        item.add_quantity(5).unwrap();

        let err = item.add_quantity(-3).unwrap_err();
        match err {
            DomainError::InvalidArgument(msg) => assert_eq!(msg, "Quantity cannot be negative."),
            _ => panic!("Expected InvalidArgument for negative quantity"),
        }
        assert_eq!(item.quantity(), 5);
    }

    #[test]
    fn overflowing_quantity_is_rejected_without_mutation() {
        let mut item = Item::new("Amul", "Milk", 100).unwrap();
        item.add_quantity(i64::MAX).unwrap();
        assert!(matches!(item.add_quantity(1), Err(DomainError::InvalidArgument(_))));
        assert_eq!(item.quantity(), i64::MAX);
    }

    #[test]
    fn display_is_brand_category_quantity() {
        let mut item = Item::new("Nestle", "Curd", 90).unwrap();
        item.add_quantity(10).unwrap();
        assert_eq!(item.to_string(), "Nestle, Curd, 10");
    }

    #[test]
    fn identity_ignores_case() {
        let a = Item::new("Amul", "Milk", 100).unwrap();
        let b = Item::new("AMUL", "milk", 5).unwrap();
        assert_eq!(a.id(), b.id());
        assert_eq!(a.key().to_string(), "amul#milk");
    }

    #[test]
    fn item_serializes_with_plain_fields() {
        let item = Item::new("Amul", "Curd", 50).unwrap();
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "brand": "Amul", "category": "Curd", "price": 50, "quantity": 0 })
        );
    }
}
