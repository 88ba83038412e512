use rust_decimal::Decimal;

use super::CatalogItem;
use crate::money::parse_count;

/// One selected item with its quantity. Quantity is always at least 1.
#[derive(Debug, Clone)]
pub struct CartEntry {
    pub item: CatalogItem,
    pub quantity: u32,
}

impl CartEntry {
    /// Cost of this line for one day.
    pub fn line_per_day(&self) -> Decimal {
        self.item.price_per_day() * Decimal::from(self.quantity)
    }
}

/// The authoritative aggregation state: selected items keyed by item id,
/// in insertion order. Lives for the planning session only.
#[derive(Debug, Clone, Default)]
pub struct Cart {
    entries: Vec<CartEntry>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an item. Re-adding an id already in the cart bumps its quantity
    /// instead of creating a duplicate entry.
    pub fn add(&mut self, item: CatalogItem) {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.item.id == item.id) {
            entry.quantity += 1;
        } else {
            self.entries.push(CartEntry { item, quantity: 1 });
        }
    }

    /// Set an entry's quantity from raw text. Non-numeric or sub-1 input is
    /// coerced to 1. Unknown ids are a no-op.
    pub fn set_quantity(&mut self, id: i64, raw: &str) {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.item.id == id) {
            let wanted = parse_count(raw).map_or(1, |n| n.max(1));
            entry.quantity = u32::try_from(wanted).unwrap_or(u32::MAX);
        }
    }

    /// Remove an entry. Unknown ids are a no-op; remaining entries keep
    /// their order.
    pub fn remove(&mut self, id: i64) {
        self.entries.retain(|e| e.item.id != id);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: i64) -> Option<&CartEntry> {
        self.entries.iter().find(|e| e.item.id == id)
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &CartEntry> {
        self.entries.iter()
    }

    /// Sum of every line's one-day cost, at full precision.
    pub fn subtotal_per_day(&self) -> Decimal {
        self.entries.iter().map(CartEntry::line_per_day).sum()
    }
}
