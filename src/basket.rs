//! Shopping Basket
//!
//! Line items keyed by book id. Digital books (e-books, audiobooks)
//! never go above one copy.

use serde::{Deserialize, Serialize};

use crate::config::DIGITAL_QUANTITY_CAP;
use crate::models::BasketItem;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Basket {
    items: Vec<BasketItem>,
}

fn cap(item: &BasketItem, quantity: u32) -> u32 {
    if item.kind.is_digital() {
        quantity.min(DIGITAL_QUANTITY_CAP)
    } else {
        quantity
    }
}

impl Basket {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[BasketItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.items.iter().any(|i| i.id == id)
    }

    pub fn quantity_of(&self, id: &str) -> u32 {
        self.items.iter().find(|i| i.id == id).map_or(0, |i| i.quantity)
    }

    /// Add a line, merging with an existing line of the same id.
    pub fn add(&mut self, item: BasketItem) {
        if item.quantity == 0 {
            return;
        }
        if let Some(existing) = self.items.iter_mut().find(|i| i.id == item.id) {
            let wanted = existing.quantity.saturating_add(item.quantity);
            existing.quantity = cap(existing, wanted);
        } else {
            let quantity = cap(&item, item.quantity);
            self.items.push(BasketItem { quantity, ..item });
        }
    }

    /// Set a line's quantity; zero removes it. Unknown ids are ignored.
    pub fn set_quantity(&mut self, id: &str, quantity: u32) {
        if quantity == 0 {
            self.remove(id);
            return;
        }
        if let Some(item) = self.items.iter_mut().find(|i| i.id == id) {
            item.quantity = cap(item, quantity);
        }
    }

    pub fn increment(&mut self, id: &str) {
        let q = self.quantity_of(id);
        if q > 0 {
            self.set_quantity(id, q.saturating_add(1));
        }
    }

    pub fn decrement(&mut self, id: &str) {
        let q = self.quantity_of(id);
        if q > 0 {
            self.set_quantity(id, q - 1);
        }
    }

    pub fn remove(&mut self, id: &str) {
        self.items.retain(|i| i.id != id);
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Total number of copies
    pub fn total_items(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    pub fn subtotal(&self) -> f64 {
        self.items.iter().map(BasketItem::line_total).sum()
    }
}

/// Format a price for display
pub fn format_price(amount: f64) -> String {
    format!("${:.2}", amount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BookKind;

    fn line(id: &str, price: f64, quantity: u32, kind: BookKind) -> BasketItem {
        BasketItem {
            id: id.to_string(),
            title: format!("Book {}", id),
            price,
            quantity,
            kind,
        }
    }

    #[test]
    fn test_add_merges_same_id() {
        let mut basket = Basket::new();
        basket.add(line("1", 10.0, 1, BookKind::Textbook));
        basket.add(line("1", 10.0, 2, BookKind::Textbook));
        assert_eq!(basket.items().len(), 1);
        assert_eq!(basket.quantity_of("1"), 3);
    }

    #[test]
    fn test_digital_capped_at_one() {
        let mut basket = Basket::new();
        basket.add(line("a", 5.0, 3, BookKind::Audiobook));
        assert_eq!(basket.quantity_of("a"), 1);
        basket.add(line("a", 5.0, 1, BookKind::Audiobook));
        assert_eq!(basket.quantity_of("a"), 1);
        basket.increment("a");
        assert_eq!(basket.quantity_of("a"), 1);
    }

    #[test]
    fn test_zero_quantity_add_ignored() {
        let mut basket = Basket::new();
        basket.add(line("1", 10.0, 0, BookKind::Textbook));
        assert!(basket.is_empty());
    }

    #[test]
    fn test_set_quantity_zero_removes() {
        let mut basket = Basket::new();
        basket.add(line("1", 10.0, 2, BookKind::Textbook));
        basket.set_quantity("1", 0);
        assert!(basket.is_empty());
        // Unknown id is a no-op
        basket.set_quantity("missing", 4);
        assert!(basket.is_empty());
    }

    #[test]
    fn test_decrement_to_zero_removes() {
        let mut basket = Basket::new();
        basket.add(line("1", 10.0, 1, BookKind::Textbook));
        basket.decrement("1");
        assert!(!basket.contains("1"));
    }

    #[test]
    fn test_totals() {
        let mut basket = Basket::new();
        basket.add(line("1", 12.5, 2, BookKind::Textbook));
        basket.add(line("2", 4.99, 1, BookKind::Ebook));
        assert_eq!(basket.total_items(), 3);
        assert!((basket.subtotal() - 29.99).abs() < 1e-9);
        assert_eq!(format_price(basket.subtotal()), "$29.99");
    }

    #[test]
    fn test_serializes_as_plain_array() {
        let mut basket = Basket::new();
        basket.add(line("1", 1.0, 1, BookKind::Ebook));
        let json = serde_json::to_string(&basket).unwrap();
        assert!(json.starts_with('['));
        let back: Basket = serde_json::from_str(&json).unwrap();
        assert_eq!(back, basket);
    }
}
