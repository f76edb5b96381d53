//! Storefront cart
//!
//! Quantity-tracked cart for the product storefront. One line per product;
//! adding an already-carted product bumps its quantity, and stepping a
//! quantity below one removes the line. The cart persists in the local
//! store under the `cart` key so it survives restarts.

use cafe_core::{ConsoleError, ConsoleResult};
use cafe_schema::{EntityRecord, EntitySchema};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

use crate::local_store::LocalStore;

const CART_KEY: &str = "cart";

/// Format a dollar amount the way the storefront shows it
pub fn format_usd(amount: f64) -> String {
    format!("${:.2}", amount)
}

// ============================================================================
// CartItem
// ============================================================================

/// One cart line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub product_id: String,
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub image_url: String,
    pub quantity: u32,
}

impl CartItem {
    /// Build a line from a product row, quantity one
    pub fn from_product(schema: &EntitySchema, product: &EntityRecord) -> Option<Self> {
        let price = product
            .get_str("Price")
            .and_then(|p| p.parse::<f64>().ok())
            .unwrap_or(0.0);
        Some(Self {
            product_id: product.id(schema)?,
            name: product.get_str("Name").unwrap_or_default(),
            price,
            image_url: product.get_str("Image URL").unwrap_or_default(),
            quantity: 1,
        })
    }

    /// Price times quantity
    pub fn line_total(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

// ============================================================================
// Cart
// ============================================================================

/// The cart itself
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore the persisted cart, or an empty one
    pub fn load(store: &LocalStore) -> Self {
        store.get_value(CART_KEY).unwrap_or_default()
    }

    /// Persist the cart
    pub fn save(&self, store: &LocalStore) -> ConsoleResult<()> {
        store.set_value(CART_KEY, self)
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total item count across lines, for the cart badge
    pub fn total_items(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Sum of all line totals
    pub fn subtotal(&self) -> f64 {
        self.items.iter().map(CartItem::line_total).sum()
    }

    // ========================================================================
    // Mutations
    // ========================================================================

    /// Add a line, merging with an existing line for the same product
    pub fn add(&mut self, item: CartItem) {
        match self
            .items
            .iter_mut()
            .find(|i| i.product_id == item.product_id)
        {
            Some(existing) => existing.quantity += item.quantity.max(1),
            None => self.items.push(CartItem {
                quantity: item.quantity.max(1),
                ..item
            }),
        }
    }

    /// Bump a line's quantity
    pub fn increase(&mut self, product_id: &str) {
        if let Some(item) = self.items.iter_mut().find(|i| i.product_id == product_id) {
            item.quantity += 1;
        }
    }

    /// Step a line's quantity down, dropping the line at zero
    pub fn decrease(&mut self, product_id: &str) {
        if let Some(pos) = self.items.iter().position(|i| i.product_id == product_id) {
            if self.items[pos].quantity > 1 {
                self.items[pos].quantity -= 1;
            } else {
                self.items.remove(pos);
            }
        }
    }

    /// Drop a line entirely
    pub fn remove(&mut self, product_id: &str) {
        self.items.retain(|i| i.product_id != product_id);
    }

    /// Empty the cart
    pub fn clear(&mut self) {
        self.items.clear();
    }

    // ========================================================================
    // Checkout
    // ========================================================================

    /// Render a plain-text receipt
    pub fn receipt_text(&self, now: DateTime<Utc>) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Café Code Receipt");
        let _ = writeln!(out, "{}", now.format("%Y-%m-%d %H:%M"));
        let _ = writeln!(out, "----------------------------------------");
        for item in &self.items {
            let _ = writeln!(
                out,
                "{:>3} x {:<24} {:>8}",
                item.quantity,
                item.name,
                format_usd(item.line_total())
            );
        }
        let _ = writeln!(out, "----------------------------------------");
        let _ = writeln!(out, "Subtotal: {}", format_usd(self.subtotal()));
        let _ = writeln!(out, "Total:    {}", format_usd(self.subtotal()));
        out
    }

    /// Complete the purchase: emit the receipt and empty the cart
    ///
    /// Confirmation happens upstream; an empty cart is rejected.
    pub fn checkout(&mut self, now: DateTime<Utc>) -> ConsoleResult<String> {
        if self.is_empty() {
            return Err(ConsoleError::validation("Your cart is empty"));
        }
        let receipt = self.receipt_text(now);
        self.clear();
        Ok(receipt)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn latte() -> CartItem {
        CartItem {
            product_id: "12".to_string(),
            name: "Latte".to_string(),
            price: 3.5,
            image_url: String::new(),
            quantity: 1,
        }
    }

    #[test]
    fn test_two_lattes_cost_seven_dollars() {
        let mut cart = Cart::new();
        cart.add(latte());
        cart.add(latte());

        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.total_items(), 2);
        assert_eq!(format_usd(cart.subtotal()), "$7.00");
    }

    #[test]
    fn test_decrease_drops_line_at_zero() {
        let mut cart = Cart::new();
        cart.add(latte());
        cart.increase("12");
        assert_eq!(cart.total_items(), 2);

        cart.decrease("12");
        assert_eq!(cart.total_items(), 1);
        cart.decrease("12");
        assert!(cart.is_empty());
    }

    #[test]
    fn test_remove_line() {
        let mut cart = Cart::new();
        cart.add(latte());
        cart.add(CartItem {
            product_id: "13".to_string(),
            name: "Croissant".to_string(),
            price: 2.25,
            image_url: String::new(),
            quantity: 3,
        });

        cart.remove("12");
        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items()[0].name, "Croissant");
    }

    #[test]
    fn test_checkout_clears_and_emits_receipt() {
        let mut cart = Cart::new();
        cart.add(latte());
        cart.increase("12");

        let now = chrono::TimeZone::with_ymd_and_hms(&Utc, 2025, 3, 14, 9, 0, 0).unwrap();
        let receipt = cart.checkout(now).unwrap();

        assert!(receipt.contains("Café Code Receipt"));
        assert!(receipt.contains("Latte"));
        assert!(receipt.contains("$7.00"));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_checkout_of_empty_cart_is_rejected() {
        let mut cart = Cart::new();
        let err = cart.checkout(Utc::now()).unwrap_err();
        assert_eq!(err.to_string(), "Validation error: Your cart is empty");
    }

    #[test]
    fn test_cart_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        {
            let store = LocalStore::open(dir.path()).unwrap();
            let mut cart = Cart::new();
            cart.add(latte());
            cart.save(&store).unwrap();
        }

        let store = LocalStore::open(dir.path()).unwrap();
        let cart = Cart::load(&store);
        assert_eq!(cart.total_items(), 1);
        assert_eq!(cart.items()[0].name, "Latte");
    }

    #[test]
    fn test_item_from_product_record() {
        let product_schema = cafe_schema::schema(cafe_schema::EntityKind::Product);
        let product = EntityRecord::from_pairs([
            ("Id", "12"),
            ("Name", "Latte"),
            ("Price", "3.50"),
            ("Image URL", "https://example.com/latte.png"),
        ]);

        let item = CartItem::from_product(&product_schema, &product).unwrap();
        assert_eq!(item.product_id, "12");
        assert_eq!(item.price, 3.5);
        assert_eq!(item.quantity, 1);
    }
}
