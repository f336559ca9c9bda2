//! Shopping cart state and persistence.
//!
//! [`Cart`] is the plain list of line items with its invariants (one line per
//! product name, quantities of at least one). [`CartManager`] pairs a cart
//! with a durable store and writes the cart back after every mutation.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::instrument;

use navjyoti_core::Price;

use crate::error::{self, AppError};
use crate::store::{KeyValueStore, StoreError, keys};

/// Cart operation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CartError {
    #[error("cart index {index} out of range (cart has {len} items)")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("invalid quantity: {0}")]
    InvalidQuantity(u32),
}

/// One line of the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    /// Product name, unique within the cart.
    pub name: String,
    /// Price of a single unit.
    #[serde(rename = "price")]
    pub unit_price: Price,
    /// Number of units, at least one.
    pub quantity: u32,
}

impl CartItem {
    /// Price of this line (unit price times quantity).
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.unit_price.line_total(self.quantity)
    }
}

/// Result of a quantity edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuantityChange {
    /// The line now has the requested quantity.
    Updated,
    /// The requested quantity was zero or negative, so the line was removed.
    Removed(CartItem),
}

/// The user's cart: an ordered list of line items.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Build a cart from stored line items, repairing invariant violations.
    ///
    /// Lines with a zero quantity are dropped and lines sharing a name are
    /// merged into the first occurrence (keeping its price).
    #[must_use]
    pub fn from_items(items: Vec<CartItem>) -> Self {
        let mut cart = Self::new();
        for item in items {
            if item.quantity == 0 {
                continue;
            }
            match cart.position(&item.name) {
                Some(i) => {
                    if let Some(existing) = cart.items.get_mut(i) {
                        existing.quantity = existing.quantity.saturating_add(item.quantity);
                    }
                }
                None => cart.items.push(item),
            }
        }
        cart
    }

    /// Line items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Number of distinct lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Index of the line for `name`, if present.
    #[must_use]
    pub fn position(&self, name: &str) -> Option<usize> {
        self.items.iter().position(|item| item.name == name)
    }

    /// Sum of all line quantities.
    #[must_use]
    pub fn total_quantity(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    /// Sum of all line totals.
    #[must_use]
    pub fn grand_total(&self) -> Price {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Add `quantity` units of `name`, merging with an existing line.
    ///
    /// An existing line keeps its original unit price. Returns the index of
    /// the affected line.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::InvalidQuantity`] when `quantity` is zero.
    pub fn add(&mut self, name: &str, unit_price: Price, quantity: u32) -> Result<usize, CartError> {
        if quantity == 0 {
            return Err(CartError::InvalidQuantity(quantity));
        }

        if let Some(i) = self.position(name)
            && let Some(existing) = self.items.get_mut(i)
        {
            existing.quantity = existing.quantity.saturating_add(quantity);
            return Ok(i);
        }

        self.items.push(CartItem {
            name: name.to_owned(),
            unit_price,
            quantity,
        });
        Ok(self.items.len() - 1)
    }

    /// Remove the line at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::IndexOutOfRange`] if there is no such line.
    pub fn remove(&mut self, index: usize) -> Result<CartItem, CartError> {
        if index >= self.items.len() {
            return Err(self.out_of_range(index));
        }
        Ok(self.items.remove(index))
    }

    /// Set the quantity of the line at `index`.
    ///
    /// A quantity of zero or below removes the line. Quantities above
    /// `u32::MAX` are clamped.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::IndexOutOfRange`] if there is no such line.
    pub fn set_quantity(&mut self, index: usize, quantity: i64) -> Result<QuantityChange, CartError> {
        if quantity <= 0 {
            return self.remove(index).map(QuantityChange::Removed);
        }

        let len = self.items.len();
        let item = self
            .items
            .get_mut(index)
            .ok_or(CartError::IndexOutOfRange { index, len })?;
        item.quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        Ok(QuantityChange::Updated)
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Project the cart into per-line and overall totals.
    #[must_use]
    pub fn summary(&self) -> CartSummary {
        let lines: Vec<CartLine> = self
            .items
            .iter()
            .enumerate()
            .map(|(index, item)| CartLine {
                index,
                name: item.name.clone(),
                unit_price: item.unit_price,
                quantity: item.quantity,
                line_total: item.line_total(),
            })
            .collect();

        CartSummary {
            grand_total: lines.iter().map(|line| line.line_total).sum(),
            item_count: lines.len(),
            total_quantity: self.total_quantity(),
            lines,
        }
    }

    /// Cart badge state.
    #[must_use]
    pub fn badge(&self) -> CartBadge {
        let count = self.total_quantity();
        CartBadge {
            count,
            visible: count > 0,
        }
    }

    /// Serialize the cart to its persisted JSON form.
    ///
    /// # Errors
    ///
    /// Returns `serde_json::Error` if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Parse a persisted cart, repairing invariant violations.
    ///
    /// # Errors
    ///
    /// Returns `serde_json::Error` if the text is not a list of line items.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let items: Vec<CartItem> = serde_json::from_str(json)?;
        Ok(Self::from_items(items))
    }

    const fn out_of_range(&self, index: usize) -> CartError {
        CartError::IndexOutOfRange {
            index,
            len: self.items.len(),
        }
    }
}

/// One row of the cart summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLine {
    pub index: usize,
    pub name: String,
    pub unit_price: Price,
    pub quantity: u32,
    pub line_total: Price,
}

/// Totals shown on the cart and checkout pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartSummary {
    pub lines: Vec<CartLine>,
    pub grand_total: Price,
    /// Number of distinct lines.
    pub item_count: usize,
    /// Sum of quantities across lines.
    pub total_quantity: u64,
}

/// Cart count badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartBadge {
    pub count: u64,
    pub visible: bool,
}

// =============================================================================
// Persistent cart
// =============================================================================

/// A cart bound to a durable store.
///
/// The cart is restored once on construction and written back after every
/// mutation. Store failures are reported and absorbed; the in-memory cart
/// stays authoritative.
#[derive(Debug)]
pub struct CartManager<S> {
    cart: Cart,
    store: S,
}

impl<S: KeyValueStore> CartManager<S> {
    /// Create a manager and restore the cart from `store`.
    pub fn new(store: S) -> Self {
        let mut manager = Self {
            cart: Cart::new(),
            store,
        };
        manager.restore();
        manager
    }

    /// The current cart.
    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    /// The backing store.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Add units of a product and persist.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::InvalidQuantity`] when `quantity` is zero.
    #[instrument(skip(self, unit_price), fields(price = %unit_price))]
    pub fn add_item(&mut self, name: &str, unit_price: Price, quantity: u32) -> Result<usize, CartError> {
        let index = self.cart.add(name, unit_price, quantity)?;
        tracing::debug!(index, "Cart line updated");
        self.persist_or_report();
        Ok(index)
    }

    /// Remove the line at `index` and persist.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::IndexOutOfRange`] if there is no such line; the
    /// cart is left untouched.
    #[instrument(skip(self))]
    pub fn remove_item(&mut self, index: usize) -> Result<CartItem, CartError> {
        let removed = self.cart.remove(index)?;
        self.persist_or_report();
        Ok(removed)
    }

    /// Overwrite the quantity of the line at `index` and persist.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::IndexOutOfRange`] if there is no such line.
    #[instrument(skip(self))]
    pub fn set_quantity(&mut self, index: usize, quantity: i64) -> Result<QuantityChange, CartError> {
        let change = self.cart.set_quantity(index, quantity)?;
        self.persist_or_report();
        Ok(change)
    }

    /// Empty the cart and persist.
    #[instrument(skip(self))]
    pub fn clear(&mut self) {
        self.cart.clear();
        self.persist_or_report();
    }

    /// Write the cart to the store.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if serialization or the store write fails.
    pub fn persist(&mut self) -> Result<(), StoreError> {
        let json = self.cart.to_json()?;
        self.store.set(keys::CART, &json)
    }

    /// Replace the in-memory cart with the stored one.
    ///
    /// Missing, unreadable or malformed state yields an empty cart.
    pub fn restore(&mut self) {
        self.cart = match self.store.get(keys::CART) {
            Ok(Some(json)) => Cart::from_json(&json).unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Discarding malformed stored cart");
                Cart::new()
            }),
            Ok(None) => Cart::new(),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read stored cart");
                Cart::new()
            }
        };
        tracing::debug!(lines = self.cart.len(), "Cart restored");
    }

    fn persist_or_report(&mut self) {
        if let Err(e) = self.persist() {
            error::report(&AppError::from(e));
        }
    }
}
