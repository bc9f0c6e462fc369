//! # Cart
//!
//! The shopping cart's data and math. Sharing the cart between consumers is
//! the storefront's job; this module only guarantees the invariants.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  Operation            Items Change                  Derived State       │
//! │  ─────────            ────────────                  ─────────────       │
//! │                                                                         │
//! │  add_item(item) ────► key present? qty += item.qty ─┐                  │
//! │                       otherwise push(item)          │                  │
//! │                                                     ├─► recompute()    │
//! │  remove_item(key) ──► retain(key != k) ─────────────┤   count = Σ qty  │
//! │                                                     │   total = Σ qty  │
//! │  clear() ───────────► items.clear() ────────────────┘          × price │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - Items are unique by `key` (adding the same key increases quantity)
//! - `count == Σ qty` and `total == Σ qty × price` after every mutation
//! - Derived values are recomputed from scratch, never patched
//!   incrementally, so they cannot drift from the items

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::types::LineItem;

/// The shopping cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    items: Vec<LineItem>,
    count: i64,
    total: Money,

    /// When the cart was created/last cleared
    created_at: DateTime<Utc>,
}

impl Default for Cart {
    fn default() -> Self {
        Cart::new()
    }
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart {
            items: Vec::new(),
            count: 0,
            total: Money::zero(),
            created_at: Utc::now(),
        }
    }

    /// Adds an item, or merges its quantity into the existing line.
    ///
    /// ## Behavior
    /// - Key already in cart: `qty += item.qty`; title, color, size and
    ///   price of the existing line are kept (a later price never
    ///   overwrites the frozen one)
    /// - Key not in cart: appended at the end
    pub fn add_item(&mut self, item: LineItem) {
        match self.items.iter_mut().find(|i| i.key == item.key) {
            Some(existing) => existing.qty = existing.qty.saturating_add(item.qty),
            None => self.items.push(item),
        }
        self.recompute();
    }

    /// Removes the line with this key. Unknown keys are a no-op.
    ///
    /// Returns whether a line was removed.
    pub fn remove_item(&mut self, key: &str) -> bool {
        let initial_len = self.items.len();
        self.items.retain(|i| i.key != key);
        self.recompute();
        self.items.len() != initial_len
    }

    /// Empties the cart.
    pub fn clear(&mut self) {
        self.items.clear();
        self.created_at = Utc::now();
        self.recompute();
    }

    // Saturating: a pathological price or quantity pins the total at the
    // bound instead of panicking mid-mutation.
    fn recompute(&mut self) {
        self.count = self
            .items
            .iter()
            .fold(0_i64, |count, i| count.saturating_add(i.qty));
        self.total = self.items.iter().map(LineItem::line_total).sum();
    }

    /// Line items in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Looks up a line by key.
    pub fn get(&self, key: &str) -> Option<&LineItem> {
        self.items.iter().find(|i| i.key == key)
    }

    /// Total quantity across all lines.
    pub fn count(&self) -> i64 {
        self.count
    }

    /// Σ qty × price.
    pub fn total(&self) -> Money {
        self.total
    }

    /// Number of distinct lines.
    pub fn line_count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Read-only view of a cart for the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartSnapshot {
    pub items: Vec<LineItem>,
    pub count: i64,
    pub total: Money,
}

impl From<&Cart> for CartSnapshot {
    fn from(cart: &Cart) -> Self {
        CartSnapshot {
            items: cart.items.clone(),
            count: cart.count,
            total: cart.total,
        }
    }
}
