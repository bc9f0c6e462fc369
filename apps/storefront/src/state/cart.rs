//! # Cart State
//!
//! The session's shared cart store.
//!
//! ## Ownership
//! Exactly one `CartState` exists per session. It owns the cart and hands
//! out `CartHandle`s to every consumer that needs to read or mutate it
//! (product modals, the cart badge, the cart drawer). Handles hold a weak
//! reference: once the session drops its `CartState`, every handle fails
//! with `NotInitialized` instead of quietly working on a stale copy.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Store Access                                    │
//! │                                                                         │
//! │  Storefront (session owner)                                             │
//! │      │                                                                  │
//! │      └── CartState ── Arc<Mutex<Cart>> ◄─────── Weak ── CartHandle      │
//! │                                         ◄─────── Weak ── CartHandle      │
//! │                                                                         │
//! │  CartHandle::default()      → never bound  → NotInitialized             │
//! │  handle after session end   → store gone   → NotInitialized             │
//! │                                                                         │
//! │  Every mutation holds the lock for mutate + recompute, so readers       │
//! │  never observe a partially updated cart.                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex, Weak};

use tisso_core::{Cart, CartSnapshot, LineItem, Money};
use tracing::debug;

use crate::error::ApiError;

/// Session-owned cart store.
///
/// Deliberately not `Clone`: share it through [`CartState::handle`].
#[derive(Debug)]
pub struct CartState {
    cart: Arc<Mutex<Cart>>,
}

impl CartState {
    /// Creates a new empty cart store.
    pub fn new() -> Self {
        CartState {
            cart: Arc::new(Mutex::new(Cart::new())),
        }
    }

    /// Returns a handle bound to this store.
    pub fn handle(&self) -> CartHandle {
        CartHandle {
            cart: Arc::downgrade(&self.cart),
        }
    }
}

impl Default for CartState {
    fn default() -> Self {
        Self::new()
    }
}

/// A consumer's reference to the session cart.
#[derive(Debug, Clone, Default)]
pub struct CartHandle {
    cart: Weak<Mutex<Cart>>,
}

impl CartHandle {
    /// A handle that was never bound to a store.
    pub fn unbound() -> Self {
        CartHandle::default()
    }

    /// Whether the store behind this handle still exists.
    pub fn is_initialized(&self) -> bool {
        self.cart.strong_count() > 0
    }

    /// Executes a function with read access to the cart.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let count = handle.with_cart(|cart| cart.count())?;
    /// ```
    pub fn with_cart<F, R>(&self, f: F) -> Result<R, ApiError>
    where
        F: FnOnce(&Cart) -> R,
    {
        let cart = self.cart.upgrade().ok_or_else(ApiError::not_initialized)?;
        let guard = cart
            .lock()
            .map_err(|_| ApiError::internal("Cart lock poisoned"))?;
        Ok(f(&guard))
    }

    /// Executes a function with write access to the cart.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// handle.with_cart_mut(|cart| cart.add_item(item))?;
    /// ```
    pub fn with_cart_mut<F, R>(&self, f: F) -> Result<R, ApiError>
    where
        F: FnOnce(&mut Cart) -> R,
    {
        let cart = self.cart.upgrade().ok_or_else(ApiError::not_initialized)?;
        let mut guard = cart
            .lock()
            .map_err(|_| ApiError::internal("Cart lock poisoned"))?;
        Ok(f(&mut guard))
    }

    /// Adds an item (merging quantities on the same key).
    pub fn add_item(&self, item: LineItem) -> Result<CartSnapshot, ApiError> {
        debug!(key = %item.key, qty = item.qty, "cart add_item");
        self.with_cart_mut(|cart| {
            cart.add_item(item);
            CartSnapshot::from(&*cart)
        })
    }

    /// Removes a line by key; unknown keys leave the cart unchanged.
    pub fn remove_item(&self, key: &str) -> Result<CartSnapshot, ApiError> {
        self.with_cart_mut(|cart| {
            let removed = cart.remove_item(key);
            debug!(key, removed, "cart remove_item");
            CartSnapshot::from(&*cart)
        })
    }

    /// Empties the cart.
    pub fn clear(&self) -> Result<CartSnapshot, ApiError> {
        debug!("cart clear");
        self.with_cart_mut(|cart| {
            cart.clear();
            CartSnapshot::from(&*cart)
        })
    }

    /// Current items, count and total.
    pub fn snapshot(&self) -> Result<CartSnapshot, ApiError> {
        self.with_cart(|cart| CartSnapshot::from(cart))
    }

    /// Total quantity (the cart badge number).
    pub fn count(&self) -> Result<i64, ApiError> {
        self.with_cart(Cart::count)
    }

    pub fn total(&self) -> Result<Money, ApiError> {
        self.with_cart(Cart::total)
    }
}
