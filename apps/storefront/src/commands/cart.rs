//! # Cart Commands
//!
//! Cart badge, cart drawer and its actions.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  ┌──────────┐   add_to_cart    ┌──────────┐                             │
//! │  │  Empty   │ ───────────────► │ In Cart  │ ◄──┐ add_to_cart (merge)    │
//! │  │  Cart    │                  │          │ ───┘ remove_from_cart       │
//! │  └──────────┘ ◄─────────────── └──────────┘                             │
//! │                  clear_cart /                                           │
//! │                  last line removed                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tisso_core::CartSnapshot;
use tracing::debug;

use crate::error::ApiError;
use crate::state::CartHandle;

/// Gets the current cart contents with count and total.
pub fn get_cart(cart: &CartHandle) -> Result<CartSnapshot, ApiError> {
    debug!("get_cart command");
    cart.snapshot()
}

/// Removes one line by key. Unknown keys leave the cart as it is.
pub fn remove_from_cart(cart: &CartHandle, key: &str) -> Result<CartSnapshot, ApiError> {
    debug!(key, "remove_from_cart command");
    cart.remove_item(key)
}

pub fn clear_cart(cart: &CartHandle) -> Result<CartSnapshot, ApiError> {
    debug!("clear_cart command");
    cart.clear()
}
