//! # Product Commands
//!
//! The product modal: opening a tile, picking a variant, adding it.
//!
//! ## Modal Workflow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  open_product("1")                                                      │
//! │  ┌────────────────────────────────────────────────────────────────┐    │
//! │  │  Orange Wide Leg                                 980,00€       │    │
//! │  │                                                                │    │
//! │  │  Color:  (●White) ( Black)        ◄── select_color            │    │
//! │  │  Size:   [ Select size ▾ ]        ◄── toggle_size_menu        │    │
//! │  │            XS  S  M  L  XL        ◄── select_size             │    │
//! │  │                                                                │    │
//! │  │  [      ADD TO CART      ]        ◄── add_to_cart             │    │
//! │  └────────────────────────────────────────────────────────────────┘    │
//! │                                                                         │
//! │  add_to_cart: resolved ──► cart.add_item, modal closes, toast shows     │
//! │               unresolved ─► Disabled, nothing changes                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::{debug, info};

use crate::catalog::Catalog;
use crate::error::ApiError;
use crate::state::{AddOutcome, CartHandle, ModalState, ProductView, ToastState};

/// Opens the modal for a product tile.
///
/// ## Returns
/// The initial view (first color, no size), or `NotFound` for an unknown key.
pub fn open_product(
    catalog: &Catalog,
    modal: &ModalState,
    product_key: &str,
) -> Result<ProductView, ApiError> {
    debug!(product_key, "open_product command");
    let entry = catalog.get(product_key)?.clone();
    modal.open(entry)
}

/// Closes the modal without adding anything.
pub fn close_product(modal: &ModalState) -> Result<(), ApiError> {
    debug!("close_product command");
    modal.close()
}

/// Switches color. The chosen size survives only if the new color offers it.
pub fn select_color(modal: &ModalState, label: &str) -> Result<ProductView, ApiError> {
    debug!(label, "select_color command");
    modal
        .with_modal_mut(|m| m.select_color(label).map(|()| m.view()))?
        .map_err(ApiError::from)
}

/// Picks a size and closes the size menu.
pub fn select_size(modal: &ModalState, size: &str) -> Result<ProductView, ApiError> {
    debug!(size, "select_size command");
    modal.with_modal_mut(|m| {
        m.select_size(size);
        m.view()
    })
}

pub fn toggle_size_menu(modal: &ModalState) -> Result<ProductView, ApiError> {
    debug!("toggle_size_menu command");
    modal.with_modal_mut(|m| {
        m.toggle_size_menu();
        m.view()
    })
}

pub fn get_product_view(modal: &ModalState) -> Result<ProductView, ApiError> {
    modal.with_modal(|m| m.view())
}

/// Adds the selected variant to the cart.
///
/// ## Order of Effects
/// 1. Line item (qty 1) goes into the cart
/// 2. Modal closes
/// 3. "<title> added to cart" toast shows
///
/// A failed cart write (e.g. `NotInitialized`) stops at step 1 and leaves the
/// modal open.
pub fn add_to_cart(
    modal: &ModalState,
    cart: &CartHandle,
    toast: &ToastState,
) -> Result<AddOutcome, ApiError> {
    debug!("add_to_cart command");
    let (outcome, title) = modal.add_to_cart(cart)?;

    if let AddOutcome::Added(snapshot) = &outcome {
        info!(title = %title, count = snapshot.count, total = %snapshot.total, "Added to cart");
        toast.show(format!("{title} added to cart"));
    }

    Ok(outcome)
}
