//! # Product Modal State
//!
//! The variant-selection dialog opened from a product tile.
//!
//! ## Modal Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  closed ──open(entry)──► open: color = first option, size = none        │
//! │    ▲                       │                                            │
//! │    │                       ├── select_color ──► size kept or reset      │
//! │    │                       ├── toggle_size_menu                         │
//! │    │                       ├── select_size ───► size set, menu closed   │
//! │    │                       │                                            │
//! │    └──── close / add ──────┘                                            │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Mutex;

use serde::Serialize;
use tisso_core::{
    CartSnapshot, CatalogEntry, Color, CoreResult, LineItem, Money, VariantResolver,
    VariantSelection,
};
use tracing::debug;

use super::cart::CartHandle;
use crate::error::ApiError;

/// Result of pressing ADD TO CART.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "cart", rename_all = "camelCase")]
pub enum AddOutcome {
    /// The line item went into the cart
    Added(CartSnapshot),
    /// No variant resolved; nothing happened
    Disabled,
}

/// One open product dialog.
#[derive(Debug, Clone)]
pub struct ProductModal {
    entry: CatalogEntry,
    resolver: VariantResolver,
    selection: VariantSelection,
    size_menu_open: bool,
}

impl ProductModal {
    pub fn open(entry: CatalogEntry) -> Self {
        let resolver = VariantResolver::new(&entry);
        let selection = VariantSelection::initial(&resolver);
        ProductModal {
            entry,
            resolver,
            selection,
            size_menu_open: false,
        }
    }

    pub fn entry(&self) -> &CatalogEntry {
        &self.entry
    }

    pub fn product_key(&self) -> &str {
        self.resolver.product_key()
    }

    pub fn selection(&self) -> &VariantSelection {
        &self.selection
    }

    pub fn select_color(&mut self, label: &str) -> CoreResult<()> {
        self.selection.select_color(&self.resolver, label)
    }

    /// Picks a size from the menu and closes the menu.
    pub fn select_size(&mut self, size: &str) {
        self.selection.select_size(size);
        self.size_menu_open = false;
    }

    pub fn toggle_size_menu(&mut self) -> bool {
        self.size_menu_open = !self.size_menu_open;
        self.size_menu_open
    }

    pub fn close_size_menu(&mut self) {
        self.size_menu_open = false;
    }

    pub fn is_size_menu_open(&self) -> bool {
        self.size_menu_open
    }

    /// Sizes offered for the current color.
    pub fn sizes(&self) -> Vec<String> {
        self.selection
            .color()
            .map(|color| {
                self.resolver
                    .sizes_for_color(&color.label)
                    .into_iter()
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn display_price(&self) -> Option<Money> {
        self.selection.display_price(&self.resolver)
    }

    /// Whether ADD TO CART is enabled.
    pub fn can_add(&self) -> bool {
        self.selection.is_resolved(&self.resolver)
    }

    /// The item ADD TO CART would add, if enabled.
    pub fn line_item(&self) -> Option<LineItem> {
        self.selection.line_item(&self.entry, &self.resolver)
    }

    /// Hands the resolved line item (qty 1) to the cart.
    ///
    /// Does not close the dialog; [`ModalState::add_to_cart`] does that.
    pub fn add_to_cart(&self, cart: &CartHandle) -> Result<AddOutcome, ApiError> {
        match self.line_item() {
            Some(item) => Ok(AddOutcome::Added(cart.add_item(item)?)),
            None => {
                debug!(product = self.product_key(), "add_to_cart disabled");
                Ok(AddOutcome::Disabled)
            }
        }
    }

    pub fn view(&self) -> ProductView {
        ProductView {
            product_key: self.product_key().to_string(),
            title: self.entry.title.clone(),
            image: self.entry.image.clone(),
            alt: self.entry.alt.clone(),
            description: self.entry.description.clone(),
            display_price: self.display_price(),
            colors: self.resolver.color_options(),
            selected_color: self.selection.color().cloned(),
            sizes: self.sizes(),
            selected_size: self.selection.size().map(String::from),
            size_menu_open: self.size_menu_open,
            can_add: self.can_add(),
        }
    }
}

/// Everything the dialog renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductView {
    pub product_key: String,
    pub title: String,
    pub image: String,
    pub alt: String,
    pub description: String,
    /// `None` renders as an empty price line
    pub display_price: Option<Money>,
    pub colors: Vec<Color>,
    pub selected_color: Option<Color>,
    pub sizes: Vec<String>,
    pub selected_size: Option<String>,
    pub size_menu_open: bool,
    pub can_add: bool,
}

/// Holder for the (at most one) open product dialog.
#[derive(Debug, Default)]
pub struct ModalState {
    modal: Mutex<Option<ProductModal>>,
}

impl ModalState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens a dialog, replacing any open one.
    pub fn open(&self, entry: CatalogEntry) -> Result<ProductView, ApiError> {
        let modal = ProductModal::open(entry);
        let view = modal.view();
        *self.lock()? = Some(modal);
        Ok(view)
    }

    pub fn close(&self) -> Result<(), ApiError> {
        *self.lock()? = None;
        Ok(())
    }

    pub fn is_open(&self) -> Result<bool, ApiError> {
        Ok(self.lock()?.is_some())
    }

    /// Executes a function with read access to the open dialog.
    pub fn with_modal<F, R>(&self, f: F) -> Result<R, ApiError>
    where
        F: FnOnce(&ProductModal) -> R,
    {
        let guard = self.lock()?;
        guard.as_ref().map(f).ok_or_else(ApiError::modal_closed)
    }

    /// Executes a function with write access to the open dialog.
    pub fn with_modal_mut<F, R>(&self, f: F) -> Result<R, ApiError>
    where
        F: FnOnce(&mut ProductModal) -> R,
    {
        let mut guard = self.lock()?;
        guard.as_mut().map(f).ok_or_else(ApiError::modal_closed)
    }

    /// Adds the open dialog's selection to the cart and closes the dialog on
    /// success. A disabled add leaves the dialog open.
    pub fn add_to_cart(&self, cart: &CartHandle) -> Result<(AddOutcome, String), ApiError> {
        let mut guard = self.lock()?;
        let modal = guard.as_ref().ok_or_else(ApiError::modal_closed)?;
        let title = modal.entry().title.clone();
        let outcome = modal.add_to_cart(cart)?;
        if matches!(outcome, AddOutcome::Added(_)) {
            *guard = None;
        }
        Ok((outcome, title))
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Option<ProductModal>>, ApiError> {
        self.modal
            .lock()
            .map_err(|_| ApiError::internal("Modal lock poisoned"))
    }
}
