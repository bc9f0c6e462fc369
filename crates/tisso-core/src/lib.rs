//! # tisso-core: Pure Business Logic for the Tisso Storefront
//!
//! This crate holds the storefront's business logic as pure functions and
//! plain data, with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Tisso Storefront Architecture                      │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Presentation layer                           │   │
//! │  │    Product Grid ──► Product Modal ──► Toast ──► Cart badge      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ commands                               │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 tisso-storefront (session state)                │   │
//! │  │    catalog, modal, toast, shared cart handle                    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ tisso-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  catalog  │  │  variant  │  │   cart    │  │   money   │  │   │
//! │  │   │ ColorSpec │  │ Resolver  │  │   Cart    │  │   Money   │  │   │
//! │  │   │ Entry     │  │ Selection │  │ Snapshot  │  │  parsing  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO TIMERS • NO GLOBAL STATE • PURE FUNCTIONS        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`catalog`] - Raw catalog configuration (what the product grid supplies)
//! - [`types`] - Normalized types (Color, Variant, LineItem)
//! - [`variant`] - Variant table, color/size options, selection rules
//! - [`cart`] - Cart with derived count and total
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Domain error types
//! - [`validation`] - Business rule validation
//!
//! ## Example Usage
//!
//! ```rust
//! use tisso_core::{Cart, CatalogEntry, Money, VariantResolver, VariantSelection};
//!
//! let entry = CatalogEntry {
//!     id: Some("1".to_string()),
//!     base_price: Some(Money::from_major(100)),
//!     colors: vec!["White".into(), "Black".into()],
//!     sizes: vec!["S".to_string(), "M".to_string()],
//!     ..CatalogEntry::default()
//! };
//!
//! let resolver = VariantResolver::new(&entry);
//! let mut selection = VariantSelection::initial(&resolver);
//! selection.select_size("M");
//!
//! let mut cart = Cart::new();
//! if let Some(item) = selection.line_item(&entry, &resolver) {
//!     cart.add_item(item);
//! }
//! assert_eq!(cart.count(), 1);
//! assert_eq!(cart.total(), Money::from_major(100));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;
pub mod variant;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, CartSnapshot};
pub use catalog::{CatalogEntry, ColorSpec, VariantSpec};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::*;
pub use variant::{VariantResolver, VariantSelection};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// How many distinct colors a product offers for selection.
///
/// The modal's segmented control has two slots, and colors past the second
/// are not selectable at all. This may be a layout limit rather than a
/// merchandising rule; see DESIGN.md.
pub const MAX_COLOR_OPTIONS: usize = 2;
