//! # Domain Types
//!
//! Normalized types shared between the resolver, the cart and the
//! presentation layer.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │     Color       │   │    Variant      │   │    LineItem     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  label          │◄──│  id             │──►│  key            │       │
//! │  │  bg             │   │  color          │   │  product_id     │       │
//! │  │  fg             │   │  size           │   │  variant_id     │       │
//! │  └─────────────────┘   │  price (Money)  │   │  price, qty     │       │
//! │                        │  stock          │   └─────────────────┘       │
//! │                        └─────────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Pattern
//! A `LineItem` copies title, image, color and price out of the catalog at
//! the moment it is added. Later catalog changes never reach the cart.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::catalog::{CatalogEntry, ColorSpec};
use crate::money::Money;

// =============================================================================
// Color
// =============================================================================

/// A normalized swatch: display label, background and foreground.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Color {
    pub label: String,
    pub bg: String,
    pub fg: String,
}

impl Color {
    pub fn new(label: &str, bg: &str, fg: &str) -> Self {
        Color {
            label: label.to_string(),
            bg: bg.to_string(),
            fg: fg.to_string(),
        }
    }

    /// The swatch used when a spec is missing entirely.
    pub fn fallback() -> Self {
        Color::new("Color", "#000", "#fff")
    }

    /// Normalizes a configured color.
    ///
    /// ## Rules
    /// ```text
    /// None                          → { Color, #000,    #fff    }
    /// Named("white") (any case)     → { White, #ffffff, #111111 }
    /// Named("black") (any case)     → { Black, #000000, #ffffff }
    /// Named(s)                      → { s,     s,       #ffffff }
    /// Structured{label?, bg?, fg?}  → missing fields from the fallback
    /// ```
    pub fn normalize(spec: Option<&ColorSpec>) -> Self {
        match spec {
            None => Color::fallback(),
            Some(ColorSpec::Named(name)) => match name.to_lowercase().as_str() {
                "white" => Color::new("White", "#ffffff", "#111111"),
                "black" => Color::new("Black", "#000000", "#ffffff"),
                _ => Color::new(name, name, "#ffffff"),
            },
            Some(ColorSpec::Structured { label, bg, fg }) => {
                let fallback = Color::fallback();
                Color {
                    label: label.clone().unwrap_or(fallback.label),
                    bg: bg.clone().unwrap_or(fallback.bg),
                    fg: fg.clone().unwrap_or(fallback.fg),
                }
            }
        }
    }
}

// =============================================================================
// Variant
// =============================================================================

/// A purchasable (color, size) combination with its resolved price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Variant {
    pub id: String,
    pub color: Color,
    pub size: String,
    pub price: Money,
    /// `None` means unconstrained availability.
    pub stock: Option<i64>,
}

impl Variant {
    /// Whether the variant may be offered: unconstrained or stock above zero.
    #[inline]
    pub fn is_available(&self) -> bool {
        self.stock.map_or(true, |stock| stock > 0)
    }
}

// =============================================================================
// Line Item
// =============================================================================

/// An entry in the cart.
///
/// Unique by `key`, which is derived from product, color label and size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct LineItem {
    pub key: String,
    pub product_id: String,
    pub title: String,
    pub image: String,
    pub variant_id: String,
    pub color: Color,
    pub size: String,
    /// Unit price, frozen when the item was added.
    pub price: Money,
    /// Always at least 1.
    pub qty: i64,
}

impl LineItem {
    /// Builds the composite cart key for a product, color and size.
    pub fn key_for(product_key: &str, color_label: &str, size: &str) -> String {
        format!("{product_key}-{color_label}-{size}")
    }

    /// Creates a single-quantity line item for a resolved variant.
    pub fn from_variant(entry: &CatalogEntry, variant: &Variant) -> Self {
        let product_id = entry.product_key().to_string();
        LineItem {
            key: LineItem::key_for(&product_id, &variant.color.label, &variant.size),
            product_id,
            title: entry.title.clone(),
            image: entry.image.clone(),
            variant_id: variant.id.clone(),
            color: variant.color.clone(),
            size: variant.size.clone(),
            price: variant.price,
            qty: 1,
        }
    }

    /// Unit price × quantity (saturating).
    #[inline]
    pub fn line_total(&self) -> Money {
        self.price.multiply_quantity(self.qty)
    }
}
