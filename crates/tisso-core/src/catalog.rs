//! # Catalog Input Types
//!
//! The raw configuration of a catalog entry, exactly as the product grid
//! supplies it. Nothing here is normalized; the
//! [`VariantResolver`](crate::variant::VariantResolver) turns an entry into
//! the priced variant table.
//!
//! ## Two Configuration Shapes
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Explicit variants (preferred)        Fallback cross-product           │
//! │  ─────────────────────────────        ──────────────────────           │
//! │  "variants": [                        "colors": ["White", "Black"],    │
//! │    { "color": "White",                "sizes":  ["S", "M"],            │
//! │      "size": "M",                     "basePrice": 100                 │
//! │      "price": 120,                                                      │
//! │      "stock": 3 }                     → 4 variants, shared price,      │
//! │  ]                                      unconstrained stock            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## JSON Leniency
//! Ids may be numbers or strings. Prices may be numbers (`100`, `19.99`) or
//! display text (`"980,00€"`); both are parsed into [`Money`] without ever
//! going through a float.

use serde::{Deserialize, Deserializer, Serialize};

use crate::money::Money;

/// Title used when an entry does not name itself.
pub const DEFAULT_TITLE: &str = "Orange Wide Leg";

/// Alt text used when an entry has none.
pub const DEFAULT_ALT: &str = "Product image";

/// Description used when an entry has none.
pub const DEFAULT_DESCRIPTION: &str = "This one-piece swimsuit is crafted from jersey featuring an allover micro Monogram motif in relief.";

/// Fallback colors when an entry has neither variants nor colors.
pub fn default_colors() -> Vec<ColorSpec> {
    vec![
        ColorSpec::Named("White".to_string()),
        ColorSpec::Named("Black".to_string()),
    ]
}

/// Fallback sizes when an entry has neither variants nor sizes.
pub fn default_sizes() -> Vec<String> {
    ["XS", "S", "M", "L", "XL"]
        .into_iter()
        .map(String::from)
        .collect()
}

// =============================================================================
// Color Spec
// =============================================================================

/// A color as configured: either a plain name or a structured triple.
///
/// Structured specs also accept `value` for `bg` and `text` for `fg`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorSpec {
    /// `"White"`, `"Black"`, or any CSS color used as its own label.
    Named(String),

    /// `{ "label": .., "bg": .., "fg": .. }`, any field optional.
    Structured {
        #[serde(default)]
        label: Option<String>,
        #[serde(default, alias = "value")]
        bg: Option<String>,
        #[serde(default, alias = "text")]
        fg: Option<String>,
    },
}

impl ColorSpec {
    /// Shorthand for a fully specified structured color.
    pub fn structured(label: &str, bg: &str, fg: &str) -> Self {
        ColorSpec::Structured {
            label: Some(label.to_string()),
            bg: Some(bg.to_string()),
            fg: Some(fg.to_string()),
        }
    }
}

impl From<&str> for ColorSpec {
    fn from(name: &str) -> Self {
        ColorSpec::Named(name.to_string())
    }
}

// =============================================================================
// Variant Spec
// =============================================================================

/// One explicitly configured variant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct VariantSpec {
    /// Stable id; synthesized from product, color and size when absent.
    #[serde(default, deserialize_with = "deserialize_opt_id")]
    pub id: Option<String>,

    /// Missing colors normalize to the generic "Color" swatch.
    #[serde(default)]
    pub color: Option<ColorSpec>,

    #[serde(default)]
    pub size: String,

    /// Overrides the entry's base price.
    #[serde(default, deserialize_with = "deserialize_opt_price")]
    pub price: Option<Money>,

    /// `None` = unconstrained. Zero or below hides the variant.
    #[serde(default)]
    pub stock: Option<i64>,
}

impl VariantSpec {
    pub fn new(color: impl Into<ColorSpec>, size: &str) -> Self {
        VariantSpec {
            color: Some(color.into()),
            size: size.to_string(),
            ..VariantSpec::default()
        }
    }

    pub fn with_price(mut self, price: Money) -> Self {
        self.price = Some(price);
        self
    }

    pub fn with_stock(mut self, stock: i64) -> Self {
        self.stock = Some(stock);
        self
    }
}

// =============================================================================
// Catalog Entry
// =============================================================================

/// A product tile in the grid, as configured.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    #[serde(default, deserialize_with = "deserialize_opt_id")]
    pub id: Option<String>,

    #[serde(default = "default_title")]
    pub title: String,

    #[serde(default)]
    pub image: String,

    #[serde(default = "default_alt")]
    pub alt: String,

    #[serde(default = "default_description")]
    pub description: String,

    /// Primary price source, consulted after a variant's own price.
    #[serde(default, deserialize_with = "deserialize_opt_price")]
    pub base_price: Option<Money>,

    /// Alternate price field, consulted after `base_price`.
    #[serde(default, deserialize_with = "deserialize_opt_price")]
    pub price: Option<Money>,

    /// Explicit variant table. Absent or empty falls back to colors × sizes.
    #[serde(default)]
    pub variants: Option<Vec<VariantSpec>>,

    #[serde(default = "default_colors")]
    pub colors: Vec<ColorSpec>,

    #[serde(default = "default_sizes")]
    pub sizes: Vec<String>,
}

impl Default for CatalogEntry {
    fn default() -> Self {
        CatalogEntry {
            id: None,
            title: default_title(),
            image: String::new(),
            alt: default_alt(),
            description: default_description(),
            base_price: None,
            price: None,
            variants: None,
            colors: default_colors(),
            sizes: default_sizes(),
        }
    }
}

impl CatalogEntry {
    /// The product's identity: its id when set, otherwise its title.
    ///
    /// Used in variant ids, line item keys and catalog lookups.
    pub fn product_key(&self) -> &str {
        match self.id.as_deref() {
            Some(id) if !id.is_empty() => id,
            _ => &self.title,
        }
    }

    /// The entry-level price: `base_price`, else `price`.
    pub fn listed_price(&self) -> Option<Money> {
        self.base_price.or(self.price)
    }

    /// True when the entry brings its own non-empty variant table.
    pub fn has_explicit_variants(&self) -> bool {
        self.variants.as_ref().is_some_and(|v| !v.is_empty())
    }
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

fn default_alt() -> String {
    DEFAULT_ALT.to_string()
}

fn default_description() -> String {
    DEFAULT_DESCRIPTION.to_string()
}

// =============================================================================
// Lenient Deserializers
// =============================================================================

#[derive(Deserialize)]
#[serde(untagged)]
enum ScalarInput {
    Number(serde_json::Number),
    Text(String),
}

impl ScalarInput {
    fn into_text(self) -> String {
        match self {
            ScalarInput::Number(n) => n.to_string(),
            ScalarInput::Text(s) => s,
        }
    }
}

fn deserialize_opt_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<ScalarInput>::deserialize(deserializer)?.map(ScalarInput::into_text))
}

fn deserialize_opt_price<'de, D>(deserializer: D) -> Result<Option<Money>, D::Error>
where
    D: Deserializer<'de>,
{
    let price = match Option::<ScalarInput>::deserialize(deserializer)? {
        None => return Ok(None),
        // JSON numbers are exact major units; only text gets locale parsing.
        Some(ScalarInput::Number(n)) => Money::from_json_number(&n),
        Some(ScalarInput::Text(s)) => Money::parse(&s),
    };
    price.map(Some).map_err(serde::de::Error::custom)
}
