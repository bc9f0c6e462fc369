//! # Catalog Commands
//!
//! The product grid.

use serde::Serialize;
use tisso_core::{CatalogEntry, Money};
use tracing::debug;

use crate::catalog::Catalog;
use crate::error::ApiError;
use crate::state::ConfigState;

/// One tile in the product grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCard {
    /// Pass back to `open_product`
    pub product_key: String,
    pub title: String,
    pub image: String,
    pub alt: String,
    pub price: Option<Money>,
    /// Formatted price line, empty when the entry has no price
    pub price_text: String,
}

impl ProductCard {
    fn from_entry(entry: &CatalogEntry, config: &ConfigState) -> Self {
        let price = entry.listed_price();
        ProductCard {
            product_key: entry.product_key().to_string(),
            title: entry.title.clone(),
            image: entry.image.clone(),
            alt: entry.alt.clone(),
            price,
            price_text: price
                .map(|p| config.format_currency(p))
                .unwrap_or_default(),
        }
    }
}

/// Lists the grid in catalog order.
///
/// ## Grid Layout
/// ```text
/// ┌──────────────┐ ┌──────────────┐ ┌──────────────┐
/// │   image1     │ │   image2     │ │   image3     │
/// │ Orange Wide  │ │ Tailored     │ │ Accordion    │
/// │ Leg 980,00€  │ │ Jacket ...   │ │ Pleated ...  │
/// └──────────────┘ └──────────────┘ └──────────────┘
///        │ click
///        ▼
///  open_product(product_key)
/// ```
pub fn list_products(
    catalog: &Catalog,
    config: &ConfigState,
) -> Result<Vec<ProductCard>, ApiError> {
    debug!(count = catalog.len(), "list_products command");
    Ok(catalog
        .entries()
        .iter()
        .map(|entry| ProductCard::from_entry(entry, config))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_builtin_grid() {
        let catalog = Catalog::builtin().unwrap();
        let cards = list_products(&catalog, &ConfigState::default()).unwrap();

        assert_eq!(cards.len(), 6);
        assert_eq!(cards[0].product_key, "1");
        assert_eq!(cards[0].title, "Orange Wide Leg");
        assert_eq!(cards[0].alt, "Product image");
        assert_eq!(cards[0].price_text, "980,00€");
        assert_eq!(cards[5].title, "Long Sleeve Tennis Top");
    }

    #[test]
    fn test_unpriced_entry_has_empty_price_text() {
        let catalog = Catalog::from_json(r#"[{"id": "x", "title": "Gift Card"}]"#).unwrap();
        let cards = list_products(&catalog, &ConfigState::default()).unwrap();

        assert_eq!(cards[0].price, None);
        assert_eq!(cards[0].price_text, "");
    }
}
