//! # Variant Resolution
//!
//! Turns a [`CatalogEntry`] into a normalized, priced variant table and
//! answers the modal's questions about it.
//!
//! ## Resolution Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  CatalogEntry ──► VariantResolver::new ──► [Variant, Variant, ...]      │
//! │                                                   │                     │
//! │         ┌─────────────────────┬───────────────────┼──────────────┐      │
//! │         ▼                     ▼                   ▼              ▼      │
//! │   color_options()     sizes_for_color()   selected_variant()  display_  │
//! │   (first 2, in        (stock null or > 0) (color + size)      price()   │
//! │    first-seen order)                                                    │
//! │                                                                         │
//! │  VariantSelection ── current color/size, resets size on color change   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Price Resolution Order
//! variant price → entry `basePrice` → entry `price` → 0
//!
//! The resolver is a pure function of its entry; recomputing it after any
//! configuration change is always safe.

use std::collections::HashSet;

use crate::catalog::CatalogEntry;
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{Color, LineItem, Variant};
use crate::MAX_COLOR_OPTIONS;

// =============================================================================
// Resolver
// =============================================================================

/// The normalized variant table of one catalog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantResolver {
    product_key: String,
    variants: Vec<Variant>,
    listed_price: Option<Money>,
}

impl VariantResolver {
    /// Builds the variant table for an entry.
    ///
    /// ## Behavior
    /// - Non-empty `variants`: one variant per spec, in order
    /// - Otherwise: `colors × sizes`, colors outermost, shared price,
    ///   unconstrained stock
    /// - Nothing configured at all: an empty table
    pub fn new(entry: &CatalogEntry) -> Self {
        let key = entry.product_key();
        let listed_price = entry.listed_price();
        let fallback_price = listed_price.unwrap_or_default();

        let variants = if entry.has_explicit_variants() {
            entry
                .variants
                .iter()
                .flatten()
                .enumerate()
                .map(|(i, spec)| {
                    let color = Color::normalize(spec.color.as_ref());
                    Variant {
                        id: spec.id.clone().unwrap_or_else(|| {
                            format!("{key}-{}-{}-{i}", color.label, spec.size)
                        }),
                        color,
                        size: spec.size.clone(),
                        price: spec.price.unwrap_or(fallback_price),
                        stock: spec.stock,
                    }
                })
                .collect()
        } else {
            entry
                .colors
                .iter()
                .map(|spec| Color::normalize(Some(spec)))
                .flat_map(|color| {
                    entry.sizes.iter().enumerate().map(move |(i, size)| Variant {
                        id: format!("{key}-{}-{size}-{i}", color.label),
                        color: color.clone(),
                        size: size.clone(),
                        price: fallback_price,
                        stock: None,
                    })
                })
                .collect()
        };

        VariantResolver {
            product_key: key.to_string(),
            variants,
            listed_price,
        }
    }

    pub fn product_key(&self) -> &str {
        &self.product_key
    }

    /// The full table, including sold-out variants.
    pub fn variants(&self) -> &[Variant] {
        &self.variants
    }

    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    /// Distinct colors (by label) in first-seen order, capped at
    /// [`MAX_COLOR_OPTIONS`].
    pub fn color_options(&self) -> Vec<Color> {
        let mut seen = HashSet::new();
        self.variants
            .iter()
            .filter(|v| seen.insert(v.color.label.as_str()))
            .map(|v| v.color.clone())
            .take(MAX_COLOR_OPTIONS)
            .collect()
    }

    /// Looks up a selectable color by label.
    pub fn color_option(&self, label: &str) -> Option<Color> {
        self.color_options().into_iter().find(|c| c.label == label)
    }

    /// Sizes offered for a color: variants of that color whose stock is
    /// unconstrained or above zero, in table order.
    pub fn sizes_for_color(&self, label: &str) -> Vec<&str> {
        self.variants
            .iter()
            .filter(|v| v.color.label == label && v.is_available())
            .map(|v| v.size.as_str())
            .collect()
    }

    /// Whether `size` is offered under `label`.
    pub fn offers(&self, label: &str, size: &str) -> bool {
        self.sizes_for_color(label).contains(&size)
    }

    /// The variant matching both color and size, if any, sold out or not.
    pub fn selected_variant(&self, color_label: &str, size: &str) -> Option<&Variant> {
        self.variants
            .iter()
            .find(|v| v.color.label == color_label && v.size == size)
    }

    /// The first in-stock variant matching both color and size.
    ///
    /// This is what a selection resolves to: a sold-out variant is never
    /// offered, so it can never reach the cart.
    pub fn offered_variant(&self, color_label: &str, size: &str) -> Option<&Variant> {
        self.variants
            .iter()
            .find(|v| v.color.label == color_label && v.size == size && v.is_available())
    }

    /// Price to show: the selected variant's, else the entry's listed price.
    ///
    /// `None` means there is nothing to show yet.
    pub fn display_price(&self, selected: Option<&Variant>) -> Option<Money> {
        selected.map(|v| v.price).or(self.listed_price)
    }
}

// =============================================================================
// Selection
// =============================================================================

/// The modal's current color and size.
///
/// ## State Transition Rule
/// ```text
///   color: White, size: M
///        │
///        │ set_color(Black)
///        ▼
///   M offered for Black? ── yes ──► color: Black, size: M
///        │
///        no
///        ▼
///   color: Black, size: none
/// ```
/// The rule lives in [`VariantSelection::set_color`], so user clicks and
/// programmatic changes go through the same path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariantSelection {
    color: Option<Color>,
    size: Option<String>,
}

impl VariantSelection {
    /// First color option selected, no size.
    pub fn initial(resolver: &VariantResolver) -> Self {
        VariantSelection {
            color: resolver.color_options().into_iter().next(),
            size: None,
        }
    }

    pub fn color(&self) -> Option<&Color> {
        self.color.as_ref()
    }

    pub fn size(&self) -> Option<&str> {
        self.size.as_deref()
    }

    /// Selects one of the resolver's color options by label.
    ///
    /// ## Errors
    /// `UnknownColor` when the label is not among the color options.
    pub fn select_color(&mut self, resolver: &VariantResolver, label: &str) -> CoreResult<()> {
        let color = resolver
            .color_option(label)
            .ok_or_else(|| CoreError::UnknownColor {
                product: resolver.product_key().to_string(),
                label: label.to_string(),
            })?;
        self.set_color(resolver, color);
        Ok(())
    }

    /// Sets the color and drops the size if the new color does not offer it.
    pub fn set_color(&mut self, resolver: &VariantResolver, color: Color) {
        if let Some(size) = self.size.as_deref() {
            if !resolver.offers(&color.label, size) {
                self.size = None;
            }
        }
        self.color = Some(color);
    }

    /// Records a size. A size the current color does not offer (unknown or
    /// sold out) is kept but resolves to no variant.
    pub fn select_size(&mut self, size: &str) {
        self.size = Some(size.to_string());
    }

    /// The in-stock variant for the current color and size, if both resolve.
    pub fn resolve<'r>(&self, resolver: &'r VariantResolver) -> Option<&'r Variant> {
        let color = self.color.as_ref()?;
        let size = self.size.as_deref()?;
        resolver.offered_variant(&color.label, size)
    }

    pub fn display_price(&self, resolver: &VariantResolver) -> Option<Money> {
        resolver.display_price(self.resolve(resolver))
    }

    /// Whether the add-to-cart action is enabled.
    pub fn is_resolved(&self, resolver: &VariantResolver) -> bool {
        self.resolve(resolver).is_some()
    }

    /// The line item that add-to-cart would hand to the cart, if enabled.
    pub fn line_item(&self, entry: &CatalogEntry, resolver: &VariantResolver) -> Option<LineItem> {
        self.resolve(resolver)
            .map(|variant| LineItem::from_variant(entry, variant))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{ColorSpec, VariantSpec};

    fn fallback_entry() -> CatalogEntry {
        CatalogEntry {
            id: Some("1".to_string()),
            title: "Orange Wide Leg".to_string(),
            base_price: Some(Money::from_major(100)),
            colors: vec!["White".into(), "Black".into()],
            sizes: vec!["S".to_string(), "M".to_string()],
            ..CatalogEntry::default()
        }
    }

    fn stocked_entry() -> CatalogEntry {
        CatalogEntry {
            id: Some("2".to_string()),
            base_price: Some(Money::from_major(80)),
            variants: Some(vec![
                VariantSpec::new("White", "S"),
                VariantSpec::new("White", "M").with_stock(2),
                VariantSpec::new("Black", "M").with_stock(0),
                VariantSpec::new("Black", "L").with_price(Money::from_major(95)),
            ]),
            ..CatalogEntry::default()
        }
    }

    #[test]
    fn test_fallback_is_cross_product() {
        let resolver = VariantResolver::new(&fallback_entry());
        let table: Vec<(&str, &str)> = resolver
            .variants()
            .iter()
            .map(|v| (v.color.label.as_str(), v.size.as_str()))
            .collect();

        assert_eq!(
            table,
            vec![("White", "S"), ("White", "M"), ("Black", "S"), ("Black", "M")]
        );
        assert!(resolver
            .variants()
            .iter()
            .all(|v| v.price == Money::from_major(100) && v.stock.is_none()));
        assert_eq!(resolver.variants()[3].id, "1-Black-M-1");
    }

    #[test]
    fn test_explicit_variants_keep_order_and_ids() {
        let resolver = VariantResolver::new(&stocked_entry());
        let ids: Vec<&str> = resolver.variants().iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, vec!["2-White-S-0", "2-White-M-1", "2-Black-M-2", "2-Black-L-3"]);

        let mut entry = stocked_entry();
        if let Some(specs) = entry.variants.as_mut() {
            specs[0].id = Some("sku-ws".to_string());
        }
        assert_eq!(VariantResolver::new(&entry).variants()[0].id, "sku-ws");
    }

    #[test]
    fn test_empty_variant_list_uses_fallback() {
        let entry = CatalogEntry {
            variants: Some(Vec::new()),
            ..fallback_entry()
        };
        assert_eq!(VariantResolver::new(&entry).variants().len(), 4);
    }

    #[test]
    fn test_malformed_entry_degrades_to_empty_table() {
        let entry = CatalogEntry {
            variants: Some(Vec::new()),
            colors: Vec::new(),
            sizes: Vec::new(),
            ..CatalogEntry::default()
        };
        let resolver = VariantResolver::new(&entry);

        assert!(resolver.is_empty());
        assert!(resolver.color_options().is_empty());
        assert!(resolver.sizes_for_color("White").is_empty());

        let selection = VariantSelection::initial(&resolver);
        assert!(selection.color().is_none());
        assert!(!selection.is_resolved(&resolver));
    }

    #[test]
    fn test_price_resolution_order() {
        // Variant without a price: base price wins over the alternate field.
        let entry = CatalogEntry {
            base_price: Some(Money::from_major(50)),
            price: Some(Money::from_major(70)),
            variants: Some(vec![VariantSpec::new("White", "M")]),
            ..CatalogEntry::default()
        };
        let resolver = VariantResolver::new(&entry);
        let variant = resolver.selected_variant("White", "M");
        assert_eq!(resolver.display_price(variant), Some(Money::from_major(50)));

        // Only the alternate field.
        let entry = CatalogEntry {
            base_price: None,
            ..entry
        };
        let resolver = VariantResolver::new(&entry);
        assert_eq!(resolver.variants()[0].price, Money::from_major(70));

        // Nothing at all: zero.
        let entry = CatalogEntry { price: None, ..entry };
        let resolver = VariantResolver::new(&entry);
        assert_eq!(resolver.variants()[0].price, Money::zero());

        // Explicit variant price beats everything.
        let resolver = VariantResolver::new(&stocked_entry());
        let black_l = resolver.selected_variant("Black", "L");
        assert_eq!(resolver.display_price(black_l), Some(Money::from_major(95)));
    }

    #[test]
    fn test_display_price_without_selection() {
        let resolver = VariantResolver::new(&fallback_entry());
        assert_eq!(resolver.display_price(None), Some(Money::from_major(100)));

        let unpriced = CatalogEntry {
            base_price: None,
            price: None,
            ..fallback_entry()
        };
        let resolver = VariantResolver::new(&unpriced);
        assert_eq!(resolver.display_price(None), None);
    }

    #[test]
    fn test_color_options_distinct_and_capped() {
        let entry = CatalogEntry {
            colors: vec![
                ColorSpec::structured("Blue", "#0D499F", "#111111"),
                "Black".into(),
                ColorSpec::structured("Blue", "#000080", "#ffffff"),
                "Red".into(),
            ],
            sizes: vec!["S".to_string()],
            ..CatalogEntry::default()
        };
        let resolver = VariantResolver::new(&entry);
        let options = resolver.color_options();

        assert_eq!(options.len(), MAX_COLOR_OPTIONS);
        assert_eq!(options[0], Color::new("Blue", "#0D499F", "#111111"));
        assert_eq!(options[1].label, "Black");
        assert!(resolver.color_option("Red").is_none());
    }

    #[test]
    fn test_sold_out_sizes_excluded() {
        let resolver = VariantResolver::new(&stocked_entry());
        assert_eq!(resolver.sizes_for_color("White"), vec!["S", "M"]);
        assert_eq!(resolver.sizes_for_color("Black"), vec!["L"]);
        assert!(resolver.sizes_for_color("Green").is_empty());
    }

    #[test]
    fn test_only_black_variant_sold_out_leaves_size_unresolved() {
        let entry = CatalogEntry {
            variants: Some(vec![
                VariantSpec::new("White", "M"),
                VariantSpec::new("Black", "M").with_stock(0),
            ]),
            ..CatalogEntry::default()
        };
        let resolver = VariantResolver::new(&entry);
        assert!(resolver.sizes_for_color("Black").is_empty());

        let mut selection = VariantSelection::initial(&resolver);
        selection.select_size("M");
        assert!(selection.is_resolved(&resolver));

        selection.select_color(&resolver, "Black").unwrap();
        assert_eq!(selection.size(), None);
        assert!(selection.resolve(&resolver).is_none());
    }

    #[test]
    fn test_sold_out_size_picked_directly_never_resolves() {
        let entry = CatalogEntry {
            id: Some("9".to_string()),
            variants: Some(vec![
                VariantSpec::new("White", "M"),
                VariantSpec::new("Black", "M").with_stock(0),
            ]),
            ..CatalogEntry::default()
        };
        let resolver = VariantResolver::new(&entry);
        let mut selection = VariantSelection::initial(&resolver);

        selection.select_color(&resolver, "Black").unwrap();
        selection.select_size("M");

        assert!(resolver.selected_variant("Black", "M").is_some());
        assert!(selection.resolve(&resolver).is_none());
        assert!(!selection.is_resolved(&resolver));
        assert!(selection.line_item(&entry, &resolver).is_none());
        assert_eq!(selection.display_price(&resolver), resolver.display_price(None));
    }

    #[test]
    fn test_duplicate_rows_resolve_to_stocked_one() {
        let entry = CatalogEntry {
            variants: Some(vec![
                VariantSpec::new("White", "M").with_stock(0),
                VariantSpec::new("White", "M").with_stock(3),
            ]),
            ..CatalogEntry::default()
        };
        let resolver = VariantResolver::new(&entry);
        let mut selection = VariantSelection::initial(&resolver);
        selection.select_size("M");

        assert_eq!(
            selection.resolve(&resolver).map(|v| v.stock),
            Some(Some(3))
        );
    }

    #[test]
    fn test_selected_variant_requires_both() {
        let resolver = VariantResolver::new(&fallback_entry());
        assert!(resolver.selected_variant("White", "M").is_some());
        assert!(resolver.selected_variant("White", "XL").is_none());
        assert!(resolver.selected_variant("Green", "M").is_none());

        let selection = VariantSelection::initial(&resolver);
        assert_eq!(selection.color().map(|c| c.label.as_str()), Some("White"));
        assert!(selection.resolve(&resolver).is_none());
    }

    #[test]
    fn test_color_change_keeps_offered_size() {
        let resolver = VariantResolver::new(&fallback_entry());
        let mut selection = VariantSelection::initial(&resolver);
        selection.select_size("M");

        selection.select_color(&resolver, "Black").unwrap();
        assert_eq!(selection.size(), Some("M"));
        assert_eq!(
            selection.resolve(&resolver).map(|v| v.id.as_str()),
            Some("1-Black-M-1")
        );
    }

    #[test]
    fn test_color_change_resets_unoffered_size() {
        let resolver = VariantResolver::new(&stocked_entry());
        let mut selection = VariantSelection::initial(&resolver);
        selection.select_size("S");

        selection.select_color(&resolver, "Black").unwrap();
        assert_eq!(selection.size(), None);

        // Programmatic changes follow the same rule.
        selection.select_size("L");
        let white = Color::normalize(Some(&ColorSpec::from("White")));
        selection.set_color(&resolver, white);
        assert_eq!(selection.size(), None);
    }

    #[test]
    fn test_unknown_color_is_rejected() {
        let resolver = VariantResolver::new(&fallback_entry());
        let mut selection = VariantSelection::initial(&resolver);
        let err = selection.select_color(&resolver, "Green").unwrap_err();
        assert!(matches!(err, CoreError::UnknownColor { .. }));
        assert_eq!(selection.color().map(|c| c.label.as_str()), Some("White"));
    }

    #[test]
    fn test_line_item_only_when_resolved() {
        let entry = fallback_entry();
        let resolver = VariantResolver::new(&entry);
        let mut selection = VariantSelection::initial(&resolver);
        assert!(selection.line_item(&entry, &resolver).is_none());

        selection.select_size("M");
        let item = selection.line_item(&entry, &resolver).unwrap();
        assert_eq!(item.key, "1-White-M");
        assert_eq!(item.price, Money::from_major(100));
        assert_eq!(item.qty, 1);
    }
}
