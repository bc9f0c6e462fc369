//! End-to-end scenarios across resolver, selection and cart.

use tisso_core::{Cart, CatalogEntry, Money, VariantResolver, VariantSelection, VariantSpec};

fn two_by_two() -> CatalogEntry {
    CatalogEntry {
        id: Some("1".to_string()),
        title: "Orange Wide Leg".to_string(),
        base_price: Some(Money::from_major(100)),
        colors: vec!["White".into(), "Black".into()],
        sizes: vec!["S".to_string(), "M".to_string()],
        ..CatalogEntry::default()
    }
}

fn add_selected(cart: &mut Cart, entry: &CatalogEntry, color: &str, size: &str) {
    let resolver = VariantResolver::new(entry);
    let mut selection = VariantSelection::initial(&resolver);
    selection.select_color(&resolver, color).unwrap();
    selection.select_size(size);
    let item = selection
        .line_item(entry, &resolver)
        .expect("selection should resolve");
    cart.add_item(item);
}

#[test]
fn white_m_added_once_then_twice() {
    let entry = two_by_two();
    let mut cart = Cart::new();

    add_selected(&mut cart, &entry, "White", "M");
    assert_eq!(cart.line_count(), 1);
    let line = &cart.items()[0];
    assert!(line.key.contains("White") && line.key.contains('M'));
    assert_eq!(line.qty, 1);
    assert_eq!(line.price, Money::from_major(100));
    assert_eq!(cart.count(), 1);
    assert_eq!(cart.total(), Money::from_major(100));

    add_selected(&mut cart, &entry, "White", "M");
    assert_eq!(cart.line_count(), 1);
    assert_eq!(cart.items()[0].qty, 2);
    assert_eq!(cart.count(), 2);
    assert_eq!(cart.total(), Money::from_major(200));
}

#[test]
fn different_sizes_are_separate_lines() {
    let entry = two_by_two();
    let mut cart = Cart::new();

    add_selected(&mut cart, &entry, "White", "M");
    add_selected(&mut cart, &entry, "Black", "S");
    add_selected(&mut cart, &entry, "White", "S");

    assert_eq!(cart.line_count(), 3);
    assert_eq!(cart.count(), 3);
    assert_eq!(cart.total(), Money::from_major(300));

    cart.remove_item("1-Black-S");
    assert_eq!(cart.count(), 2);
    assert_eq!(cart.total(), Money::from_major(200));
}

#[test]
fn sold_out_black_disables_add() {
    let entry = CatalogEntry {
        id: Some("9".to_string()),
        base_price: Some(Money::from_major(60)),
        variants: Some(vec![
            VariantSpec::new("White", "M"),
            VariantSpec::new("Black", "M").with_stock(0),
        ]),
        ..CatalogEntry::default()
    };
    let resolver = VariantResolver::new(&entry);
    let mut selection = VariantSelection::initial(&resolver);

    selection.select_color(&resolver, "Black").unwrap();
    assert!(resolver.sizes_for_color("Black").is_empty());
    assert!(selection.line_item(&entry, &resolver).is_none());
    assert_eq!(
        selection.display_price(&resolver),
        Some(Money::from_major(60))
    );
}

#[test]
fn builtin_style_catalog_json_resolves() {
    let entry: CatalogEntry = serde_json::from_str(
        r##"{
            "id": 2,
            "title": "Tailored Jacket",
            "price": "980,00€",
            "colors": [
                { "label": "Blue", "bg": "#0D499F", "fg": "#111111" },
                { "label": "Black", "bg": "#000000", "fg": "#ffffff" }
            ]
        }"##,
    )
    .unwrap();

    let resolver = VariantResolver::new(&entry);
    assert_eq!(resolver.variants().len(), 10);
    assert_eq!(resolver.color_options()[0].label, "Blue");
    assert_eq!(
        resolver.sizes_for_color("Black"),
        vec!["XS", "S", "M", "L", "XL"]
    );

    let mut cart = Cart::new();
    add_selected(&mut cart, &entry, "Blue", "XL");
    assert_eq!(cart.items()[0].key, "2-Blue-XL");
    assert_eq!(cart.total(), Money::from_cents(98000));
}
