//! # Storefront Demo
//!
//! Runs one scripted shopping session against the configured catalog and
//! prints the grid and the resulting cart as JSON.
//!
//! ## Session Script
//! 1. List the product grid
//! 2. Open the first product, pick its second color and size M
//! 3. Add to cart twice (same line, qty 2)
//! 4. Print the cart

use tisso_storefront::commands::{cart, catalog, product};
use tisso_storefront::error::ApiError;
use tisso_storefront::state::ConfigState;
use tisso_storefront::{init_tracing, Storefront};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    init_tracing();

    if let Err(err) = run() {
        error!(code = ?err.code, "{}", err.message);
        std::process::exit(1);
    }
}

fn run() -> Result<(), ApiError> {
    let store = Storefront::start(ConfigState::from_env())?;
    let handle = store.cart_handle();

    let cards = catalog::list_products(store.catalog(), store.config())?;
    println!("{}", to_json(&cards)?);

    let Some(first) = cards.first() else {
        info!("Catalog is empty, nothing to add");
        return Ok(());
    };

    for _ in 0..2 {
        let view = product::open_product(store.catalog(), store.modal(), &first.product_key)?;
        if let Some(color) = view.colors.get(1) {
            product::select_color(store.modal(), &color.label)?;
        }
        product::select_size(store.modal(), "M")?;
        product::add_to_cart(store.modal(), &handle, store.toast())?;
    }

    let snapshot = cart::get_cart(&handle)?;
    info!(
        count = snapshot.count,
        total = %store.config().format_currency(snapshot.total),
        "Cart ready"
    );
    println!("{}", to_json(&snapshot)?);

    Ok(())
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, ApiError> {
    serde_json::to_string_pretty(value).map_err(|e| ApiError::internal(e.to_string()))
}
