//! CLI command implementations.

pub mod cart;
pub mod show;
pub mod wishlist;

use rust_decimal::Decimal;
use verdant_cart::{CartConfig, CartEngine, JsonFileStore};
use verdant_core::{Price, Product};

/// The CLI is the composition root here: one engine instance over the
/// configured file store, constructed per invocation.
pub fn open_engine() -> Result<CartEngine, Box<dyn std::error::Error>> {
    let config = CartConfig::from_env()?;
    let store = JsonFileStore::open(config.storage_dir.clone())?;
    Ok(CartEngine::new(config, Box::new(store)))
}

/// Build a product snapshot from command-line arguments.
pub fn product_from_args(
    id: &str,
    name: &str,
    price: &str,
    image: Option<&str>,
) -> Result<Product, Box<dyn std::error::Error>> {
    let amount: Decimal = price
        .parse()
        .map_err(|_| format!("invalid price: {price:?}"))?;

    let mut product = Product::new(id, name, Price::new(amount));
    if let Some(image) = image {
        product = product.with_image(image);
    }
    Ok(product)
}

/// Log the notifications a mutation produced, the way the storefront
/// toast area would render them.
pub fn report_notifications(engine: &CartEngine) {
    for notification in engine.notifications().active() {
        tracing::info!("[{:?}] {}", notification.kind, notification.message);
    }
}
