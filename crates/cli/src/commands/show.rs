//! Display the persisted cart and wishlist.

use super::open_engine;

/// Print both collections and the cart totals.
#[allow(clippy::print_stdout)]
pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let engine = open_engine()?;

    println!("Cart ({} items):", engine.total_items());
    for line in engine.line_items() {
        println!(
            "  {:<12} {:<30} x{:<4} @ {:>10}  = {}",
            line.id.as_str(),
            line.name,
            line.quantity.get(),
            line.price.to_string(),
            line.line_total()
        );
    }
    println!("  Total: {}", engine.total_price());

    println!();
    println!("Wishlist ({} entries):", engine.wishlist().len());
    for entry in engine.wishlist() {
        println!(
            "  {:<12} {:<30} @ {:>10}  (added {})",
            entry.id.as_str(),
            entry.name,
            entry.price.to_string(),
            entry.added_at.format("%Y-%m-%d %H:%M:%S")
        );
    }

    Ok(())
}
