//! Cart mutation commands.

use clap::Subcommand;
use verdant_core::{ProductId, Quantity};

use super::{open_engine, product_from_args, report_notifications};

#[derive(Subcommand)]
pub enum CartAction {
    /// Add a product to the cart (merges with an existing line item)
    Add {
        /// Product id
        #[arg(long)]
        id: String,

        /// Product name
        #[arg(long)]
        name: String,

        /// Unit price, e.g. 19.99
        #[arg(long)]
        price: String,

        /// Image URI (placeholder asset used when omitted)
        #[arg(long)]
        image: Option<String>,

        /// Quantity to add
        #[arg(long, default_value = "1")]
        qty: String,
    },
    /// Set a line item's quantity
    SetQty {
        /// Product id
        #[arg(long)]
        id: String,

        /// New quantity (clamped to 1..=999; non-numeric becomes 1)
        #[arg(long)]
        qty: String,
    },
    /// Remove a line item
    Remove {
        /// Product id
        #[arg(long)]
        id: String,
    },
    /// Empty the cart
    Clear,
}

pub fn run(action: CartAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut engine = open_engine()?;

    match action {
        CartAction::Add {
            id,
            name,
            price,
            image,
            qty,
        } => {
            let product = product_from_args(&id, &name, &price, image.as_deref())?;
            engine.add_to_cart(&product, Quantity::parse(&qty));
        }
        CartAction::SetQty { id, qty } => {
            engine.set_quantity_input(&ProductId::new(id), &qty);
        }
        CartAction::Remove { id } => {
            engine.remove_item(&ProductId::new(id));
        }
        CartAction::Clear => engine.clear_cart(),
    }

    report_notifications(&engine);
    tracing::info!(
        "Cart now holds {} items, total {}",
        engine.total_items(),
        engine.total_price()
    );
    Ok(())
}
