//! Wishlist mutation commands.

use clap::Subcommand;
use verdant_core::ProductId;

use super::{open_engine, product_from_args, report_notifications};

#[derive(Subcommand)]
pub enum WishlistAction {
    /// Add a product to the wishlist (no-op if already present)
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
    },
    /// Remove a wishlist entry
    Remove {
        /// Product id
        #[arg(long)]
        id: String,
    },
    /// Empty the wishlist
    Clear,
}

pub fn run(action: WishlistAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut engine = open_engine()?;

    match action {
        WishlistAction::Add {
            id,
            name,
            price,
            image,
        } => {
            let product = product_from_args(&id, &name, &price, image.as_deref())?;
            engine.add_to_wishlist(&product);
        }
        WishlistAction::Remove { id } => {
            engine.remove_from_wishlist(&ProductId::new(id));
        }
        WishlistAction::Clear => engine.clear_wishlist(),
    }

    report_notifications(&engine);
    tracing::info!("Wishlist now holds {} entries", engine.wishlist().len());
    Ok(())
}
