//! Verdant CLI - inspect and mutate persisted cart/wishlist state.
//!
//! Works against the same JSON file store the storefront frontend uses,
//! which makes it handy for seeding demo carts and debugging persisted
//! state. The store directory comes from `VERDANT_STORAGE_DIR`
//! (default `.verdant`).
//!
//! # Usage
//!
//! ```bash
//! # Show the cart, wishlist, and totals
//! verdant show
//!
//! # Add two of a product to the cart
//! verdant cart add --id 101 --name "Laptop" --price 999.00 --qty 2
//!
//! # Adjust and remove
//! verdant cart set-qty --id 101 --qty 5
//! verdant cart remove --id 101
//! verdant cart clear
//!
//! # Wishlist management
//! verdant wishlist add --id mug-1 --name "Stoneware Mug" --price 25
//! verdant wishlist remove --id mug-1
//! verdant wishlist clear
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "verdant")]
#[command(author, version, about = "Verdant CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the cart, wishlist, and totals
    Show,
    /// Manage the cart collection
    Cart {
        #[command(subcommand)]
        action: commands::cart::CartAction,
    },
    /// Manage the wishlist collection
    Wishlist {
        #[command(subcommand)]
        action: commands::wishlist::WishlistAction,
    },
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli);

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Show => commands::show::run()?,
        Commands::Cart { action } => commands::cart::run(action)?,
        Commands::Wishlist { action } => commands::wishlist::run(action)?,
    }
    Ok(())
}
