//! Integration tests for Verdant.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p verdant-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_flow` - End-to-end cart and wishlist mutation sequences
//! - `notifications` - Timed expiry and dismissal through the engine
//! - `persistence` - File-store round trips and corrupt-data recovery
//!
//! Everything runs in-process: tests drive a [`CartEngine`] over an
//! in-memory or temp-dir file store and a manual clock. No network, no
//! database.

use std::rc::Rc;

use verdant_cart::{CartConfig, CartEngine, ManualClock, MemoryStore};
use verdant_core::Product;

/// An engine over an in-memory store and a manual clock, plus a handle
/// to the clock for driving time.
#[must_use]
pub fn manual_engine() -> (CartEngine, Rc<ManualClock>) {
    let clock = Rc::new(ManualClock::default());
    let engine = CartEngine::with_clock(
        CartConfig::default(),
        Box::new(MemoryStore::new()),
        clock.clone(),
    );
    (engine, clock)
}

/// A minimal product fixture.
#[must_use]
pub fn product(id: &str, name: &str, price: u64) -> Product {
    Product::new(id, name, price)
}
