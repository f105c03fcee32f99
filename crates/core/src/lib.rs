//! Verdant Core - Shared types library.
//!
//! This crate provides common types used across all Verdant components:
//! - `cart` - Cart/wishlist state engine
//! - `cli` - Command-line tools for inspecting and mutating persisted state
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access, no
//! timers. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe product ids, prices, and
//!   quantities, plus the [`types::Product`] catalog snapshot

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
