//! Verdant Cart - client-side cart and wishlist state engine.
//!
//! This crate owns the shopping session state for a storefront frontend:
//! the cart line items, the wishlist, and the transient notification
//! queue. Every mutation keeps the in-memory collections and the backing
//! key-value store in sync, so a page reload (a fresh [`CartEngine`])
//! resumes exactly where the session left off.
//!
//! # Modules
//!
//! - [`engine`] - [`CartEngine`], the mutation surface consumed by the
//!   presentation layer
//! - [`notifications`] - transient user-facing messages with timed expiry
//! - [`store`] - the synchronous key-value persistence boundary
//! - [`config`] - storage keys, durations, and asset fallbacks
//!
//! # Design
//!
//! The engine is an explicitly constructed instance, created once at the
//! composition root and handed to consumers - there is no ambient
//! singleton. It runs single-threaded and cooperative: operations run to
//! completion, persistence writes are synchronous, and notification
//! expiry is deadline-based rather than timer-based (callers sweep the
//! queue from their event loop).
//!
//! No engine operation returns an error to the caller. Inputs are
//! defensively coerced by the `verdant-core` types, malformed persisted
//! data falls back to an empty collection, and store write failures are
//! logged and swallowed - the session state survives in memory.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod engine;
pub mod error;
pub mod notifications;
pub mod store;

pub use config::CartConfig;
pub use engine::{CartEngine, CartLineItem, WishlistEntry};
pub use error::{ConfigError, StoreError};
pub use notifications::{
    Clock, ManualClock, Notification, NotificationId, NotificationKind, NotificationQueue,
    SystemClock,
};
pub use store::{JsonFileStore, KeyValueStore, MemoryStore};
