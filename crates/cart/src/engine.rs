//! The cart/wishlist state engine.
//!
//! [`CartEngine`] owns both session collections for the lifetime of a
//! browsing session and guarantees their invariants:
//!
//! - at most one cart line item per product id (merge-by-id),
//! - quantities always within the [`Quantity`] range,
//! - at most one wishlist entry per product id, `added_at` immutable.
//!
//! Every mutation updates memory first, then synchronously mirrors the
//! affected collection to the store, then (for user-visible actions)
//! enqueues a notification. No mutation can fail toward the caller;
//! mutations on an id that is not present are silent no-ops.

use std::rc::Rc;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, instrument};

use verdant_core::{Price, Product, ProductId, Quantity};

use crate::config::CartConfig;
use crate::notifications::{Clock, NotificationKind, NotificationQueue, SystemClock};
use crate::store::{self, KeyValueStore};

/// One entry in the cart: a product snapshot plus its requested quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLineItem {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    #[serde(default)]
    pub image: Option<String>,
    pub quantity: Quantity,
}

impl CartLineItem {
    fn from_product(product: &Product, quantity: Quantity, fallback_image: &str) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
            image: Some(
                product
                    .image
                    .clone()
                    .unwrap_or_else(|| fallback_image.to_owned()),
            ),
            quantity,
        }
    }

    /// The line total: `price * quantity`.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.price.extended(self.quantity)
    }
}

/// One wishlist entry: a product snapshot plus when it was wished for.
///
/// Uninterpreted product fields ride along in `extra` so they survive
/// persistence (see [`Product`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WishlistEntry {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    #[serde(default)]
    pub image: Option<String>,
    /// When the entry was created. Never updated, even on re-add attempts.
    /// Persisted as `addedAt` to match the storefront's stored layout.
    #[serde(rename = "addedAt")]
    pub added_at: DateTime<Utc>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl WishlistEntry {
    fn from_product(product: &Product, added_at: DateTime<Utc>, fallback_image: &str) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
            image: Some(
                product
                    .image
                    .clone()
                    .unwrap_or_else(|| fallback_image.to_owned()),
            ),
            added_at,
            extra: product.extra.clone(),
        }
    }
}

/// The cart/wishlist state engine.
///
/// Construct one instance at the composition root and pass it to
/// consumers; see the crate docs for the lifecycle model.
#[derive(Debug)]
pub struct CartEngine {
    config: CartConfig,
    clock: Rc<dyn Clock>,
    store: Box<dyn KeyValueStore>,
    notifications: NotificationQueue,
    cart: Vec<CartLineItem>,
    wishlist: Vec<WishlistEntry>,
}

impl CartEngine {
    /// Create an engine on the system clock, hydrating both collections
    /// from the store.
    #[must_use]
    pub fn new(config: CartConfig, store: Box<dyn KeyValueStore>) -> Self {
        Self::with_clock(config, store, Rc::new(SystemClock))
    }

    /// Create an engine on an injected clock.
    ///
    /// Malformed persisted data is discarded (with a logged warning) and
    /// the affected collection starts empty.
    #[must_use]
    pub fn with_clock(config: CartConfig, store: Box<dyn KeyValueStore>, clock: Rc<dyn Clock>) -> Self {
        let cart = store::load_collection(store.as_ref(), &config.cart_key);
        let wishlist = store::load_collection(store.as_ref(), &config.wishlist_key);
        debug!(
            cart_lines = cart.len(),
            wishlist_entries = wishlist.len(),
            "Hydrated cart engine from store"
        );

        let notifications =
            NotificationQueue::with_clock(clock.clone(), config.notification_duration_ms);

        Self {
            config,
            clock,
            store,
            notifications,
            cart,
            wishlist,
        }
    }

    // =========================================================================
    // Cart operations
    // =========================================================================

    /// Add `quantity` of a product to the cart.
    ///
    /// If a line item with the same id already exists its quantity is
    /// incremented (clamped); otherwise a new line item is appended.
    /// Always succeeds and emits a success notification.
    #[instrument(skip_all, fields(product_id = %product.id))]
    pub fn add_to_cart(&mut self, product: &Product, quantity: Quantity) {
        match self.cart.iter_mut().find(|line| line.id == product.id) {
            Some(line) => {
                line.quantity = line.quantity.adjusted(i64::from(quantity.get()));
            }
            None => {
                self.cart.push(CartLineItem::from_product(
                    product,
                    quantity,
                    &self.config.fallback_image,
                ));
            }
        }
        self.persist_cart();
        self.notifications.enqueue(
            format!("{} added to cart", product.name),
            NotificationKind::Success,
        );
    }

    /// Set a line item's quantity directly. No-op if the id is not in the cart.
    pub fn set_quantity(&mut self, id: &ProductId, quantity: Quantity) {
        let Some(line) = self.cart.iter_mut().find(|line| line.id == *id) else {
            debug!(product_id = %id, "set_quantity for id not in cart");
            return;
        };
        line.quantity = quantity;
        self.persist_cart();
    }

    /// Set a quantity from free-form user input (e.g. a form field).
    ///
    /// Non-numeric input coerces to a quantity of 1; see [`Quantity::parse`].
    pub fn set_quantity_input(&mut self, id: &ProductId, raw: &str) {
        self.set_quantity(id, Quantity::parse(raw));
    }

    /// Increase a line item's quantity by `step`, clamped.
    pub fn increase_quantity(&mut self, id: &ProductId, step: u32) {
        self.adjust_quantity(id, i64::from(step));
    }

    /// Decrease a line item's quantity by `step`, flooring at 1.
    ///
    /// Decreasing never removes the line item; removal is the distinct
    /// [`Self::remove_item`] operation.
    pub fn decrease_quantity(&mut self, id: &ProductId, step: u32) {
        self.adjust_quantity(id, -i64::from(step));
    }

    fn adjust_quantity(&mut self, id: &ProductId, delta: i64) {
        let Some(line) = self.cart.iter_mut().find(|line| line.id == *id) else {
            debug!(product_id = %id, "quantity adjustment for id not in cart");
            return;
        };
        line.quantity = line.quantity.adjusted(delta);
        self.persist_cart();
    }

    /// Remove a line item.
    ///
    /// Emits an info notification naming the removed product when found;
    /// silent no-op otherwise.
    #[instrument(skip(self), fields(product_id = %id))]
    pub fn remove_item(&mut self, id: &ProductId) {
        let Some(pos) = self.cart.iter().position(|line| line.id == *id) else {
            return;
        };
        let removed = self.cart.remove(pos);
        self.persist_cart();
        self.notifications.enqueue(
            format!("{} removed from cart", removed.name),
            NotificationKind::Info,
        );
    }

    /// Empty the cart and emit one info notification.
    #[instrument(skip(self))]
    pub fn clear_cart(&mut self) {
        self.cart.clear();
        self.persist_cart();
        self.notifications
            .enqueue("Cart cleared", NotificationKind::Info);
    }

    /// Sum of quantities across all line items.
    #[must_use]
    pub fn total_items(&self) -> u64 {
        self.cart
            .iter()
            .map(|line| u64::from(line.quantity.get()))
            .sum()
    }

    /// Sum of `price * quantity` across all line items.
    ///
    /// No currency rounding is applied; that is the display layer's job.
    #[must_use]
    pub fn total_price(&self) -> Decimal {
        self.cart.iter().map(CartLineItem::line_total).sum()
    }

    /// Current cart line items, in insertion order.
    #[must_use]
    pub fn line_items(&self) -> &[CartLineItem] {
        &self.cart
    }

    // =========================================================================
    // Wishlist operations
    // =========================================================================

    /// Add a product to the wishlist.
    ///
    /// Re-adding an id that is already present changes nothing (the
    /// original `added_at` stands) and emits a warning notification.
    #[instrument(skip_all, fields(product_id = %product.id))]
    pub fn add_to_wishlist(&mut self, product: &Product) {
        if self.is_in_wishlist(&product.id) {
            self.notifications.enqueue(
                format!("{} is already in your wishlist", product.name),
                NotificationKind::Warning,
            );
            return;
        }

        self.wishlist.push(WishlistEntry::from_product(
            product,
            self.clock.now(),
            &self.config.fallback_image,
        ));
        self.persist_wishlist();
        self.notifications.enqueue(
            format!("{} added to wishlist", product.name),
            NotificationKind::Success,
        );
    }

    /// Remove a wishlist entry; mirrors [`Self::remove_item`].
    #[instrument(skip(self), fields(product_id = %id))]
    pub fn remove_from_wishlist(&mut self, id: &ProductId) {
        let Some(pos) = self.wishlist.iter().position(|entry| entry.id == *id) else {
            return;
        };
        let removed = self.wishlist.remove(pos);
        self.persist_wishlist();
        self.notifications.enqueue(
            format!("{} removed from wishlist", removed.name),
            NotificationKind::Info,
        );
    }

    /// Empty the wishlist and emit one info notification.
    #[instrument(skip(self))]
    pub fn clear_wishlist(&mut self) {
        self.wishlist.clear();
        self.persist_wishlist();
        self.notifications
            .enqueue("Wishlist cleared", NotificationKind::Info);
    }

    /// Whether the wishlist contains this id.
    #[must_use]
    pub fn is_in_wishlist(&self, id: &ProductId) -> bool {
        self.wishlist.iter().any(|entry| entry.id == *id)
    }

    /// Current wishlist entries, in insertion order.
    #[must_use]
    pub fn wishlist(&self) -> &[WishlistEntry] {
        &self.wishlist
    }

    // =========================================================================
    // Notifications
    // =========================================================================

    /// Read access to the notification queue.
    #[must_use]
    pub const fn notifications(&self) -> &NotificationQueue {
        &self.notifications
    }

    /// Mutable access for dismissal and sweeping.
    pub const fn notifications_mut(&mut self) -> &mut NotificationQueue {
        &mut self.notifications
    }

    // =========================================================================
    // Persistence
    // =========================================================================

    fn persist_cart(&mut self) {
        store::save_collection(self.store.as_mut(), &self.config.cart_key, &self.cart);
    }

    fn persist_wishlist(&mut self) {
        store::save_collection(
            self.store.as_mut(),
            &self.config.wishlist_key,
            &self.wishlist,
        );
    }
}
