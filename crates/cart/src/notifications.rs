//! Transient user-facing notifications with timed expiry.
//!
//! The queue is decoupled from the cart engine: the engine only ever
//! appends, and the presentation layer reads [`NotificationQueue::active`]
//! and dismisses. Expiry is deadline-based - each notification records
//! when it should disappear, and the owning event loop calls
//! [`NotificationQueue::sweep_expired`] on its ticks. This keeps the
//! whole system single-threaded and makes the "timer fires vs. user
//! dismisses" race trivially safe: both paths are removal-by-id, and
//! removing an absent id is a no-op.

use core::fmt;
use std::cell::Cell;
use std::rc::Rc;

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A source of the current time.
///
/// The engine and queue never call `Utc::now()` directly; they go through
/// a shared `Clock` so tests (and simulations) can drive time manually.
pub trait Clock: fmt::Debug {
    /// The current instant.
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A manually driven clock for deterministic tests.
///
/// Starts at the Unix epoch; advance it explicitly:
///
/// ```
/// use std::rc::Rc;
/// use verdant_cart::{Clock, ManualClock};
///
/// let clock = Rc::new(ManualClock::default());
/// let start = clock.now();
/// clock.advance_ms(1500);
/// assert_eq!((clock.now() - start).num_milliseconds(), 1500);
/// ```
#[derive(Debug)]
pub struct ManualClock {
    now: Cell<DateTime<Utc>>,
}

impl Default for ManualClock {
    fn default() -> Self {
        Self {
            now: Cell::new(DateTime::UNIX_EPOCH),
        }
    }
}

impl ManualClock {
    /// Create a clock starting at a given instant.
    #[must_use]
    pub const fn starting_at(now: DateTime<Utc>) -> Self {
        Self {
            now: Cell::new(now),
        }
    }

    /// Move the clock forward by `ms` milliseconds.
    pub fn advance_ms(&self, ms: i64) {
        self.now.set(self.now.get() + TimeDelta::milliseconds(ms));
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        self.now.get()
    }
}

/// Unique notification identifier: creation timestamp plus a random
/// component so two notifications in the same millisecond stay distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId {
    millis: i64,
    nonce: u32,
}

impl NotificationId {
    fn generate(now: DateTime<Utc>) -> Self {
        Self {
            millis: now.timestamp_millis(),
            nonce: rand::random(),
        }
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:08x}", self.millis, self.nonce)
    }
}

/// Severity of a notification, determining its visual styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    /// A successful operation or positive outcome.
    #[default]
    Success,
    /// An error or failure.
    Error,
    /// A non-critical issue the user should be aware of.
    Warning,
    /// A neutral informational message.
    Info,
}

/// A transient user-facing message.
///
/// Notifications are ephemeral and never persisted.
#[derive(Debug, Clone)]
pub struct Notification {
    /// Unique id used for dismissal.
    pub id: NotificationId,
    /// Text shown to the user.
    pub message: String,
    /// Visual severity.
    pub kind: NotificationKind,
    /// Requested lifetime in milliseconds.
    pub duration_ms: u32,
    expires_at: DateTime<Utc>,
}

impl Notification {
    /// The instant this notification stops being active.
    #[must_use]
    pub const fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }
}

/// An ordered queue of notifications with automatic timed expiry.
#[derive(Debug)]
pub struct NotificationQueue {
    clock: Rc<dyn Clock>,
    default_duration_ms: u32,
    entries: Vec<Notification>,
}

impl NotificationQueue {
    /// Create a queue on the system clock.
    #[must_use]
    pub fn new(default_duration_ms: u32) -> Self {
        Self::with_clock(Rc::new(SystemClock), default_duration_ms)
    }

    /// Create a queue on an injected clock.
    #[must_use]
    pub fn with_clock(clock: Rc<dyn Clock>, default_duration_ms: u32) -> Self {
        Self {
            clock,
            default_duration_ms,
            entries: Vec::new(),
        }
    }

    /// The queue's current instant, from its clock.
    #[must_use]
    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    /// Append a notification with the default lifetime.
    pub fn enqueue(&mut self, message: impl Into<String>, kind: NotificationKind) -> NotificationId {
        let duration = self.default_duration_ms;
        self.enqueue_with_duration(message, kind, duration)
    }

    /// Append a notification that lives for `duration_ms` milliseconds.
    pub fn enqueue_with_duration(
        &mut self,
        message: impl Into<String>,
        kind: NotificationKind,
        duration_ms: u32,
    ) -> NotificationId {
        let now = self.clock.now();
        let mut id = NotificationId::generate(now);
        // The random nonce makes same-millisecond collisions vanishingly
        // unlikely; regenerate anyway rather than ever aliasing two entries.
        while self.entries.iter().any(|n| n.id == id) {
            id = NotificationId::generate(now);
        }

        self.entries.push(Notification {
            id,
            message: message.into(),
            kind,
            duration_ms,
            expires_at: now + TimeDelta::milliseconds(i64::from(duration_ms)),
        });
        id
    }

    /// Remove a notification by id, whether or not its deadline passed.
    ///
    /// Idempotent: dismissing an id that already expired (or was already
    /// dismissed) is a no-op and returns `false`.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|n| n.id != id);
        before != self.entries.len()
    }

    /// Drop every notification whose deadline has passed.
    ///
    /// Returns how many were removed. Call this from the owning event
    /// loop's tick.
    pub fn sweep_expired(&mut self) -> usize {
        let now = self.clock.now();
        let before = self.entries.len();
        self.entries.retain(|n| n.expires_at > now);
        let removed = before - self.entries.len();
        if removed > 0 {
            debug!(removed, "Expired notifications");
        }
        removed
    }

    /// Notifications that are still live at this instant, oldest first.
    ///
    /// Filters by deadline so the view is correct even between sweeps.
    pub fn active(&self) -> impl Iterator<Item = &Notification> {
        let now = self.clock.now();
        self.entries.iter().filter(move |n| n.expires_at > now)
    }

    /// Number of queued entries, including any not yet swept.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the queue holds no entries at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn queue_with_manual_clock() -> (NotificationQueue, Rc<ManualClock>) {
        let clock = Rc::new(ManualClock::default());
        let queue = NotificationQueue::with_clock(clock.clone(), 3000);
        (queue, clock)
    }

    #[test]
    fn test_visible_until_deadline() {
        let (mut queue, clock) = queue_with_manual_clock();
        queue.enqueue("Added to cart", NotificationKind::Success);
        assert_eq!(queue.active().count(), 1);

        clock.advance_ms(2999);
        assert_eq!(queue.active().count(), 1);
        assert_eq!(queue.sweep_expired(), 0);

        clock.advance_ms(1);
        assert_eq!(queue.active().count(), 0);
        assert_eq!(queue.sweep_expired(), 1);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_dismiss_cancels_expiry() {
        let (mut queue, clock) = queue_with_manual_clock();
        let id = queue.enqueue("Removed item", NotificationKind::Info);

        clock.advance_ms(1000);
        assert!(queue.dismiss(id));
        assert!(queue.is_empty());

        // the deadline passing later has no residual effect
        clock.advance_ms(2000);
        assert_eq!(queue.sweep_expired(), 0);
        assert!(!queue.dismiss(id));
    }

    #[test]
    fn test_custom_duration() {
        let (mut queue, clock) = queue_with_manual_clock();
        queue.enqueue_with_duration("Slow", NotificationKind::Warning, 10_000);
        clock.advance_ms(5000);
        assert_eq!(queue.sweep_expired(), 0);
        clock.advance_ms(5000);
        assert_eq!(queue.sweep_expired(), 1);
    }

    #[test]
    fn test_same_millisecond_ids_are_distinct() {
        let (mut queue, _clock) = queue_with_manual_clock();
        let a = queue.enqueue("one", NotificationKind::Success);
        let b = queue.enqueue("two", NotificationKind::Success);
        assert_ne!(a, b);
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn test_kind_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&NotificationKind::Warning).unwrap(),
            "\"warning\""
        );
    }
}
