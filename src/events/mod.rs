//! Round notifications as an explicit publish/subscribe channel.
//!
//! The engine's components do not hold references to each other. They
//! communicate through `EventBus`: publishers fire-and-forget, and each
//! subscriber owns a `SubscriptionId` naming a private queue it drains
//! on its own schedule. Zero subscribers is fine; so is several.
//!
//! Subscriptions are scoped registrations: a component acquires one when
//! it becomes active and releases it when it deactivates. A released
//! subscription receives nothing, which is what keeps a stale round
//! controller from reacting to a later round's timeout.

use std::collections::VecDeque;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// A round notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameEvent {
    /// The pieces matched the target pattern in time.
    Win,
    /// The countdown expired before the pieces matched.
    Loose,
    /// The countdown reached zero.
    CountEnd,
    /// A new round started; timers reset.
    CountRestart,
}

/// Handle to a live subscription.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubscriptionId(pub u64);

impl SubscriptionId {
    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Subscription({})", self.0)
    }
}

#[derive(Debug)]
struct Subscriber {
    interest: GameEvent,
    queue: VecDeque<GameEvent>,
}

/// Single-threaded publish/subscribe channel for round notifications.
#[derive(Debug, Default)]
pub struct EventBus {
    next_id: u64,
    subscribers: FxHashMap<SubscriptionId, Subscriber>,
}

impl EventBus {
    /// Create an empty bus.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register interest in one event kind.
    ///
    /// Returned IDs are never reused within a bus, so a stale handle
    /// held past `unsubscribe` can only miss events, not steal another
    /// subscriber's.
    pub fn subscribe(&mut self, interest: GameEvent) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.insert(
            id,
            Subscriber {
                interest,
                queue: VecDeque::new(),
            },
        );
        id
    }

    /// Release a subscription. Pending undelivered events are dropped.
    ///
    /// Unsubscribing twice is a no-op.
    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.subscribers.remove(&id);
    }

    /// Publish an event to every interested subscriber.
    ///
    /// Fire-and-forget: the publisher learns nothing about delivery.
    pub fn publish(&mut self, event: GameEvent) {
        for subscriber in self.subscribers.values_mut() {
            if subscriber.interest == event {
                subscriber.queue.push_back(event);
            }
        }
    }

    /// Drain one pending event from a subscription's queue.
    ///
    /// Returns `None` when the queue is empty or the subscription has
    /// been released.
    pub fn poll(&mut self, id: SubscriptionId) -> Option<GameEvent> {
        self.subscribers.get_mut(&id)?.queue.pop_front()
    }

    /// Number of live subscriptions.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}
