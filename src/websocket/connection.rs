//! Subscriber registry for the push channel.
//!
//! Thread-safe publish/subscribe over DashMap. Subscribers are anonymous:
//! no identity, no reconnection or resume semantics.

use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::mpsc;

use super::messages::WsMessage;

/// Channel end a subscriber receives messages through.
pub type WsSender = mpsc::UnboundedSender<WsMessage>;

/// Handle identifying one subscription.
pub type SubscriberId = u64;

/// Registry of live push-channel subscribers.
pub struct SubscriberRegistry {
    subscribers: DashMap<SubscriberId, WsSender>,
    next_id: AtomicU64,
}

impl SubscriberRegistry {
    pub fn new() -> Self {
        Self {
            subscribers: DashMap::new(),
            next_id: AtomicU64::new(1),
        }
    }

    /// Register a subscriber and return its handle.
    pub fn subscribe(&self, tx: WsSender) -> SubscriberId {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.subscribers.insert(id, tx);
        tracing::info!(subscriber_id = id, total = self.subscribers.len(), "subscriber connected");
        id
    }

    /// Drop a subscription. Unknown handles are ignored.
    pub fn unsubscribe(&self, id: SubscriberId) {
        if self.subscribers.remove(&id).is_some() {
            tracing::info!(
                subscriber_id = id,
                remaining = self.subscribers.len(),
                "subscriber disconnected"
            );
        }
    }

    /// Send a message to every live subscriber, best-effort.
    ///
    /// Returns the number of subscribers the message was handed to. A closed
    /// channel is skipped; the ws handler removes the entry when the
    /// connection winds down.
    pub fn publish(&self, message: &WsMessage) -> usize {
        let mut delivered = 0;
        for entry in self.subscribers.iter() {
            if entry.value().send(message.clone()).is_ok() {
                delivered += 1;
            } else {
                tracing::warn!(subscriber_id = *entry.key(), "subscriber channel closed, message dropped");
            }
        }
        delivered
    }

    pub fn len(&self) -> usize {
        self.subscribers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }
}

impl Default for SubscriberRegistry {
    fn default() -> Self {
        Self::new()
    }
}
