//! Fan-out of normalized player events to subscribers.

use std::fmt;

use dashmap::DashMap;
use tokio::sync::mpsc;
use tracing::trace;
use uuid::Uuid;

use medley_model::{Backend, CanonicalItem, PlaybackSnapshot};

/// A normalized event delivered to subscribers.
#[derive(Debug, Clone)]
pub enum PlayerEvent {
    /// Playback status changed. Emitted at most once per actual status
    /// transition; rate and position ride along.
    Snapshot {
        backend: Backend,
        snapshot: PlaybackSnapshot,
    },
    /// The current queue entry changed and re-resolved successfully.
    NowPlaying {
        backend: Backend,
        item: CanonicalItem,
    },
}

impl PlayerEvent {
    /// The backend this event originated from.
    pub fn backend(&self) -> Backend {
        match self {
            PlayerEvent::Snapshot { backend, .. } => *backend,
            PlayerEvent::NowPlaying { backend, .. } => *backend,
        }
    }
}

/// Opaque handle identifying one subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(Uuid);

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A live subscription: the handle plus the receiving end of the stream.
///
/// Dropping the subscription (or just its receiver) withdraws it; the router
/// prunes the dead entry on the next publish.
pub struct Subscription {
    id: SubscriptionId,
    backend: Backend,
    rx: mpsc::UnboundedReceiver<PlayerEvent>,
}

impl Subscription {
    pub fn id(&self) -> SubscriptionId {
        self.id
    }

    pub fn backend(&self) -> Backend {
        self.backend
    }

    /// Wait for the next event. Returns `None` once unsubscribed.
    pub async fn recv(&mut self) -> Option<PlayerEvent> {
        self.rx.recv().await
    }

    /// Non-blocking read of an already-delivered event.
    pub fn try_recv(&mut self) -> Option<PlayerEvent> {
        self.rx.try_recv().ok()
    }
}

struct SubscriberEntry {
    backend: Backend,
    tx: mpsc::UnboundedSender<PlayerEvent>,
}

/// Routes events from the per-backend observers to whoever subscribed.
///
/// Subscriptions are keyed by backend: a Catalog subscriber never sees Local
/// events. The router holds the only mutable registry state; observers and
/// subscribers otherwise share nothing.
#[derive(Default)]
pub struct SnapshotRouter {
    subscribers: DashMap<SubscriptionId, SubscriberEntry>,
}

impl SnapshotRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener for one backend's event stream.
    pub fn subscribe(&self, backend: Backend) -> Subscription {
        let (tx, rx) = mpsc::unbounded_channel();
        let id = SubscriptionId(Uuid::new_v4());
        self.subscribers.insert(id, SubscriberEntry { backend, tx });
        trace!(%id, ?backend, "subscriber registered");
        Subscription { id, backend, rx }
    }

    /// Remove a subscription. Returns false if the handle was already gone.
    pub fn unsubscribe(&self, id: &SubscriptionId) -> bool {
        let removed = self.subscribers.remove(id).is_some();
        if removed {
            trace!(%id, "subscriber removed");
        }
        removed
    }

    /// Number of live subscriptions, across both backends.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Deliver an event to every subscriber of its backend, pruning
    /// subscribers whose receiving end has been dropped.
    pub fn publish(&self, event: PlayerEvent) {
        let mut dead = Vec::new();
        for entry in self.subscribers.iter() {
            if entry.backend != event.backend() {
                continue;
            }
            if entry.tx.send(event.clone()).is_err() {
                dead.push(*entry.key());
            }
        }
        for id in dead {
            self.subscribers.remove(&id);
            trace!(%id, "pruned dropped subscriber");
        }
    }
}
