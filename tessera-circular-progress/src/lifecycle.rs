//! Host lifecycle notifications.
//!
//! ## Usage
//!
//! The host owns a [`LifecycleHub`] and emits events into it when a control is
//! about to move in the view hierarchy or when the application returns to the
//! foreground. Each view holds a [`LifecycleSubscription`]; dropping it (or
//! calling [`LifecycleSubscription::cancel`]) unregisters the view. There is
//! no process-wide registry.

use std::{
    collections::VecDeque,
    sync::{Arc, Weak},
};

use parking_lot::Mutex;
use tracing::trace;

/// An event the host delivers to subscribed controls.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LifecycleEvent {
    /// The control is about to be attached to or detached from a container.
    WillMoveToSuperview,
    /// The control is about to be attached to or detached from a window.
    WillMoveToWindow,
    /// The application is about to become visible again.
    WillEnterForeground,
}

type Mailbox = Mutex<VecDeque<LifecycleEvent>>;

/// Fan-out point for lifecycle events, owned by the host.
#[derive(Clone, Default)]
pub struct LifecycleHub {
    subscribers: Arc<Mutex<Vec<Weak<Mailbox>>>>,
}

impl LifecycleHub {
    /// Creates a hub with no subscribers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new subscriber.
    pub fn subscribe(&self) -> LifecycleSubscription {
        let mailbox = Arc::new(Mutex::new(VecDeque::new()));
        let mut subscribers = self.subscribers.lock();
        subscribers.retain(|weak| weak.strong_count() > 0);
        subscribers.push(Arc::downgrade(&mailbox));
        LifecycleSubscription { mailbox }
    }

    /// Queues `event` for every live subscriber and returns how many received it.
    pub fn emit(&self, event: LifecycleEvent) -> usize {
        let mut subscribers = self.subscribers.lock();
        subscribers.retain(|weak| weak.strong_count() > 0);

        let mut delivered = 0;
        for mailbox in subscribers.iter().filter_map(Weak::upgrade) {
            mailbox.lock().push_back(event);
            delivered += 1;
        }
        trace!(?event, delivered, "lifecycle event emitted");
        delivered
    }

    /// Number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers
            .lock()
            .iter()
            .filter(|weak| weak.strong_count() > 0)
            .count()
    }
}

/// A registration with a [`LifecycleHub`]; released on drop.
pub struct LifecycleSubscription {
    mailbox: Arc<Mailbox>,
}

impl LifecycleSubscription {
    /// Takes every event queued since the last call, oldest first.
    pub fn drain(&self) -> Vec<LifecycleEvent> {
        self.mailbox.lock().drain(..).collect()
    }

    /// Whether events are waiting.
    pub fn has_pending(&self) -> bool {
        !self.mailbox.lock().is_empty()
    }

    /// Unregisters from the hub.
    pub fn cancel(self) {}
}

impl std::fmt::Debug for LifecycleSubscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LifecycleSubscription")
            .field("pending", &self.mailbox.lock().len())
            .finish()
    }
}
