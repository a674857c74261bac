//! Synchronous change notification.

use std::fmt;
use std::sync::Arc;

use super::Snapshot;

/// One snapshot replacement, as seen by subscribers.
#[derive(Debug, Clone, Copy)]
pub struct Transition<'a> {
    /// Name of the operation that caused it (e.g. `"add_activity"`).
    pub action: &'static str,
    pub previous: &'a Arc<Snapshot>,
    pub current: &'a Arc<Snapshot>,
}

/// Handle returned by [`TravelStore::subscribe`](super::TravelStore::subscribe).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&Transition<'_>) + Send>;

/// Registered listeners, called in registration order.
#[derive(Default)]
pub(crate) struct Subscribers {
    next_id: u64,
    listeners: Vec<(SubscriptionId, Listener)>,
}

impl Subscribers {
    pub(crate) fn add<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&Transition<'_>) + Send + 'static,
    {
        self.next_id += 1;
        let id = SubscriptionId(self.next_id);
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub(crate) fn remove(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    pub(crate) fn len(&self) -> usize {
        self.listeners.len()
    }

    pub(crate) fn notify(&mut self, transition: &Transition<'_>) {
        for (_, listener) in self.listeners.iter_mut() {
            listener(transition);
        }
    }
}

impl fmt::Debug for Subscribers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscribers")
            .field("count", &self.listeners.len())
            .finish()
    }
}
