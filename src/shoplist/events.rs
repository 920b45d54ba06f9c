//! Change notifications for presentation layers.
//!
//! A client registers a callback with [`Subscribers::subscribe`] and
//! re-renders when it receives [`ListEvent::Changed`], or shows a transient
//! notice on [`ListEvent::ValidationFailed`]. Callbacks run synchronously,
//! in subscription order, after the mutation has been applied.

use crate::error::ValidationError;
use crate::model::Item;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListEvent {
    /// The list changed. Carries the full list in display order.
    Changed { items: Vec<Item> },
    /// An add or edit was rejected; the list is unchanged.
    ValidationFailed {
        error: ValidationError,
        notice: String,
    },
}

pub type Listener = Box<dyn FnMut(&ListEvent)>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

#[derive(Default)]
pub struct Subscribers {
    listeners: Vec<(SubscriptionId, Listener)>,
    last_id: u64,
}

impl Subscribers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, listener: Listener) -> SubscriptionId {
        self.last_id += 1;
        let id = SubscriptionId(self.last_id);
        self.listeners.push((id, listener));
        id
    }

    /// Returns false if the subscription was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        self.listeners.len() != before
    }

    pub fn emit(&mut self, event: &ListEvent) {
        for (_, listener) in self.listeners.iter_mut() {
            listener(event);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl std::fmt::Debug for Subscribers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscribers")
            .field("count", &self.listeners.len())
            .finish()
    }
}
