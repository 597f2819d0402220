//! Listener registry and the unsubscribe capability

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

/// A zero-argument change callback
pub(crate) type Listener = Rc<dyn Fn()>;

/// Registration handle, unique for the lifetime of a registry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ListenerId(u64);

/// Ordered set of active listeners.
///
/// Listeners are kept in registration order. The same callback registered
/// twice gets two independent entries.
#[derive(Default)]
pub(crate) struct ListenerRegistry {
    next_id: u64,
    entries: Vec<(ListenerId, Listener)>,
}

impl ListenerRegistry {
    pub fn insert(&mut self, listener: Listener) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, listener));
        id
    }

    /// Returns `false` if `id` was already removed
    pub fn remove(&mut self, id: ListenerId) -> bool {
        match self.entries.iter().position(|(entry, _)| *entry == id) {
            Some(index) => {
                self.entries.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, id: ListenerId) -> bool {
        self.entries.iter().any(|(entry, _)| *entry == id)
    }

    /// The listeners to notify for one dispatch
    pub fn snapshot(&self) -> Vec<Listener> {
        self.entries
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Capability returned by `Store::subscribe`.
///
/// Calling it removes exactly the registration it was created for. Further
/// calls are no-ops, and so is calling it after the store is gone. Dropping
/// it without calling keeps the listener registered.
#[must_use = "dropping the handle makes the listener impossible to remove"]
pub struct Unsubscribe {
    registry: Weak<RefCell<ListenerRegistry>>,
    id: ListenerId,
}

impl Unsubscribe {
    pub(crate) fn new(registry: Weak<RefCell<ListenerRegistry>>, id: ListenerId) -> Self {
        Self { registry, id }
    }

    pub fn call(&self) {
        if let Some(registry) = self.registry.upgrade() {
            if registry.borrow_mut().remove(self.id) {
                log::trace!("Listener {:?} unsubscribed", self.id);
            }
        }
    }

    /// Whether the listener is still registered
    pub fn is_subscribed(&self) -> bool {
        self.registry
            .upgrade()
            .is_some_and(|registry| registry.borrow().contains(self.id))
    }
}

impl fmt::Debug for Unsubscribe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Unsubscribe")
            .field("id", &self.id)
            .field("subscribed", &self.is_subscribed())
            .finish()
    }
}
