// Change notification for the calculator.
// Callbacks are kept in registration order and removed when their
// Subscription guard is dropped.

use crate::calculator::view::CalculatorView;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

pub type ViewCallback = Rc<dyn Fn(&CalculatorView)>;

#[derive(Default)]
pub struct Subscribers {
    next_id: Cell<u64>,
    callbacks: RefCell<Vec<(u64, ViewCallback)>>,
}

impl Subscribers {
    pub fn add(&self, callback: ViewCallback) -> u64 {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.callbacks.borrow_mut().push((id, callback));
        id
    }

    pub fn remove(&self, id: u64) {
        self.callbacks.borrow_mut().retain(|(existing, _)| *existing != id);
    }

    pub fn len(&self) -> usize {
        self.callbacks.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Call every callback with `view`.
    ///
    /// The list is snapshotted first so callbacks may subscribe, unsubscribe
    /// or edit the calculator while being notified.
    pub fn notify(&self, view: &CalculatorView) {
        let snapshot: Vec<ViewCallback> = self
            .callbacks
            .borrow()
            .iter()
            .map(|(_, callback)| Rc::clone(callback))
            .collect();

        tracing::trace!(subscribers = snapshot.len(), "notifying");
        for callback in snapshot {
            callback(view);
        }
    }
}

/// Guard returned by `Calculator::subscribe`; unsubscribes on drop
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    id: u64,
    subscribers: Weak<Subscribers>,
}

impl Subscription {
    pub(crate) fn new(id: u64, subscribers: Weak<Subscribers>) -> Self {
        Self { id, subscribers }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(subscribers) = self.subscribers.upgrade() {
            subscribers.remove(self.id);
        }
    }
}
