#[cfg(test)]
#[path = "watch_test.rs"]
mod watch_test;

use std::cell::RefCell;
use std::rc::Rc;

type Listener<T> = Rc<dyn Fn(&T)>;

/// A value plus the callbacks interested in its changes.
///
/// Listeners receive a snapshot taken after the write, so a listener may read
/// the cell again without hitting a borrow conflict. Notification walks a copy
/// of the listener list; anything subscribed during a `set` is first called
/// on the next one.
pub struct Watched<T> {
    value: RefCell<T>,
    listeners: RefCell<Vec<Listener<T>>>,
}

impl<T: Clone> Watched<T> {
    pub fn new(value: T) -> Self {
        Self { value: RefCell::new(value), listeners: RefCell::new(Vec::new()) }
    }

    pub fn get(&self) -> T {
        self.value.borrow().clone()
    }

    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.value.borrow())
    }

    pub fn set(&self, value: T) {
        *self.value.borrow_mut() = value;
        let snapshot = self.get();
        let listeners = self.listeners.borrow().clone();
        for listener in &listeners {
            listener(&snapshot);
        }
    }

    pub fn subscribe(&self, listener: impl Fn(&T) + 'static) {
        self.listeners.borrow_mut().push(Rc::new(listener));
    }
}
