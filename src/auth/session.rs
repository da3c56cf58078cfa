//! Observable holder for the current authenticated operator.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::RefCell;
use std::rc::Rc;

use crate::net::types::SessionUser;

type Observer = Rc<dyn Fn(Option<&SessionUser>)>;

/// A single `Option<SessionUser>` slot with replay-to-new-subscribers
/// semantics: a new observer immediately receives the current value, then
/// every subsequent change, synchronously and in subscription order.
///
/// Single-threaded by construction (the wasm event loop serializes all
/// access), so interior mutability via `Rc<RefCell<..>>` needs no locking.
/// Only the auth gateway writes; everything else reads or subscribes.
#[derive(Clone, Default)]
pub struct SessionState {
    inner: Rc<RefCell<Inner>>,
}

#[derive(Default)]
struct Inner {
    current: Option<SessionUser>,
    observers: Vec<Observer>,
}

impl SessionState {
    pub fn new(initial: Option<SessionUser>) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                current: initial,
                observers: Vec::new(),
            })),
        }
    }

    /// Current value of the slot.
    pub fn get(&self) -> Option<SessionUser> {
        self.inner.borrow().current.clone()
    }

    /// Register an observer. It is invoked immediately with the current
    /// value, then on every `set`.
    pub fn subscribe(&self, observer: impl Fn(Option<&SessionUser>) + 'static) {
        let observer: Observer = Rc::new(observer);
        let current = self.inner.borrow().current.clone();
        observer(current.as_ref());
        self.inner.borrow_mut().observers.push(observer);
    }

    /// Replace the value and notify all observers in subscription order.
    /// The borrow is released before notifying so observers may read the
    /// session (or subscribe) reentrantly.
    pub(crate) fn set(&self, user: Option<SessionUser>) {
        let observers = {
            let mut inner = self.inner.borrow_mut();
            inner.current.clone_from(&user);
            inner.observers.clone()
        };
        for observer in observers {
            observer(user.as_ref());
        }
    }
}
