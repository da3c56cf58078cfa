use std::cell::RefCell;
use std::rc::Rc;

use super::*;

fn user(email: &str) -> SessionUser {
    SessionUser::from_login(email, "tok")
}

#[test]
fn starts_with_initial_value() {
    let state = SessionState::new(Some(user("a@x.com")));
    assert_eq!(state.get().unwrap().email, "a@x.com");

    let empty = SessionState::new(None);
    assert!(empty.get().is_none());
}

#[test]
fn subscriber_receives_current_value_immediately() {
    let state = SessionState::new(Some(user("a@x.com")));
    let seen = Rc::new(RefCell::new(Vec::new()));

    let seen2 = seen.clone();
    state.subscribe(move |u| {
        seen2.borrow_mut().push(u.map(|u| u.email.clone()));
    });

    assert_eq!(&*seen.borrow(), &[Some("a@x.com".to_owned())]);
}

#[test]
fn set_notifies_all_subscribers() {
    let state = SessionState::new(None);
    let seen = Rc::new(RefCell::new(Vec::new()));

    let seen2 = seen.clone();
    state.subscribe(move |u| seen2.borrow_mut().push(u.map(|u| u.email.clone())));

    state.set(Some(user("b@x.com")));
    state.set(None);

    assert_eq!(
        &*seen.borrow(),
        &[None, Some("b@x.com".to_owned()), None]
    );
}

// The shape used by the app shell to mirror the session into view state:
// a plain capturing closure that clones the value into an external slot.
#[test]
fn plain_closure_mirrors_session_into_external_slot() {
    let state = SessionState::new(Some(user("a@x.com")));
    let slot = Rc::new(RefCell::new(None::<SessionUser>));

    let slot2 = slot.clone();
    state.subscribe(move |u| *slot2.borrow_mut() = u.cloned());
    assert_eq!(
        slot.borrow().as_ref().map(|u| u.email.clone()),
        Some("a@x.com".to_owned())
    );

    state.set(None);
    assert!(slot.borrow().is_none());
}

#[test]
fn observers_notified_in_subscription_order() {
    let state = SessionState::new(None);
    let order = Rc::new(RefCell::new(Vec::new()));

    for tag in ["first", "second", "third"] {
        let order = order.clone();
        state.subscribe(move |_| order.borrow_mut().push(tag));
    }
    order.borrow_mut().clear();

    state.set(Some(user("c@x.com")));
    assert_eq!(&*order.borrow(), &["first", "second", "third"]);
}

#[test]
fn observer_may_read_session_during_notification() {
    let state = SessionState::new(None);
    let snapshot = Rc::new(RefCell::new(None));

    let state2 = state.clone();
    let snapshot2 = snapshot.clone();
    state.subscribe(move |_| {
        *snapshot2.borrow_mut() = state2.get();
    });

    state.set(Some(user("d@x.com")));
    assert_eq!(snapshot.borrow().as_ref().unwrap().email, "d@x.com");
}
