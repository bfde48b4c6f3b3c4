use super::*;

use std::rc::Rc;

#[test]
fn watched_get_returns_initial_value() {
    let w = Watched::new(7);
    assert_eq!(w.get(), 7);
}

#[test]
fn watched_set_replaces_value() {
    let w = Watched::new(String::from("light"));
    w.set("dark".to_owned());
    assert_eq!(w.get(), "dark");
    assert_eq!(w.with(String::len), 4);
}

#[test]
fn watched_notifies_every_listener_with_new_value() {
    let w = Watched::new(0);
    let seen = Rc::new(RefCell::new(Vec::new()));
    for _ in 0..2 {
        let seen = seen.clone();
        w.subscribe(move |v| seen.borrow_mut().push(*v));
    }

    w.set(5);
    assert_eq!(*seen.borrow(), vec![5, 5]);
}

#[test]
fn watched_listener_can_read_back() {
    let w = Rc::new(Watched::new(1));
    let seen = Rc::new(RefCell::new(None));
    let (inner, out) = (Rc::downgrade(&w), seen.clone());
    w.subscribe(move |_| {
        if let Some(w) = inner.upgrade() {
            *out.borrow_mut() = Some(w.get());
        }
    });

    w.set(2);
    assert_eq!(*seen.borrow(), Some(2));
}

#[test]
fn watched_listener_can_subscribe_during_notify() {
    let w = Rc::new(Watched::new(0));
    let seen = Rc::new(RefCell::new(Vec::new()));
    let (inner, out) = (Rc::downgrade(&w), seen.clone());
    w.subscribe(move |v| {
        if *v == 1
            && let Some(w) = inner.upgrade()
        {
            let out = out.clone();
            w.subscribe(move |v| out.borrow_mut().push(*v));
        }
    });

    w.set(1);
    assert!(seen.borrow().is_empty());
    w.set(2);
    assert_eq!(*seen.borrow(), vec![2]);
}
