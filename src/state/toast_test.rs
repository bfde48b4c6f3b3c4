use super::*;

use std::cell::RefCell;

use crate::host::ManualPlatform;

const DURATION: Duration = Duration::from_millis(3000);

fn toaster() -> (Toaster, ManualPlatform) {
    let platform = ManualPlatform::new();
    (Toaster::new(Rc::new(platform.clone()), DURATION), platform)
}

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

// =============================================================
// Initial state
// =============================================================

#[test]
fn toast_starts_hidden_and_empty() {
    let (toaster, _) = toaster();
    assert_eq!(toaster.state(), ToastState::default());
    assert!(!toaster.is_visible());
}

// =============================================================
// show / auto-dismiss
// =============================================================

#[test]
fn show_is_visible_immediately() {
    let (toaster, _) = toaster();
    toaster.show("A", "B");
    assert_eq!(
        toaster.state(),
        ToastState { visible: true, title: "A".into(), message: "B".into() }
    );
}

#[test]
fn show_stays_visible_until_duration_elapses() {
    let (toaster, platform) = toaster();
    toaster.show("A", "B");

    platform.advance(ms(2999));
    assert!(toaster.is_visible());

    platform.advance(ms(1));
    assert!(!toaster.is_visible());
}

#[test]
fn auto_dismiss_keeps_title_and_message() {
    let (toaster, platform) = toaster();
    toaster.show("A", "B");
    platform.advance(DURATION);

    let state = toaster.state();
    assert!(!state.visible);
    assert_eq!(state.title, "A");
    assert_eq!(state.message, "B");
}

#[test]
fn show_with_no_content_is_ignored() {
    let (toaster, platform) = toaster();
    toaster.show("", "");
    assert!(!toaster.is_visible());
    assert_eq!(platform.pending_timers(), 0);
}

#[test]
fn show_with_only_message_is_shown() {
    let (toaster, _) = toaster();
    toaster.show("", "Saved");
    assert!(toaster.is_visible());
}

// =============================================================
// Replace-and-restart
// =============================================================

#[test]
fn second_show_replaces_content() {
    let (toaster, _) = toaster();
    toaster.show("A", "B");
    toaster.show("C", "D");

    let state = toaster.state();
    assert!(state.visible);
    assert_eq!(state.title, "C");
    assert_eq!(state.message, "D");
}

#[test]
fn second_show_restarts_dismissal_window() {
    let (toaster, platform) = toaster();
    toaster.show("A", "B");
    platform.advance(ms(2000));
    toaster.show("C", "D");

    // First timer fires at 3000 but belongs to a stale generation.
    platform.advance(ms(1000));
    assert!(toaster.is_visible());
    assert_eq!(toaster.state().title, "C");

    platform.advance(ms(1999));
    assert!(toaster.is_visible());
    platform.advance(ms(1));
    assert!(!toaster.is_visible());
    assert_eq!(toaster.state().title, "C");
}

#[test]
fn stale_timer_after_manual_close_does_not_hide_newer_toast() {
    let (toaster, platform) = toaster();
    toaster.show("A", "B");
    platform.advance(ms(500));
    toaster.dismiss();
    platform.advance(ms(500));
    toaster.show("C", "D");

    // "A" timer due at 3000; "C" timer due at 4000.
    platform.advance(ms(2000));
    assert!(toaster.is_visible());
    platform.advance(ms(1000));
    assert!(!toaster.is_visible());
}

// =============================================================
// Manual dismiss
// =============================================================

#[test]
fn dismiss_hides_before_timer() {
    let (toaster, platform) = toaster();
    toaster.show("A", "B");
    toaster.dismiss();

    assert!(!toaster.is_visible());
    assert_eq!(toaster.state().title, "A");
    assert_eq!(platform.pending_timers(), 1);

    platform.advance(DURATION);
    assert!(!toaster.is_visible());
}

#[test]
fn dismiss_when_hidden_does_not_notify() {
    let (toaster, _) = toaster();
    let calls = Rc::new(Cell::new(0));
    let c = calls.clone();
    toaster.watch(move |_| c.set(c.get() + 1));

    toaster.dismiss();
    assert_eq!(calls.get(), 0);
}

// =============================================================
// Watchers
// =============================================================

#[test]
fn watchers_see_show_then_hide() {
    let (toaster, platform) = toaster();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let s = seen.clone();
    toaster.watch(move |state| s.borrow_mut().push(state.visible));

    toaster.show("A", "B");
    platform.advance(DURATION);
    assert_eq!(*seen.borrow(), vec![true, false]);
}

#[test]
fn dropped_toaster_timer_is_harmless() {
    let (toaster, platform) = toaster();
    toaster.show("A", "B");
    drop(toaster);

    platform.advance(DURATION);
    assert_eq!(platform.pending_timers(), 0);
}
