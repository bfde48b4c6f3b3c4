//! Single transient toast with timed auto-dismiss.
//!
//! State machine: `Hidden -> Visible` on [`Toaster::show`];
//! `Visible -> Hidden` when the dismissal timer fires or on
//! [`Toaster::dismiss`]. A new `show` while visible replaces the content and
//! restarts the dismissal window instead of queueing.
//!
//! TRADE-OFFS
//! ==========
//! Timers are never cancelled (the platform has no handle for that). Each
//! `show` bumps a generation counter and its timer only hides the toast if
//! that generation is still current, so a timer left over from an earlier
//! toast or from a manual close cannot hide a newer toast early.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use crate::host::Platform;
use crate::state::watch::Watched;

/// What the toast renderer shows. Hiding keeps the last title and message.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastState {
    pub visible: bool,
    pub title: String,
    pub message: String,
}

struct ToasterInner {
    state: Watched<ToastState>,
    generation: Cell<u64>,
    duration: Duration,
    platform: Rc<dyn Platform>,
}

impl ToasterInner {
    fn expire(&self, generation: u64) {
        if self.generation.get() != generation {
            return;
        }
        self.hide();
    }

    fn hide(&self) {
        if !self.state.with(|s| s.visible) {
            return;
        }
        let mut next = self.state.get();
        next.visible = false;
        self.state.set(next);
    }
}

/// Notification scheduler. Cheap to clone; clones drive the same toast.
#[derive(Clone)]
pub struct Toaster {
    inner: Rc<ToasterInner>,
}

impl Toaster {
    pub fn new(platform: Rc<dyn Platform>, duration: Duration) -> Self {
        Self {
            inner: Rc::new(ToasterInner {
                state: Watched::new(ToastState::default()),
                generation: Cell::new(0),
                duration,
                platform,
            }),
        }
    }

    pub fn state(&self) -> ToastState {
        self.inner.state.get()
    }

    pub fn is_visible(&self) -> bool {
        self.inner.state.with(|s| s.visible)
    }

    pub fn duration(&self) -> Duration {
        self.inner.duration
    }

    /// Show `title`/`message` and (re)start the dismissal window.
    ///
    /// A toast with neither title nor message is ignored.
    pub fn show(&self, title: impl Into<String>, message: impl Into<String>) {
        let (title, message) = (title.into(), message.into());
        if title.is_empty() && message.is_empty() {
            leptos::logging::warn!("[toast] ignoring toast with no title or message");
            return;
        }

        let generation = self.inner.generation.get().wrapping_add(1);
        self.inner.generation.set(generation);
        self.inner.state.set(ToastState { visible: true, title, message });

        let weak = Rc::downgrade(&self.inner);
        self.inner.platform.set_timeout(
            self.inner.duration,
            Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    inner.expire(generation);
                }
            }),
        );
    }

    /// Manual close from the renderer. The pending timer is left alone; when
    /// it fires the toast is already hidden and nothing changes.
    pub fn dismiss(&self) {
        self.inner.hide();
    }

    pub fn watch(&self, listener: impl Fn(&ToastState) + 'static) {
        self.inner.state.subscribe(listener);
    }
}
