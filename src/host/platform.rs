//! Event-loop services: one-shot timers and local task spawning.
//!
//! ARCHITECTURE
//! ============
//! Everything runs on one thread. Timers and spawned futures are callbacks
//! interleaved on the same loop, so state is shared through `Rc`/`RefCell`
//! and nothing here is `Send`.
//!
//! [`ManualPlatform`] replaces wall-clock time with a virtual clock that only
//! moves when [`ManualPlatform::advance`] is called. Tests use it to observe
//! the exact instant a toast hides; server rendering uses it so nothing is
//! ever scheduled on a real timer.

#[cfg(test)]
#[path = "platform_test.rs"]
mod platform_test;

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use futures::future::LocalBoxFuture;

pub trait Platform {
    /// Run `callback` once after `delay`. There is no cancellation handle;
    /// callers that may be superseded must check ownership when they fire.
    fn set_timeout(&self, delay: Duration, callback: Box<dyn FnOnce()>);

    /// Run `task` on the local executor without waiting for it.
    fn spawn_local(&self, task: LocalBoxFuture<'static, ()>);
}

struct PendingTimer {
    due: Duration,
    seq: u64,
    callback: Box<dyn FnOnce()>,
}

#[derive(Default)]
struct ManualInner {
    now: Cell<Duration>,
    next_seq: Cell<u64>,
    timers: RefCell<Vec<PendingTimer>>,
    tasks: RefCell<Vec<LocalBoxFuture<'static, ()>>>,
}

/// Deterministic platform driven by hand.
#[derive(Clone, Default)]
pub struct ManualPlatform {
    inner: Rc<ManualInner>,
}

impl ManualPlatform {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Virtual time elapsed since construction.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.inner.now.get()
    }

    #[must_use]
    pub fn pending_timers(&self) -> usize {
        self.inner.timers.borrow().len()
    }

    #[must_use]
    pub fn pending_tasks(&self) -> usize {
        self.inner.tasks.borrow().len()
    }

    /// Move the clock forward by `by`, firing every timer that falls due on
    /// the way in (due time, registration order) order. Timers scheduled by a
    /// firing callback run too if they fall inside the window.
    pub fn advance(&self, by: Duration) {
        let target = self.now() + by;
        while let Some(timer) = self.take_next_due(target) {
            self.inner.now.set(timer.due);
            (timer.callback)();
        }
        self.inner.now.set(target);
    }

    /// Drive every spawned task to completion, including tasks spawned while
    /// draining. Returns how many ran.
    pub fn run_until_stalled(&self) -> usize {
        let mut ran = 0;
        loop {
            let batch: Vec<_> = self.inner.tasks.borrow_mut().drain(..).collect();
            if batch.is_empty() {
                return ran;
            }
            for task in batch {
                futures::executor::block_on(task);
                ran += 1;
            }
        }
    }

    fn take_next_due(&self, target: Duration) -> Option<PendingTimer> {
        let mut timers = self.inner.timers.borrow_mut();
        let idx = timers
            .iter()
            .enumerate()
            .filter(|(_, t)| t.due <= target)
            .min_by_key(|(_, t)| (t.due, t.seq))
            .map(|(i, _)| i)?;
        Some(timers.swap_remove(idx))
    }
}

impl Platform for ManualPlatform {
    fn set_timeout(&self, delay: Duration, callback: Box<dyn FnOnce()>) {
        let seq = self.inner.next_seq.get();
        self.inner.next_seq.set(seq + 1);
        self.inner.timers.borrow_mut().push(PendingTimer { due: self.now() + delay, seq, callback });
    }

    fn spawn_local(&self, task: LocalBoxFuture<'static, ()>) {
        self.inner.tasks.borrow_mut().push(task);
    }
}

/// Browser event loop: `setTimeout` through `gloo-timers`, futures through
/// the Leptos local executor.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserPlatform;

#[cfg(feature = "hydrate")]
impl Platform for BrowserPlatform {
    fn set_timeout(&self, delay: Duration, callback: Box<dyn FnOnce()>) {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        gloo_timers::callback::Timeout::new(millis, callback).forget();
    }

    fn spawn_local(&self, task: LocalBoxFuture<'static, ()>) {
        leptos::task::spawn_local(task);
    }
}
