//! Navigation sink for the end of a session.
//!
//! Logout finishes by asking a [`Navigator`] to go to the entry route. In the
//! browser that is either a full document load ([`LocationNavigator`]) or a
//! client-side route change ([`RouterNavigator`]); tests record the request.

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

use std::cell::RefCell;
use std::rc::Rc;

use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

pub trait Navigator {
    fn navigate(&self, path: &str);
}

impl<F: Fn(&str)> Navigator for F {
    fn navigate(&self, path: &str) {
        self(path);
    }
}

/// Records every navigation request in order.
#[derive(Clone, Debug, Default)]
pub struct MemoryNavigator {
    history: Rc<RefCell<Vec<String>>>,
}

impl MemoryNavigator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn history(&self) -> Vec<String> {
        self.history.borrow().clone()
    }

    #[must_use]
    pub fn last(&self) -> Option<String> {
        self.history.borrow().last().cloned()
    }
}

impl Navigator for MemoryNavigator {
    fn navigate(&self, path: &str) {
        self.history.borrow_mut().push(path.to_owned());
    }
}

/// Delivers the session-end redirect to the Leptos router.
///
/// Must be constructed inside a `<Router>`, since it captures
/// `use_navigate()` from the reactive context.
#[derive(Clone)]
pub struct RouterNavigator {
    navigate: Rc<dyn Fn(&str)>,
}

impl RouterNavigator {
    pub fn new() -> Self {
        let navigate = use_navigate();
        Self {
            navigate: Rc::new(move |path: &str| {
                navigate(path, NavigateOptions { replace: true, ..NavigateOptions::default() });
            }),
        }
    }
}

impl Default for RouterNavigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator for RouterNavigator {
    fn navigate(&self, path: &str) {
        (self.navigate)(path);
    }
}

/// Full-document navigation through `window.location`. Discards all
/// in-memory state of the current page.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct LocationNavigator;

#[cfg(feature = "hydrate")]
impl Navigator for LocationNavigator {
    fn navigate(&self, path: &str) {
        let Some(window) = web_sys::window() else {
            leptos::logging::warn!("[session] no window; cannot navigate to {path}");
            return;
        };
        if let Err(e) = window.location().set_href(path) {
            leptos::logging::error!("[session] navigation to {path} failed: {e:?}");
        }
    }
}
