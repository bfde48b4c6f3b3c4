//! Attribute sink on the document root (`<html>`), used to drive CSS-level
//! theme switching.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

pub trait DocumentSink {
    fn set_root_attribute(&self, name: &str, value: &str);
}

/// Records attributes instead of touching a DOM.
#[derive(Clone, Debug, Default)]
pub struct MemoryDocument {
    attributes: Rc<RefCell<HashMap<String, String>>>,
    writes: Rc<Cell<usize>>,
}

impl MemoryDocument {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<String> {
        self.attributes.borrow().get(name).cloned()
    }

    /// Total number of attribute writes, including repeated values.
    #[must_use]
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }
}

impl DocumentSink for MemoryDocument {
    fn set_root_attribute(&self, name: &str, value: &str) {
        self.attributes.borrow_mut().insert(name.to_owned(), value.to_owned());
        self.writes.set(self.writes.get() + 1);
    }
}

/// The real `<html>` element.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct HtmlDocument;

#[cfg(feature = "hydrate")]
impl DocumentSink for HtmlDocument {
    fn set_root_attribute(&self, name: &str, value: &str) {
        let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        else {
            leptos::logging::warn!("[theme] no document element; skipping {name}");
            return;
        };
        if let Err(e) = el.set_attribute(name, value) {
            leptos::logging::warn!("[theme] failed to set {name}: {e:?}");
        }
    }
}
