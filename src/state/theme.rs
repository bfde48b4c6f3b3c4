//! Active color theme, persisted to storage and mirrored onto the document
//! root attribute that the stylesheet keys off.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::host::{DocumentSink, KeyValueStore};
use crate::state::watch::Watched;

/// Available color schemes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub const ALL: [Theme; 2] = [Theme::Light, Theme::Dark];

    /// The string written to storage and to the root attribute.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme: {0:?}")]
pub struct UnknownTheme(pub String);

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Theme::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownTheme(s.to_owned()))
    }
}

pub struct ThemeStore {
    storage: Rc<dyn KeyValueStore>,
    document: Rc<dyn DocumentSink>,
    key: String,
    attribute: String,
    theme: Watched<Theme>,
}

impl ThemeStore {
    pub fn new(
        storage: Rc<dyn KeyValueStore>,
        document: Rc<dyn DocumentSink>,
        key: impl Into<String>,
        attribute: impl Into<String>,
    ) -> Self {
        Self {
            storage,
            document,
            key: key.into(),
            attribute: attribute.into(),
            theme: Watched::new(Theme::default()),
        }
    }

    /// Load the stored theme and apply it, so the attribute and the slot are
    /// in sync from the first frame even when nothing was stored.
    pub fn initialize(&self) -> Theme {
        let theme = self.load();
        self.set_theme(theme);
        theme
    }

    pub fn theme(&self) -> Theme {
        self.theme.get()
    }

    /// Replace the theme, then persist it and update the root attribute.
    /// Both side effects run on every call.
    pub fn set_theme(&self, theme: Theme) {
        self.theme.set(theme);
        if let Err(e) = self.storage.set(&self.key, theme.as_str()) {
            leptos::logging::warn!("[theme] {e}");
        }
        self.document.set_root_attribute(&self.attribute, theme.as_str());
    }

    pub fn toggle(&self) -> Theme {
        let next = self.theme().toggled();
        self.set_theme(next);
        next
    }

    pub fn watch(&self, listener: impl Fn(&Theme) + 'static) {
        self.theme.subscribe(listener);
    }

    fn load(&self) -> Theme {
        match self.storage.get(&self.key) {
            Ok(Some(raw)) if !raw.is_empty() => raw.parse().unwrap_or_else(|e| {
                leptos::logging::warn!("[theme] {e}; falling back to {}", Theme::default());
                Theme::default()
            }),
            Ok(_) => Theme::default(),
            Err(e) => {
                leptos::logging::warn!("[theme] {e}");
                Theme::default()
            }
        }
    }
}
