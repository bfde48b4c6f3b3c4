//! Storage keys, timings and logout copy.
//!
//! Defaults match what the rest of the application already writes to
//! localStorage. Hosts that need different keys pass a JSON document to
//! [`AuthConfig::from_json`]; any field left out keeps its default.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

use serde::Deserialize;

use crate::error::AuthError;

pub const DEFAULT_USER_KEY: &str = "userData";
pub const DEFAULT_THEME_KEY: &str = "theme";
pub const DEFAULT_TOKEN_KEY: &str = "token";
pub const DEFAULT_THEME_ATTRIBUTE: &str = "data-theme";
pub const DEFAULT_TOAST_DURATION_MS: u64 = 3000;
pub const DEFAULT_LOGOUT_REDIRECT: &str = "/";
pub const DEFAULT_LOGOUT_TITLE: &str = "Session closed";
pub const DEFAULT_LOGOUT_MESSAGE: &str = "You have logged out successfully";

/// Durable storage slot names. Each store owns a disjoint key.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StorageKeys {
    pub user: String,
    pub theme: String,
    pub token: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            user: DEFAULT_USER_KEY.to_owned(),
            theme: DEFAULT_THEME_KEY.to_owned(),
            token: DEFAULT_TOKEN_KEY.to_owned(),
        }
    }
}

/// Where logout lands and what it tells the user.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LogoutConfig {
    pub redirect_to: String,
    pub toast_title: String,
    pub toast_message: String,
}

impl Default for LogoutConfig {
    fn default() -> Self {
        Self {
            redirect_to: DEFAULT_LOGOUT_REDIRECT.to_owned(),
            toast_title: DEFAULT_LOGOUT_TITLE.to_owned(),
            toast_message: DEFAULT_LOGOUT_MESSAGE.to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    pub keys: StorageKeys,
    pub theme_attribute: String,
    pub toast_duration_ms: u64,
    pub logout: LogoutConfig,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            keys: StorageKeys::default(),
            theme_attribute: DEFAULT_THEME_ATTRIBUTE.to_owned(),
            toast_duration_ms: DEFAULT_TOAST_DURATION_MS,
            logout: LogoutConfig::default(),
        }
    }
}

impl AuthConfig {
    /// Parse a (possibly partial) JSON config document.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Config`] if the document is not valid JSON or a
    /// field has the wrong type.
    pub fn from_json(raw: &str) -> Result<Self, AuthError> {
        serde_json::from_str(raw).map_err(|e| AuthError::Config(e.to_string()))
    }

    #[must_use]
    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_duration_ms)
    }
}
