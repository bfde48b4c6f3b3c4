//! Who is logged in.
//!
//! The session store is the single source of truth for the current
//! [`UserRecord`]. It hydrates from durable storage, writes every change
//! back, and runs the logout protocol.
//!
//! ERROR HANDLING
//! ==============
//! Reads fail open: an unreadable or malformed slot yields "logged out"
//! rather than a half-parsed identity. Writes that fail are logged and the
//! in-memory value stays authoritative until the page is reloaded.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::rc::Rc;

use futures::FutureExt;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::config::{LogoutConfig, StorageKeys};
use crate::error::AuthError;
use crate::host::{IdentityProvider, KeyValueStore, Navigator, Platform};
use crate::state::toast::Toaster;
use crate::state::watch::Watched;

/// The signed-in identity, kept as opaque structured data so applications
/// can store whatever shape their backend returns.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserRecord(serde_json::Value);

impl UserRecord {
    pub fn new(value: serde_json::Value) -> Self {
        Self(value)
    }

    /// # Errors
    ///
    /// Returns the serializer error if `value` cannot be represented as JSON.
    pub fn from_typed<T: Serialize>(value: &T) -> Result<Self, serde_json::Error> {
        serde_json::to_value(value).map(Self)
    }

    /// # Errors
    ///
    /// Returns the deserializer error if the record does not have `T`'s shape.
    pub fn to_typed<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        T::deserialize(&self.0)
    }

    pub fn field(&self, name: &str) -> Option<&serde_json::Value> {
        self.0.get(name)
    }

    pub fn is_null(&self) -> bool {
        self.0.is_null()
    }

    pub fn as_value(&self) -> &serde_json::Value {
        &self.0
    }
}

impl From<serde_json::Value> for UserRecord {
    fn from(value: serde_json::Value) -> Self {
        Self(value)
    }
}

/// Collaborators the logout protocol reaches beyond storage.
pub(crate) struct LogoutDeps {
    pub toaster: Toaster,
    pub navigator: Rc<dyn Navigator>,
    pub platform: Rc<dyn Platform>,
    pub identity: Option<Rc<dyn IdentityProvider>>,
    pub copy: LogoutConfig,
}

pub struct SessionStore {
    storage: Rc<dyn KeyValueStore>,
    keys: StorageKeys,
    user: Watched<Option<UserRecord>>,
    logout: LogoutDeps,
}

impl SessionStore {
    pub(crate) fn new(storage: Rc<dyn KeyValueStore>, keys: StorageKeys, logout: LogoutDeps) -> Self {
        Self { storage, keys, user: Watched::new(None), logout }
    }

    /// Hydrate from the user slot. Never fails: any read or parse error is
    /// logged and the session starts logged out. A malformed slot is removed
    /// so the next reload does not trip over it again.
    pub fn initialize(&self) -> Option<UserRecord> {
        let user = match self.load() {
            Ok(user) => user,
            Err(e @ AuthError::Deserialization { .. }) => {
                leptos::logging::error!("[session] {e}");
                self.persist(None);
                None
            }
            Err(e) => {
                leptos::logging::error!("[session] {e}");
                None
            }
        };
        self.user.set(user.clone());
        user
    }

    pub fn current_user(&self) -> Option<UserRecord> {
        self.user.get()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.with(Option::is_some)
    }

    /// Replace the current user and write it through to storage.
    /// `None` removes the slot. A JSON `null` record counts as `None`, since
    /// it would read back as logged out after a reload.
    pub fn set_user(&self, user: Option<UserRecord>) {
        let user = user.filter(|u| !u.is_null());
        self.user.set(user.clone());
        self.persist(user.as_ref());
    }

    /// End the session. Steps run in order and none is skipped because a
    /// later one fails:
    ///
    /// 1. clear the user (memory and slot)
    /// 2. remove the credential token slot
    /// 3. show the "session closed" toast
    /// 4. spawn the identity provider sign-out, if one was injected
    /// 5. navigate to the entry route
    pub fn logout(&self) {
        self.set_user(None);

        if let Err(e) = self.storage.remove(&self.keys.token) {
            leptos::logging::warn!("[session] {e}");
        }

        let copy = &self.logout.copy;
        self.logout.toaster.show(copy.toast_title.as_str(), copy.toast_message.as_str());

        if let Some(identity) = &self.logout.identity {
            let name = identity.name().to_owned();
            let sign_out = identity.sign_out();
            self.logout.platform.spawn_local(
                async move {
                    match sign_out.await {
                        Ok(()) => {
                            leptos::logging::log!("[session] signed out of {name}");
                        }
                        Err(e) => {
                            leptos::logging::warn!("[session] {name}: {e}");
                        }
                    }
                }
                .boxed_local(),
            );
        }

        self.logout.navigator.navigate(&copy.redirect_to);
    }

    pub fn watch(&self, listener: impl Fn(&Option<UserRecord>) + 'static) {
        self.user.subscribe(listener);
    }

    fn load(&self) -> Result<Option<UserRecord>, AuthError> {
        let key = &self.keys.user;
        match self.storage.get(key)? {
            Some(raw) if !raw.is_empty() => serde_json::from_str::<Option<UserRecord>>(&raw)
                .map_err(|source| AuthError::Deserialization { key: key.clone(), source }),
            _ => Ok(None),
        }
    }

    fn persist(&self, user: Option<&UserRecord>) {
        let key = &self.keys.user;
        let result = match user {
            Some(user) => serde_json::to_string(user)
                .map_err(|e| AuthError::write(key, e))
                .and_then(|raw| self.storage.set(key, &raw)),
            None => self.storage.remove(key),
        };
        if let Err(e) = result {
            leptos::logging::warn!("[session] {e}");
        }
    }
}
