//! The composed session/theme/toast container.
//!
//! Built once at startup from the host's collaborators, initialized
//! explicitly, then handed to `<AuthProvider>`. The three stores are
//! independent; they live together only so consumers have one handle.

#[cfg(test)]
#[path = "context_test.rs"]
mod context_test;

use std::rc::Rc;

use crate::config::AuthConfig;
use crate::host::{DocumentSink, IdentityProvider, KeyValueStore, Navigator, Platform};
use crate::state::session::{LogoutDeps, SessionStore, UserRecord};
use crate::state::theme::{Theme, ThemeStore};
use crate::state::toast::Toaster;

/// Browser services the stores depend on.
#[derive(Clone)]
pub struct Host {
    pub storage: Rc<dyn KeyValueStore>,
    pub document: Rc<dyn DocumentSink>,
    pub navigator: Rc<dyn Navigator>,
    pub platform: Rc<dyn Platform>,
    pub identity: Option<Rc<dyn IdentityProvider>>,
}

impl Host {
    pub fn new(
        storage: Rc<dyn KeyValueStore>,
        document: Rc<dyn DocumentSink>,
        navigator: Rc<dyn Navigator>,
        platform: Rc<dyn Platform>,
    ) -> Self {
        Self { storage, document, navigator, platform, identity: None }
    }

    #[must_use]
    pub fn with_identity(mut self, identity: Rc<dyn IdentityProvider>) -> Self {
        self.identity = Some(identity);
        self
    }

    /// Real browser collaborators. The Google identity client is always
    /// attached; it checks for the `gapi` script itself at logout.
    #[cfg(feature = "hydrate")]
    pub fn browser() -> Self {
        use crate::host::document::HtmlDocument;
        use crate::host::identity::GoogleIdentity;
        use crate::host::navigation::LocationNavigator;
        use crate::host::platform::BrowserPlatform;
        use crate::host::storage::BrowserStorage;

        Self::new(
            Rc::new(BrowserStorage),
            Rc::new(HtmlDocument),
            Rc::new(LocationNavigator),
            Rc::new(BrowserPlatform),
        )
        .with_identity(Rc::new(GoogleIdentity))
    }
}

pub struct AuthContext {
    session: SessionStore,
    theme: ThemeStore,
    toaster: Toaster,
}

impl AuthContext {
    pub fn new(host: Host, config: AuthConfig) -> Self {
        let toaster = Toaster::new(host.platform.clone(), config.toast_duration());
        let theme = ThemeStore::new(
            host.storage.clone(),
            host.document,
            config.keys.theme.clone(),
            config.theme_attribute,
        );
        let session = SessionStore::new(
            host.storage,
            config.keys,
            LogoutDeps {
                toaster: toaster.clone(),
                navigator: host.navigator,
                platform: host.platform,
                identity: host.identity,
                copy: config.logout,
            },
        );
        Self { session, theme, toaster }
    }

    /// Browser bootstrap: console logging, real collaborators, hydrated
    /// stores. Ready to hand to `<AuthProvider>`.
    #[cfg(feature = "hydrate")]
    pub fn browser(config: AuthConfig) -> Self {
        crate::util::logging::init();
        let context = Self::new(Host::browser(), config);
        context.initialize();
        context
    }

    /// Hydrate both stores from storage. Call once, before rendering.
    pub fn initialize(&self) {
        self.session.initialize();
        self.theme.initialize();
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub fn theme(&self) -> &ThemeStore {
        &self.theme
    }

    pub fn toaster(&self) -> &Toaster {
        &self.toaster
    }

    pub fn current_user(&self) -> Option<UserRecord> {
        self.session.current_user()
    }

    pub fn set_user(&self, user: Option<UserRecord>) {
        self.session.set_user(user);
    }

    pub fn logout(&self) {
        self.session.logout();
    }

    pub fn current_theme(&self) -> Theme {
        self.theme.theme()
    }

    pub fn set_theme(&self, theme: Theme) {
        self.theme.set_theme(theme);
    }
}
