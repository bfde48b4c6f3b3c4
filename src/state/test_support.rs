//! Shared fixtures for store tests.

use std::cell::Cell;
use std::rc::Rc;

use futures::FutureExt;
use futures::future::LocalBoxFuture;

use crate::config::AuthConfig;
use crate::error::AuthError;
use crate::host::{IdentityProvider, ManualPlatform, MemoryDocument, MemoryNavigator, MemoryStorage};
use crate::state::context::{AuthContext, Host};

/// An [`AuthContext`] wired to in-memory collaborators the test can inspect.
pub struct Harness {
    pub storage: MemoryStorage,
    pub document: MemoryDocument,
    pub navigator: MemoryNavigator,
    pub platform: ManualPlatform,
    pub context: AuthContext,
}

impl Harness {
    pub fn new() -> Self {
        Self::over(MemoryStorage::new(), None)
    }

    pub fn with_identity(identity: Rc<dyn IdentityProvider>) -> Self {
        Self::over(MemoryStorage::new(), Some(identity))
    }

    /// Build an uninitialized context over existing storage.
    pub fn over(storage: MemoryStorage, identity: Option<Rc<dyn IdentityProvider>>) -> Self {
        let document = MemoryDocument::new();
        let navigator = MemoryNavigator::new();
        let platform = ManualPlatform::new();
        let mut host = Host::new(
            Rc::new(storage.clone()),
            Rc::new(document.clone()),
            Rc::new(navigator.clone()),
            Rc::new(platform.clone()),
        );
        host.identity = identity;
        let context = AuthContext::new(host, AuthConfig::default());
        Self { storage, document, navigator, platform, context }
    }

    /// Simulate a page reload: fresh collaborators and context over the same
    /// storage, initialized.
    pub fn reload(&self) -> Self {
        let next = Self::over(self.storage.clone(), None);
        next.context.initialize();
        next
    }
}

/// Identity provider that counts sign-out calls and resolves immediately.
pub struct FakeIdentity {
    pub calls: Rc<Cell<usize>>,
    pub fail: bool,
}

impl FakeIdentity {
    pub fn new(fail: bool) -> (Rc<Self>, Rc<Cell<usize>>) {
        let calls = Rc::new(Cell::new(0));
        (Rc::new(Self { calls: calls.clone(), fail }), calls)
    }
}

impl IdentityProvider for FakeIdentity {
    fn name(&self) -> &str {
        "fake"
    }

    fn sign_out(&self) -> LocalBoxFuture<'static, Result<(), AuthError>> {
        let calls = self.calls.clone();
        let fail = self.fail;
        async move {
            calls.set(calls.get() + 1);
            if fail { Err(AuthError::ExternalSignOut("revoked".into())) } else { Ok(()) }
        }
        .boxed_local()
    }
}

/// Identity whose SDK script may not have loaded yet. Like the browser
/// client, it checks for the SDK when signing out, not when built.
pub struct LateIdentity {
    pub loaded: Rc<Cell<bool>>,
    pub sign_outs: Rc<Cell<usize>>,
}

impl LateIdentity {
    pub fn new() -> Rc<Self> {
        Rc::new(Self { loaded: Rc::new(Cell::new(false)), sign_outs: Rc::new(Cell::new(0)) })
    }
}

impl IdentityProvider for LateIdentity {
    fn name(&self) -> &str {
        "late"
    }

    fn sign_out(&self) -> LocalBoxFuture<'static, Result<(), AuthError>> {
        let loaded = self.loaded.clone();
        let sign_outs = self.sign_outs.clone();
        async move {
            if loaded.get() {
                sign_outs.set(sign_outs.get() + 1);
            }
            Ok(())
        }
        .boxed_local()
    }
}
