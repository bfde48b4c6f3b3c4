//! `<AuthProvider>` and the [`AuthHandle`] it places in context.
//!
//! DESIGN
//! ======
//! The stores are single-threaded and hold `Rc`s, which Leptos context cannot
//! carry directly. The provider parks the [`AuthContext`] in a local
//! `StoredValue` and mirrors user, theme and toast into `RwSignal`s through
//! the stores' watchers, so components track changes reactively while the
//! stores remain the single source of truth.

#[cfg(test)]
#[path = "auth_provider_test.rs"]
mod auth_provider_test;

use leptos::prelude::*;

use crate::components::toast::Toast;
use crate::state::context::AuthContext;
use crate::state::session::UserRecord;
use crate::state::theme::Theme;
use crate::state::toast::ToastState;

/// Consumer-facing capabilities: current user, logout, theme and toast.
#[derive(Clone, Copy)]
pub struct AuthHandle {
    context: StoredValue<AuthContext, LocalStorage>,
    user: RwSignal<Option<UserRecord>>,
    theme: RwSignal<Theme>,
    toast: RwSignal<ToastState>,
}

impl AuthHandle {
    /// Wrap an initialized context. Must run inside a reactive owner.
    pub fn new(context: AuthContext) -> Self {
        let user = RwSignal::new(context.current_user());
        let theme = RwSignal::new(context.current_theme());
        let toast = RwSignal::new(context.toaster().state());

        context.session().watch(move |u| user.set(u.clone()));
        context.theme().watch(move |t| theme.set(*t));
        context.toaster().watch(move |s| toast.set(s.clone()));

        Self { context: StoredValue::new_local(context), user, theme, toast }
    }

    pub fn current_user(&self) -> Option<UserRecord> {
        self.user.get()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.with(Option::is_some)
    }

    pub fn set_user(&self, user: Option<UserRecord>) {
        self.context.with_value(|c| c.set_user(user));
    }

    pub fn logout(&self) {
        self.context.with_value(AuthContext::logout);
    }

    pub fn theme(&self) -> Theme {
        self.theme.get()
    }

    pub fn set_theme(&self, theme: Theme) {
        self.context.with_value(|c| c.set_theme(theme));
    }

    pub fn toggle_theme(&self) {
        self.context.with_value(|c| {
            c.theme().toggle();
        });
    }

    pub fn toast(&self) -> ToastState {
        self.toast.get()
    }

    pub fn show_toast(&self, title: &str, message: &str) {
        self.context.with_value(|c| c.toaster().show(title, message));
    }

    pub fn dismiss_toast(&self) {
        self.context.with_value(|c| c.toaster().dismiss());
    }
}

/// Provide an [`AuthHandle`] to `children` and render the toast ahead of
/// them. `context` should already be initialized.
#[component]
pub fn AuthProvider(context: AuthContext, children: Children) -> impl IntoView {
    provide_context(AuthHandle::new(context));

    view! {
        <Toast/>
        {children()}
    }
}

/// The handle provided by the nearest `<AuthProvider>`.
///
/// # Panics
///
/// Panics if called outside an `<AuthProvider>`.
pub fn use_auth() -> AuthHandle {
    expect_context::<AuthHandle>()
}
