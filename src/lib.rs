//! # auth-provider
//!
//! Session, theme and toast state for a Leptos + WASM frontend.
//!
//! The crate owns "who is logged in", the active color theme, and a single
//! auto-dismissing toast. All three are hydrated from durable storage by an
//! explicit [`AuthContext`] built once at startup, then handed to the
//! [`AuthProvider`] component so pages read them through [`use_auth`].
//!
//! Browser access (localStorage, `<html>` attributes, timers, the Google
//! identity SDK) sits behind the traits in [`host`], with in-memory
//! implementations for tests and server rendering.

pub mod components;
pub mod config;
pub mod error;
pub mod host;
pub mod state;
pub mod util;

pub use components::auth_provider::{AuthHandle, AuthProvider, use_auth};
pub use config::AuthConfig;
pub use error::AuthError;
pub use state::context::{AuthContext, Host};
pub use state::session::UserRecord;
pub use state::theme::Theme;
pub use state::toast::ToastState;
