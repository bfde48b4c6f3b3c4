//! Leptos components exposing the stores to the view tree.

pub mod auth_provider;
pub mod toast;
