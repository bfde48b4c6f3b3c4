//! Session, theme and toast state.
//!
//! DESIGN
//! ======
//! Each store owns one value and its side effects (persistence, attribute
//! sync, timers). Stores are plain single-threaded Rust; the Leptos layer in
//! `components::auth_provider` mirrors them into signals through `watch`.

pub mod context;
pub mod session;
pub mod theme;
pub mod toast;
pub mod watch;

#[cfg(test)]
pub(crate) mod test_support;
