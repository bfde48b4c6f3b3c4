//! Host collaborators injected into the stores.
//!
//! DESIGN
//! ======
//! Every browser touchpoint is a small trait so the stores run unchanged in
//! the browser, during server rendering, and in native tests. Browser
//! implementations are gated behind the `hydrate` feature; in-memory ones are
//! always available.

pub mod document;
pub mod identity;
pub mod navigation;
pub mod platform;
pub mod storage;

pub use document::{DocumentSink, MemoryDocument};
pub use identity::IdentityProvider;
pub use navigation::{MemoryNavigator, Navigator, RouterNavigator};
pub use platform::{ManualPlatform, Platform};
pub use storage::{KeyValueStore, MemoryStorage};
