//! Console logging setup for the browser build.
//!
//! Store code logs through `leptos::logging`, which writes to the browser
//! console under `hydrate` and to stdout/stderr natively. `init` additionally
//! routes `log` records from dependencies to the console and installs a panic
//! hook so WASM panics show a readable message. Requires a browser
//! environment; a no-op otherwise.

/// Install the panic hook and console logger. Safe to call more than once.
pub fn init() {
    #[cfg(feature = "hydrate")]
    {
        console_error_panic_hook::set_once();
        let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
        // Errors only when a logger is already installed.
        let _ = console_log::init_with_level(level);
    }
}
