//! Optional third-party identity SDK, signed out best-effort on logout.

use futures::future::LocalBoxFuture;

use crate::error::AuthError;

pub trait IdentityProvider {
    /// Short label used in log lines.
    fn name(&self) -> &str;

    /// End the provider's session. The future is spawned, never awaited by
    /// logout, so it may resolve after the page has navigated away.
    fn sign_out(&self) -> LocalBoxFuture<'static, Result<(), AuthError>>;
}

/// Google's legacy `gapi.auth2` client.
///
/// The `gapi` script usually loads with `async`, so it may appear after the
/// app has booted. Presence is checked on every sign-out rather than once at
/// startup; when `window.gapi` is missing there is no Google session to end.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct GoogleIdentity;

#[cfg(feature = "hydrate")]
fn gapi_sign_out() -> Result<Option<js_sys::Promise>, wasm_bindgen::JsValue> {
    use js_sys::{Function, Promise, Reflect};
    use wasm_bindgen::{JsCast, JsValue};

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let gapi = Reflect::get(&window, &"gapi".into())?;
    if gapi.is_undefined() || gapi.is_null() {
        return Ok(None);
    }
    let auth2 = Reflect::get(&gapi, &"auth2".into())?;
    let get_instance: Function = Reflect::get(&auth2, &"getAuthInstance".into())?.dyn_into()?;
    let instance = get_instance.call0(&auth2)?;
    let sign_out: Function = Reflect::get(&instance, &"signOut".into())?.dyn_into()?;
    let result = sign_out.call0(&instance)?;
    Ok(Some(Promise::resolve(&result)))
}

#[cfg(feature = "hydrate")]
impl IdentityProvider for GoogleIdentity {
    fn name(&self) -> &str {
        "google"
    }

    fn sign_out(&self) -> LocalBoxFuture<'static, Result<(), AuthError>> {
        use futures::FutureExt;

        async move {
            let Some(promise) = gapi_sign_out().map_err(|e| AuthError::ExternalSignOut(format!("{e:?}")))? else {
                leptos::logging::log!("[session] gapi not loaded; no google session to end");
                return Ok(());
            };
            wasm_bindgen_futures::JsFuture::from(promise)
                .await
                .map(|_| ())
                .map_err(|e| AuthError::ExternalSignOut(format!("{e:?}")))
        }
        .boxed_local()
    }
}
