//! Toast renderer for the provider's single notification.

use leptos::prelude::*;

use crate::components::auth_provider::use_auth;

/// Shows the current toast while it is visible. The close button hides it
/// immediately; otherwise it disappears when its timer runs out.
#[component]
pub fn Toast() -> impl IntoView {
    let auth = use_auth();

    view! {
        <Show when=move || auth.toast().visible>
            <div class="toast" role="status" aria-live="polite">
                <div class="toast__header">
                    <strong class="toast__title">{move || auth.toast().title}</strong>
                    <button
                        class="toast__close"
                        aria-label="Close"
                        on:click=move |_| auth.dismiss_toast()
                    >
                        "×"
                    </button>
                </div>
                <div class="toast__body">{move || auth.toast().message}</div>
            </div>
        </Show>
    }
}
