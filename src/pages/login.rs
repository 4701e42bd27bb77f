//! Login form page: username, password, submit, error text.
//!
//! The page only forwards events; transitions live on
//! [`AuthState`](crate::state::auth::AuthState) so they test natively.

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::storage::BrowserSessionStore;

/// Login page — posts the credentials on submit and renders the failure
/// message, if any, under the button.
#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let submit = Callback::new(move |()| {
        // Drop the event if a login is already in flight.
        if !auth.try_update(AuthState::begin_submit).unwrap_or(false) {
            return;
        }

        #[cfg(feature = "csr")]
        {
            let (username, password) =
                auth.with_untracked(|s| (s.username.clone(), s.password.clone()));
            leptos::task::spawn_local(async move {
                let outcome = crate::net::api::login(&username, &password).await;
                auth.update(|s| s.finish_login(&mut BrowserSessionStore, outcome));
            });
        }

        #[cfg(not(feature = "csr"))]
        {
            // No network outside the browser; settle the submit at once.
            auth.update(|s| {
                s.finish_login(&mut BrowserSessionStore, Err(crate::net::error::AuthError::Transport));
            });
        }
    });

    view! {
        <div class="glass-card">
            <h2 class="header">"Sign in"</h2>
            <div class="input-wrapper">
                <input
                    class="input-field"
                    type="text"
                    placeholder="Username"
                    prop:value=move || auth.with(|s| s.username.clone())
                    on:input=move |ev| {
                        auth.update(|s| s.username = event_target_value(&ev));
                    }
                />
                <input
                    class="input-field"
                    type="password"
                    placeholder="Password"
                    prop:value=move || auth.with(|s| s.password.clone())
                    on:input=move |ev| {
                        auth.update(|s| s.password = event_target_value(&ev));
                    }
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            submit.run(());
                        }
                    }
                />
            </div>
            <button
                class="login-btn"
                disabled=move || auth.with(|s| s.submitting)
                on:click=move |_| submit.run(())
            >
                "Sign in"
            </button>
            <Show when=move || auth.with(|s| s.error.is_some())>
                <p class="error-msg">
                    {move || auth.with(|s| s.error.clone().unwrap_or_default())}
                </p>
            </Show>
        </div>
    }
}
