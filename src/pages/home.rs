//! Greeting page shown while a session is present.

use leptos::prelude::*;

use crate::net::types::SessionRecord;
use crate::state::auth::AuthState;
use crate::storage::BrowserSessionStore;

/// Greeting page — avatar initial, display name, and a logout button.
#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let on_logout = move |_| {
        auth.update(|s| s.logout(&mut BrowserSessionStore));
    };

    view! {
        <div class="glass-card">
            <div class="user-avatar">
                {move || {
                    auth.with(|s| {
                        s.session.as_ref().map(SessionRecord::initial).unwrap_or_default()
                    })
                }}
            </div>
            <h2 class="header">"Registration Portal"</h2>
            <p>"Welcome back,"</p>
            <h3 class="user-name">
                {move || {
                    auth.with(|s| {
                        s.session.as_ref().map(|r| r.full_name.clone()).unwrap_or_default()
                    })
                }}
            </h3>
            <button class="logout-btn" on:click=on_logout>
                "Sign out"
            </button>
        </div>
    }
}
