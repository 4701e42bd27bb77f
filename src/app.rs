//! Root application component.
//!
//! Restores any persisted session before the first render and provides the
//! authentication state as an `RwSignal` context, then toggles between the
//! login form and the greeting view by session phase.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::pages::{home::HomePage, login::LoginPage};
use crate::state::auth::{AuthState, SessionPhase};
use crate::storage::BrowserSessionStore;

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::restore(&mut BrowserSessionStore));
    provide_context(auth);

    view! {
        <Title text="Registration Portal"/>
        <div class="app-container">
            <Show
                when=move || auth.with(|s| s.phase() == SessionPhase::LoggedIn)
                fallback=|| view! { <LoginPage/> }
            >
                <HomePage/>
            </Show>
        </div>
    }
}
