//! Shared client-side state.
//!
//! DESIGN
//! ======
//! All login/logout transitions are plain methods on [`auth::AuthState`]
//! taking the session store as an injected capability, so the whole state
//! machine tests natively; the Leptos layer only forwards events.

pub mod auth;
