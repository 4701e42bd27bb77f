//! Session persistence, scoped to the browsing origin.

pub mod session_store;

pub use session_store::{BrowserSessionStore, MemorySessionStore, SessionStore};
