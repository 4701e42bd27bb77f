#[cfg(test)]
#[path = "session_store_test.rs"]
mod session_store_test;

use crate::net::types::SessionRecord;

/// `localStorage` key holding the serialized session.
pub const SESSION_KEY: &str = "userSession";

/// Persistence capability for one [`SessionRecord`].
///
/// Implementors supply the raw key/value primitives; the typed `load`/`save`
/// contract lives here so corrupt-entry handling is identical across
/// backends. The view controller takes the store as an injected `&mut dyn`
/// capability rather than reaching for a global.
pub trait SessionStore {
    /// Raw stored value, if any.
    fn read_raw(&self) -> Option<String>;

    /// Replace the stored value.
    fn write_raw(&mut self, raw: &str);

    /// Remove any stored record.
    fn clear(&mut self);

    /// Read the persisted session. A value that fails to parse is deleted
    /// and treated as "no session"; this never errors to the caller.
    fn load(&mut self) -> Option<SessionRecord> {
        let raw = self.read_raw()?;
        match serde_json::from_str(&raw) {
            Ok(record) => Some(record),
            Err(err) => {
                log::warn!("discarding unreadable stored session: {err}");
                self.clear();
                None
            }
        }
    }

    /// Serialize and persist the record, replacing any prior value.
    fn save(&mut self, record: &SessionRecord) {
        match serde_json::to_string(record) {
            Ok(json) => self.write_raw(&json),
            Err(err) => log::warn!("failed to encode session record: {err}"),
        }
    }
}

/// Session store backed by the browser's `localStorage`.
///
/// Storage calls are gated behind the `csr` feature; native builds see an
/// always-empty store. Storage errors (disabled storage, quota) are treated
/// as absence, the same way the teacher UI treats preference reads.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserSessionStore;

impl SessionStore for BrowserSessionStore {
    fn read_raw(&self) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            let storage = web_sys::window()?.local_storage().ok()??;
            storage.get_item(SESSION_KEY).ok()?
        }
        #[cfg(not(feature = "csr"))]
        {
            None
        }
    }

    fn write_raw(&mut self, raw: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(Ok(Some(storage))) = web_sys::window().map(|w| w.local_storage()) {
                let _ = storage.set_item(SESSION_KEY, raw);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = raw;
        }
    }

    fn clear(&mut self) {
        #[cfg(feature = "csr")]
        {
            if let Some(Ok(Some(storage))) = web_sys::window().map(|w| w.local_storage()) {
                let _ = storage.remove_item(SESSION_KEY);
            }
        }
    }
}

/// In-memory store for tests and non-browser builds.
#[derive(Clone, Debug, Default)]
pub struct MemorySessionStore {
    raw: Option<String>,
}

impl MemorySessionStore {
    /// Store pre-seeded with a raw value, as if left by a previous visit.
    pub fn with_raw(raw: &str) -> Self {
        Self { raw: Some(raw.to_owned()) }
    }
}

impl SessionStore for MemorySessionStore {
    fn read_raw(&self) -> Option<String> {
        self.raw.clone()
    }

    fn write_raw(&mut self, raw: &str) {
        self.raw = Some(raw.to_owned());
    }

    fn clear(&mut self) {
        self.raw = None;
    }
}
