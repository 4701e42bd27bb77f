#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::error::AuthError;
use crate::net::types::SessionRecord;
use crate::storage::SessionStore;

/// Which of the two screens is visible. Derived solely from whether a
/// session record is present.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    LoggedOut,
    LoggedIn,
}

/// Authentication state: the persisted session plus the transient form
/// fields. Held in an `RwSignal` provided via context; all transitions are
/// pure methods so they run under native tests.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub session: Option<SessionRecord>,
    pub username: String,
    pub password: String,
    /// Last failure message; persists until the next submit outcome.
    pub error: Option<String>,
    /// In-flight guard: a second submit while one is pending is ignored.
    pub submitting: bool,
}

impl AuthState {
    /// Startup state: logged in when the store holds a readable record.
    pub fn restore(store: &mut dyn SessionStore) -> Self {
        Self { session: store.load(), ..Self::default() }
    }

    pub fn phase(&self) -> SessionPhase {
        if self.session.is_some() {
            SessionPhase::LoggedIn
        } else {
            SessionPhase::LoggedOut
        }
    }

    /// Mark a submit as in flight. Returns `false` when one already is, in
    /// which case the caller must drop the event.
    pub fn begin_submit(&mut self) -> bool {
        if self.submitting {
            return false;
        }
        self.submitting = true;
        true
    }

    /// Apply the outcome of the login call. Success persists the record and
    /// clears any prior error; failure records the message and leaves
    /// storage untouched.
    pub fn finish_login(
        &mut self,
        store: &mut dyn SessionStore,
        outcome: Result<SessionRecord, AuthError>,
    ) {
        self.submitting = false;
        match outcome {
            Ok(record) => {
                store.save(&record);
                self.session = Some(record);
                self.error = None;
            }
            Err(err) => {
                self.error = Some(err.to_string());
            }
        }
    }

    /// Drop the session and its stored copy. Unconditional; there is no
    /// failure mode.
    pub fn logout(&mut self, store: &mut dyn SessionStore) {
        store.clear();
        self.session = None;
    }
}
