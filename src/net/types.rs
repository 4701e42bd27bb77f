#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// The authenticated user's identity as returned by the login endpoint and
/// persisted in the session store.
///
/// Every field is mandatory, so a stored session is either fully populated
/// or rejected at deserialization — no partial records.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub id: i64,
    pub username: String,
    #[serde(rename = "fullName")]
    pub full_name: String,
}

impl SessionRecord {
    /// First character of the display name, used as the avatar glyph.
    pub fn initial(&self) -> String {
        self.full_name.chars().next().map(String::from).unwrap_or_default()
    }
}

/// JSON body for the login POST. Borrows the form fields.
#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}
