//! REST call to the authentication endpoint.
//!
//! Client-side (`csr`): a real HTTP POST via `gloo-net`.
//! Native builds: a stub returning the transport error, since the call is
//! only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure collapses into [`AuthError`]; callers never see a panic or
//! a raw transport error. Non-success responses surface the server's body
//! text verbatim so the form can show it.

#![allow(clippy::unused_async)]

use super::error::AuthError;
use super::types::SessionRecord;

/// Fixed login endpoint exposed by the backend.
pub const LOGIN_ENDPOINT: &str = "http://localhost:8080/api/auth/login";

/// Exchange credentials for a [`SessionRecord`].
///
/// # Errors
///
/// [`AuthError::Rejected`] when the server answers with a non-success
/// status, [`AuthError::Transport`] when no response is reached or the
/// success body does not parse. No retries, no explicit timeout.
pub async fn login(username: &str, password: &str) -> Result<SessionRecord, AuthError> {
    #[cfg(feature = "csr")]
    {
        use super::types::LoginRequest;

        let resp = gloo_net::http::Request::post(LOGIN_ENDPOINT)
            .json(&LoginRequest { username, password })
            .map_err(|err| {
                log::warn!("failed to encode login request: {err}");
                AuthError::Transport
            })?
            .send()
            .await
            .map_err(|err| {
                log::warn!("login request failed: {err}");
                AuthError::Transport
            })?;

        if !resp.ok() {
            let body = resp.text().await.unwrap_or_default();
            return Err(AuthError::rejected(body));
        }

        resp.json::<SessionRecord>().await.map_err(|err| {
            log::warn!("unreadable login response: {err}");
            AuthError::Transport
        })
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (username, password);
        Err(AuthError::Transport)
    }
}
