//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics so a failed
//! session fetch leaves the startup session in place.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::state::session::SessionData;

/// Endpoint returning the server's view of the current session.
pub const SESSION_ENDPOINT: &str = "/api/session";

#[cfg(any(test, feature = "hydrate"))]
fn session_request_failed_message(status: u16) -> String {
    format!("session request failed: {status}")
}

/// Fetch the session snapshot from `/api/session`.
///
/// # Errors
///
/// Returns an error string if the request fails, the server responds with a
/// non-OK status, or the body is not a session.
pub async fn fetch_session() -> Result<SessionData, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(SESSION_ENDPOINT)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(session_request_failed_message(resp.status()));
        }
        resp.json::<SessionData>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}
