//! Session snapshot route.
//!
//! The server performs no authentication, so every caller is reported as
//! the anonymous sentinel. The client applies this snapshot to its session
//! context after hydration.

use axum::response::Json;

use admin_client::state::session::SessionData;

pub const SESSION_PATH: &str = "/api/session";

/// `GET /api/session`: the caller's session snapshot.
pub async fn current_session() -> Json<SessionData> {
    let session = SessionData::initial();
    tracing::debug!(user_id = session.user.id, authenticated = session.is_authenticated, "session snapshot");
    Json(session)
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
