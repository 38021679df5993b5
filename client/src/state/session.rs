//! Session-lifetime state shared by every console component.
//!
//! SYSTEM CONTEXT
//! ==============
//! Seeded once by bootstrap and provided as a `RwSignal<SessionData>`
//! context. Login/logout collaborators mutate it through the methods below;
//! it is never persisted and resets on reload.
//!
//! The session carries no credentials. Before anyone signs in it holds the
//! anonymous sentinel user.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::{Deserialize, Serialize};

/// Username of the sentinel user present before sign-in.
pub const ANONYMOUS_USERNAME: &str = "anonymous";
/// Identifier of the sentinel user. Real accounts start at 1.
pub const ANONYMOUS_USER_ID: i64 = 0;

/// Identity of the console operator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: i64,
    pub username: String,
}

impl SessionUser {
    pub fn new(id: i64, username: impl Into<String>) -> Self {
        Self { id, username: username.into() }
    }

    #[must_use]
    pub fn anonymous() -> Self {
        Self::new(ANONYMOUS_USER_ID, ANONYMOUS_USERNAME)
    }

    pub fn is_anonymous(&self) -> bool {
        self.id == ANONYMOUS_USER_ID
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionData {
    pub user: SessionUser,
    pub is_authenticated: bool,
}

impl SessionData {
    /// Startup value: anonymous and unauthenticated.
    #[must_use]
    pub fn initial() -> Self {
        Self { user: SessionUser::anonymous(), is_authenticated: false }
    }

    pub fn reset(&mut self) {
        *self = Self::initial();
    }

    /// Mark `user` as signed in. Signing in as the anonymous sentinel is
    /// treated as a sign-out.
    pub fn sign_in(&mut self, user: SessionUser) {
        if user.is_anonymous() {
            self.reset();
            return;
        }
        self.user = user;
        self.is_authenticated = true;
    }

    pub fn sign_out(&mut self) {
        self.reset();
    }

    /// Adopt a snapshot reported by the server.
    pub fn apply(&mut self, snapshot: SessionData) {
        if snapshot.is_authenticated {
            self.sign_in(snapshot.user);
        } else {
            self.reset();
        }
    }
}

impl Default for SessionData {
    fn default() -> Self {
        Self::initial()
    }
}
