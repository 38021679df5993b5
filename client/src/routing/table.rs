//! Declared route states plus the fallback used for unmatched locations.
//!
//! DESIGN
//! ======
//! Lookups normalize the incoming location (query, fragment and trailing
//! slash are ignored) so `/home/`, `/home?x=1` and `/home#top` all match the
//! `/home` state. Anything that still matches no state resolves to the
//! configured fallback.

#[cfg(test)]
#[path = "table_test.rs"]
mod table_test;

use super::route::RouteState;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    #[error("route name `{0}` is declared more than once")]
    DuplicateName(String),
    #[error("route url `{0}` is declared more than once")]
    DuplicateUrl(String),
    #[error("fallback `{0}` does not match any declared route")]
    UnknownFallback(String),
}

/// Outcome of resolving a location against the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution<'a> {
    /// The location is a declared state.
    Matched(&'a RouteState),
    /// No state matched; navigate to the fallback path instead.
    Fallback(&'a str),
    /// No state matched and no fallback is configured.
    Unmatched,
}

#[derive(Clone, Debug, Default)]
pub struct RouteTable {
    states: Vec<RouteState>,
    fallback: Option<String>,
}

impl RouteTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a state. Names and normalized URLs must be unique.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::DuplicateName`] or [`RouteError::DuplicateUrl`]
    /// when the state collides with one already declared.
    pub fn declare(&mut self, mut state: RouteState) -> Result<(), RouteError> {
        state.url = normalize_path(&state.url);
        if self.states.iter().any(|s| s.name == state.name) {
            return Err(RouteError::DuplicateName(state.name));
        }
        if self.states.iter().any(|s| s.url == state.url) {
            return Err(RouteError::DuplicateUrl(state.url));
        }
        self.states.push(state);
        Ok(())
    }

    /// Configure where unmatched locations go.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::UnknownFallback`] if `path` is not a declared
    /// route, since falling back to it would never terminate.
    pub fn otherwise(&mut self, path: &str) -> Result<(), RouteError> {
        let path = normalize_path(path);
        if !self.states.iter().any(|s| s.url == path) {
            return Err(RouteError::UnknownFallback(path));
        }
        self.fallback = Some(path);
        Ok(())
    }

    pub fn resolve(&self, location: &str) -> Resolution<'_> {
        let path = normalize_path(location);
        if let Some(state) = self.states.iter().find(|s| s.url == path) {
            return Resolution::Matched(state);
        }
        match self.fallback.as_deref() {
            Some(fallback) => Resolution::Fallback(fallback),
            None => Resolution::Unmatched,
        }
    }

    pub fn state(&self, name: &str) -> Option<&RouteState> {
        self.states.iter().find(|s| s.name == name)
    }

    /// Declared states in declaration order.
    pub fn states(&self) -> &[RouteState] {
        &self.states
    }

    pub fn fallback(&self) -> Option<&str> {
        self.fallback.as_deref()
    }
}

/// Reduce a location to the path part used for matching.
pub(crate) fn normalize_path(location: &str) -> String {
    let end = location.find(['?', '#']).unwrap_or(location.len());
    let path = location[..end].trim_end_matches('/');
    if path.starts_with('/') {
        path.to_owned()
    } else {
        format!("/{path}")
    }
}
