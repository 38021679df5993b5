//! Route state metadata.

#[cfg(test)]
#[path = "route_test.rs"]
mod route_test;

use std::collections::BTreeMap;

/// Path and query parameters attached to a navigation, keyed by name.
pub type RouteParams = BTreeMap<String, String>;

/// Optional per-state data consumed by navigation listeners.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RouteData {
    /// Human-readable page name, suffixed into the document title.
    pub page_title: Option<String>,
}

/// A named application view reachable at a fixed URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteState {
    pub name: String,
    pub url: String,
    pub data: Option<RouteData>,
}

impl RouteState {
    /// A state with no attached data.
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self { name: name.into(), url: url.into(), data: None }
    }

    /// Attach a page title, creating the data record if needed.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.data.get_or_insert_with(RouteData::default).page_title = Some(title.into());
        self
    }

    /// The configured page title, if both `data` and `page_title` exist.
    pub fn page_title(&self) -> Option<&str> {
        self.data.as_ref()?.page_title.as_deref()
    }
}

/// Parse a `?a=1&b=2` search string into parameters.
///
/// Keys and values are form-decoded, so `a%20b` and `a+b` are the same
/// value. Keys without a value map to an empty string. Later duplicates win.
pub fn parse_query(search: &str) -> RouteParams {
    let query = search.strip_prefix('?').unwrap_or(search);
    form_urlencoded::parse(query.as_bytes())
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect()
}
