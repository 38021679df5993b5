//! Document title derived from the state being navigated to.

#[cfg(test)]
#[path = "title_test.rs"]
mod title_test;

use leptos::prelude::*;

use super::nav::{ListenerId, NavigationBus};
use super::route::RouteState;

/// Appended to every route's page title.
pub const TITLE_SUFFIX: &str = " | eCommerce Admin";
/// Shown before any titled route has been visited.
pub const DEFAULT_TITLE: &str = "eCommerce Admin";

/// Displayed title for `state`, or `None` if it has no page title.
pub fn derive_page_title(state: &RouteState) -> Option<String> {
    state.page_title().map(|title| format!("{title}{TITLE_SUFFIX}"))
}

/// The scope-local title field rendered by the view layer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PageTitle {
    value: Option<String>,
}

impl PageTitle {
    /// The last title set, if any.
    pub fn get(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn set(&mut self, title: String) {
        self.value = Some(title);
    }

    /// Store `title` if present; `None` leaves the current value alone.
    /// Returns whether the value was updated.
    pub fn apply(&mut self, title: Option<String>) -> bool {
        match title {
            Some(title) => {
                self.set(title);
                true
            }
            None => false,
        }
    }

    /// Text for the document `<title>`.
    pub fn display(&self) -> &str {
        self.get().unwrap_or(DEFAULT_TITLE)
    }
}

/// Destination for derived titles.
///
/// Implementations store through [`PageTitle::apply`], so `None` never
/// clears a title that is already shown.
pub trait TitleSink: Send + Sync + 'static {
    fn apply_title(&self, title: Option<String>);
}

impl TitleSink for RwSignal<PageTitle> {
    fn apply_title(&self, title: Option<String>) {
        // Subscribers are only notified when the value actually changed.
        self.maybe_update(|page_title| page_title.apply(title));
    }
}

/// Subscribe a listener that pushes each derived title into `sink`.
pub fn install_title_listener<S: TitleSink>(bus: &mut NavigationBus, sink: S) -> ListenerId {
    bus.subscribe(move |event| sink.apply_title(derive_page_title(&event.to)))
}
