//! Navigation-succeeded events and their subscribers.
//!
//! DESIGN
//! ======
//! The bus is synchronous: `publish` calls every listener, in subscription
//! order, and each runs to completion before the next. Events are only
//! produced for locations that resolved to a declared state, so listeners
//! never see a fallback redirect.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use super::route::{RouteParams, RouteState};

/// A completed transition between two states.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigationEvent {
    pub to: RouteState,
    pub to_params: RouteParams,
    /// `None` for the first navigation after startup.
    pub from: Option<RouteState>,
    pub from_params: RouteParams,
}

/// Handle returned by [`NavigationBus::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Box<dyn Fn(&NavigationEvent) + Send + Sync>;

#[derive(Default)]
pub struct NavigationBus {
    listeners: Vec<(ListenerId, Listener)>,
    next_id: u64,
}

impl NavigationBus {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: Fn(&NavigationEvent) + Send + Sync + 'static,
    {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns `false` if it was not subscribed.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    pub fn publish(&self, event: &NavigationEvent) {
        log::debug!("navigation succeeded: {} ({})", event.to.name, event.to.url);
        for (_, listener) in &self.listeners {
            listener(event);
        }
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl std::fmt::Debug for NavigationBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NavigationBus")
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

/// Remembers the current state so each event carries where it came from.
#[derive(Clone, Debug, Default)]
pub struct NavigationTracker {
    current: Option<(RouteState, RouteParams)>,
}

impl NavigationTracker {
    /// Record a move to `to`. Returns `None` when `to` and `params` equal the
    /// current state, since nothing changed.
    pub fn transition(&mut self, to: RouteState, params: RouteParams) -> Option<NavigationEvent> {
        if let Some((state, current_params)) = &self.current {
            if state.name == to.name && *current_params == params {
                return None;
            }
        }

        let (from, from_params) = match self.current.take() {
            Some((state, params)) => (Some(state), params),
            None => (None, RouteParams::new()),
        };
        self.current = Some((to.clone(), params.clone()));

        Some(NavigationEvent { to, to_params: params, from, from_params })
    }

    pub fn current(&self) -> Option<&RouteState> {
        self.current.as_ref().map(|(state, _)| state)
    }
}
