//! Navigation targets.

use std::sync::{Arc, Mutex, PoisonError};

use tracing::debug;

use crate::route::Route;

/// Receives programmatic route transitions.
///
/// Page flows hold a navigator and call [`navigate_to`](Navigator::navigate_to)
/// after a successful login, registration or logout.
pub trait Navigator: Send + Sync {
    /// Moves to `route`.
    fn navigate_to(&self, route: Route);

    /// Returns the route currently shown, if any.
    fn current(&self) -> Option<Route>;
}

impl<T: Navigator + ?Sized> Navigator for Arc<T> {
    fn navigate_to(&self, route: Route) {
        (**self).navigate_to(route);
    }

    fn current(&self) -> Option<Route> {
        (**self).current()
    }
}

/// A navigator that records every transition.
#[derive(Debug, Default)]
pub struct History {
    entries: Mutex<Vec<Route>>,
}

impl History {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a history positioned at `route`.
    pub fn starting_at(route: Route) -> Self {
        Self {
            entries: Mutex::new(vec![route]),
        }
    }

    /// Returns every route visited, oldest first.
    pub fn entries(&self) -> Vec<Route> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Steps back one entry and returns the new current route.
    pub fn back(&self) -> Option<Route> {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        if entries.len() > 1 {
            entries.pop();
        }
        entries.last().copied()
    }
}

impl Navigator for History {
    fn navigate_to(&self, route: Route) {
        debug!(%route, "navigate");
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(route);
    }

    fn current(&self) -> Option<Route> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_records_transitions() {
        let history = History::starting_at(Route::Home);
        history.navigate_to(Route::Login);
        history.navigate_to(Route::Admin);

        assert_eq!(history.current(), Some(Route::Admin));
        assert_eq!(history.entries(), [Route::Home, Route::Login, Route::Admin]);
        assert_eq!(history.back(), Some(Route::Login));
    }

    #[test]
    fn test_back_keeps_first_entry() {
        let history = History::starting_at(Route::Home);
        assert_eq!(history.back(), Some(Route::Home));
        assert_eq!(History::new().current(), None);
    }
}
