//! Guarded navigation.

use std::sync::Arc;

use tracing::debug;

use crate::error::{Result, RouterError};
use crate::guard::{Guard, GuardResult};
use crate::navigator::Navigator;
use crate::route::Route;

/// Upper bound on guard redirects for a single navigation.
const MAX_REDIRECTS: usize = 8;

/// Resolves paths, runs guards in registration order and commits the
/// final route to a [`Navigator`].
pub struct Router<N> {
    navigator: N,
    guards: Vec<Arc<dyn Guard>>,
}

impl<N: Navigator> Router<N> {
    /// Creates a router with no guards.
    pub fn new(navigator: N) -> Self {
        Self {
            navigator,
            guards: Vec::new(),
        }
    }

    /// Adds a guard.
    #[must_use]
    pub fn guard(mut self, guard: impl Guard + 'static) -> Self {
        self.guards.push(Arc::new(guard));
        self
    }

    /// Returns the underlying navigator.
    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    /// Navigates to a URL path.
    pub async fn navigate(&self, path: &str) -> Result<Route> {
        let route = Route::from_path(path)?;
        self.go(route).await
    }

    /// Navigates to `route`, following guard redirects.
    ///
    /// Returns the route actually shown.
    pub async fn go(&self, route: Route) -> Result<Route> {
        let mut target = route;
        let mut redirects = 0;

        'outer: loop {
            for guard in &self.guards {
                if let GuardResult::Redirect(next) = guard.check(target).await {
                    debug!(from = %target, to = %next, "guard redirect");
                    redirects += 1;
                    if redirects > MAX_REDIRECTS || next == target {
                        return Err(RouterError::RedirectLoop(route.path().to_string()));
                    }
                    target = next;
                    continue 'outer;
                }
            }
            break;
        }

        self.navigator.navigate_to(target);
        Ok(target)
    }
}
