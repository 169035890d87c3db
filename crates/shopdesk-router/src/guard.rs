//! Route guards run before a transition is committed.

use futures::future::BoxFuture;

use crate::route::Route;

/// Outcome of a guard check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardResult {
    /// Let the transition through.
    Continue,
    /// Send the user to another route instead.
    Redirect(Route),
}

/// A check that can veto or reroute a transition.
///
/// # Example
///
/// ```rust
/// use futures::future::BoxFuture;
/// use shopdesk_router::{Guard, GuardResult, Route};
///
/// struct Maintenance;
///
/// impl Guard for Maintenance {
///     fn check(&self, route: Route) -> BoxFuture<'_, GuardResult> {
///         Box::pin(async move {
///             if route == Route::Admin {
///                 GuardResult::Redirect(Route::Home)
///             } else {
///                 GuardResult::Continue
///             }
///         })
///     }
/// }
/// ```
pub trait Guard: Send + Sync {
    /// Decides whether `route` may be shown.
    fn check(&self, route: Route) -> BoxFuture<'_, GuardResult>;
}
