//! Session tracking and the route guard for protected pages.

use futures::future::BoxFuture;
use shopdesk_api::{AuthRepository, UserSession};
use shopdesk_router::{Guard, GuardResult, Navigator, Route};
use tracing::{debug, warn};

use crate::error::Result;

/// The signed-in user as seen by a page.
pub struct Session<A, N> {
    auth: A,
    navigator: N,
    user: Option<UserSession>,
}

impl<A: AuthRepository, N: Navigator> Session<A, N> {
    /// Creates a session with no known user.
    pub fn new(auth: A, navigator: N) -> Self {
        Self {
            auth,
            navigator,
            user: None,
        }
    }

    /// Returns the last known user.
    pub fn user(&self) -> Option<&UserSession> {
        self.user.as_ref()
    }

    /// Returns the last known username.
    pub fn username(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.username.as_str())
    }

    /// Re-reads the current user from the backend.
    ///
    /// A failed probe is logged and leaves the session empty.
    pub async fn refresh(&mut self) -> Option<&UserSession> {
        match self.auth.current_user().await {
            Ok(user) => self.user = Some(user),
            Err(err) => {
                warn!(error = %err, "user not authenticated");
                self.user = None;
            }
        }
        self.user.as_ref()
    }

    /// Ends the session and moves to `/login`.
    ///
    /// When the backend call fails nothing changes and the error is
    /// returned for the page to report.
    pub async fn logout(&mut self) -> Result<()> {
        self.auth.logout().await?;
        debug!("signed out");
        self.user = None;
        self.navigator.navigate_to(Route::Login);
        Ok(())
    }
}

/// Redirects protected routes to `/login` unless the backend reports a
/// current user.
pub struct AuthGuard<A> {
    auth: A,
}

impl<A: AuthRepository> AuthGuard<A> {
    pub fn new(auth: A) -> Self {
        Self { auth }
    }
}

impl<A: AuthRepository> Guard for AuthGuard<A> {
    fn check(&self, route: Route) -> BoxFuture<'_, GuardResult> {
        Box::pin(async move {
            if !route.is_protected() {
                return GuardResult::Continue;
            }
            match self.auth.current_user().await {
                Ok(_) => GuardResult::Continue,
                Err(err) => {
                    warn!(%route, error = %err, "unauthenticated access");
                    GuardResult::Redirect(Route::Login)
                }
            }
        })
    }
}
