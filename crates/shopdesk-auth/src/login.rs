//! The sign-in page.

use shopdesk_api::{ApiError, AuthRepository, UserSession};
use shopdesk_forms::{render_form, schemas, Form};
use shopdesk_router::{Level, Navigator, Notifier, Route};
use tracing::{debug, warn};

use crate::error::Result;
use crate::feedback;

/// Result of submitting an auth form.
#[derive(Debug)]
pub enum Outcome<T> {
    /// Client-side validation failed; errors are on the form.
    Invalid,
    /// The backend refused the request. The user has been notified.
    Failed(ApiError),
    /// The request succeeded.
    Completed(T),
}

impl<T> Outcome<T> {
    /// Returns the success value, if any.
    pub fn completed(self) -> Option<T> {
        match self {
            Self::Completed(value) => Some(value),
            _ => None,
        }
    }
}

/// Drives the sign-in form.
///
/// A successful login re-reads the session from the backend, shows
/// "Login successfully!" and moves to `/admin`.
pub struct LoginPage<A, N, M> {
    form: Form,
    auth: A,
    navigator: N,
    notifier: M,
}

impl<A, N, M> LoginPage<A, N, M>
where
    A: AuthRepository,
    N: Navigator,
    M: Notifier,
{
    pub fn new(auth: A, navigator: N, notifier: M) -> Self {
        Self {
            form: Form::new(schemas::login()),
            auth,
            navigator,
            notifier,
        }
    }

    pub fn form(&self) -> &Form {
        &self.form
    }

    pub fn on_change(&mut self, key: &str, value: impl Into<String>) -> Result<()> {
        Ok(self.form.on_change(key, value)?)
    }

    pub fn on_blur(&mut self, key: &str) -> Result<()> {
        Ok(self.form.on_blur(key)?)
    }

    /// Renders the form as HTML.
    pub fn render(&self) -> String {
        render_form(&self.form, Route::Login.path())
    }

    /// Returns to the home page.
    pub fn back(&self) {
        self.navigator.navigate_to(Route::Home);
    }

    /// Validates the form and signs in.
    pub async fn submit(&mut self) -> Outcome<UserSession> {
        let Some(payload) = self.form.submit() else {
            return Outcome::Invalid;
        };
        let username = payload.get("name").map(String::as_str).unwrap_or_default();
        let password = payload.get("password").map(String::as_str).unwrap_or_default();

        let result = match self.auth.login(username, password).await {
            Ok(_) => self.auth.current_user().await,
            Err(err) => Err(err),
        };

        match result {
            Ok(user) => {
                debug!(username = %user.username, "signed in");
                self.notifier.notify(Level::Success, feedback::LOGIN_SUCCESS);
                self.navigator.navigate_to(Route::Admin);
                Outcome::Completed(user)
            }
            Err(err) => {
                warn!(error = %err, "login failed");
                self.notifier
                    .notify(Level::Error, feedback::login_failure(&err));
                Outcome::Failed(err)
            }
        }
    }
}
