//! The registration page.

use shopdesk_api::{Account, AuthRepository};
use shopdesk_forms::{render_form, schemas, Form};
use shopdesk_router::{Level, Navigator, Notifier, Route};
use tracing::{debug, warn};

use crate::error::Result;
use crate::feedback;
use crate::login::Outcome;

/// Drives the registration form.
///
/// Success moves to `/login`; a backend failure reloads `/register`.
pub struct RegisterPage<A, N, M> {
    form: Form,
    auth: A,
    navigator: N,
    notifier: M,
}

impl<A, N, M> RegisterPage<A, N, M>
where
    A: AuthRepository,
    N: Navigator,
    M: Notifier,
{
    pub fn new(auth: A, navigator: N, notifier: M) -> Self {
        Self {
            form: Form::new(schemas::register()),
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

    pub fn render(&self) -> String {
        render_form(&self.form, Route::Register.path())
    }

    pub fn back(&self) {
        self.navigator.navigate_to(Route::Home);
    }

    /// Validates the form and creates the account.
    pub async fn submit(&mut self) -> Outcome<Account> {
        let Some(payload) = self.form.submit() else {
            return Outcome::Invalid;
        };
        let field = |key: &str| payload.get(key).map(String::as_str).unwrap_or_default();

        match self
            .auth
            .register(field("name"), field("password"), field("confirmPassword"))
            .await
        {
            Ok(account) => {
                debug!(username = %account.username, "account registered");
                self.notifier
                    .notify(Level::Success, feedback::REGISTER_SUCCESS);
                self.navigator.navigate_to(Route::Login);
                Outcome::Completed(account)
            }
            Err(err) => {
                warn!(error = %err, "registration failed");
                self.notifier
                    .notify(Level::Error, feedback::REGISTER_FAILURE);
                self.navigator.navigate_to(Route::Register);
                Outcome::Failed(err)
            }
        }
    }
}
