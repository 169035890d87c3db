//! # shopdesk-auth
//!
//! Sign-in, registration and session handling for the shopdesk admin.
//!
//! Each page owns a [`Form`](shopdesk_forms::Form) built from the
//! matching schema, forwards input events to it and, on a valid submit,
//! calls the [`AuthRepository`](shopdesk_api::AuthRepository). Results
//! are reported through a [`Notifier`](shopdesk_router::Notifier) and
//! followed by a route transition:
//!
//! | Flow     | Success                             | Failure                                   |
//! |----------|-------------------------------------|-------------------------------------------|
//! | login    | "Login successfully!", `/admin`     | message derived from the status, stay     |
//! | register | "Registration successful", `/login` | "Registration failed, please try again", `/register` |
//! | logout   | `/login`                            | error returned, session kept              |
//!
//! [`AuthGuard`] plugs into a [`Router`](shopdesk_router::Router) and sends
//! unauthenticated visitors of protected routes to `/login`.
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use shopdesk_api::InMemoryAuthRepository;
//! use shopdesk_auth::LoginPage;
//! use shopdesk_router::{History, Navigator, RecordingNotifier, Route};
//!
//! # futures::executor::block_on(async {
//! let auth = InMemoryAuthRepository::with_user("alice", "secret1");
//! let history = Arc::new(History::new());
//! let mut page = LoginPage::new(auth, history.clone(), RecordingNotifier::accepting());
//!
//! page.on_change("name", "alice").unwrap();
//! page.on_change("password", "secret1").unwrap();
//! assert!(page.submit().await.completed().is_some());
//! assert_eq!(history.current(), Some(Route::Admin));
//! # });
//! ```

mod error;
pub mod feedback;
mod home;
mod login;
mod register;
mod session;

pub use error::{AuthFlowError, Result};
pub use home::render_home;
pub use login::{LoginPage, Outcome};
pub use register::RegisterPage;
pub use session::{AuthGuard, Session};
