//! # shopdesk-router
//!
//! Client-side navigation and user feedback for the admin front end.
//!
//! - [`Route`]: the fixed route table (`/`, `/login`, `/register`, `/admin`)
//! - [`Navigator`]: receives programmatic transitions; [`History`] records them
//! - [`Guard`]: async checks run before a transition, able to redirect
//! - [`Router`]: resolves a path, runs guards and commits the result
//! - [`Notifier`]: blocking alerts and confirmations shown by page flows
//!
//! ## Quick Start
//!
//! ```rust
//! use shopdesk_router::{History, Navigator, Route, Router};
//!
//! # futures::executor::block_on(async {
//! let router = Router::new(History::new());
//! let shown = router.navigate("/register").await.unwrap();
//! assert_eq!(shown, Route::Register);
//! assert_eq!(router.navigator().current(), Some(Route::Register));
//! # });
//! ```

mod error;
mod guard;
mod navigator;
mod notify;
mod route;
mod router;

pub use error::{Result, RouterError};
pub use guard::{Guard, GuardResult};
pub use navigator::{History, Navigator};
pub use notify::{Level, Notifier, RecordingNotifier};
pub use route::Route;
pub use router::Router;
