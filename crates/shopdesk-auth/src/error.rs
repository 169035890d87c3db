//! Error types for the auth flows.

use shopdesk_api::ApiError;
use shopdesk_forms::FormError;
use thiserror::Error;

/// Errors raised by the login, registration and session flows.
///
/// Rejected credentials are not errors; they come back as
/// [`Outcome::Failed`](crate::Outcome::Failed) after the user has been
/// notified.
#[derive(Debug, Error)]
pub enum AuthFlowError {
    /// An input event named a field the form does not have.
    #[error("form error: {0}")]
    Form(#[from] FormError),

    /// A backend call failed.
    #[error("backend error: {0}")]
    Api(#[from] ApiError),
}

/// Result type alias for auth flows.
pub type Result<T> = std::result::Result<T, AuthFlowError>;
