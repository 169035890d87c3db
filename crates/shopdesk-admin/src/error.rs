//! Error types for the product page.

use shopdesk_api::ApiError;
use shopdesk_forms::FormError;
use thiserror::Error;

/// Product page errors.
///
/// Backend failures of mutations are reported to the user and returned
/// as outcomes; only misuse of the controller and list fetches surface
/// here.
#[derive(Debug, Error)]
pub enum AdminError {
    /// A form event named an unknown field.
    #[error("form error: {0}")]
    Form(#[from] FormError),

    /// A backend call failed.
    #[error("backend error: {0}")]
    Api(#[from] ApiError),

    /// An editor operation was issued with no editor open.
    #[error("no product form is open")]
    NoEditor,
}

/// Result type alias for product page operations.
pub type Result<T> = std::result::Result<T, AdminError>;
