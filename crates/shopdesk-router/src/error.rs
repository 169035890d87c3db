//! Error types for navigation.

use thiserror::Error;

/// Router-specific errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouterError {
    /// No route matched the path.
    #[error("no route matched: {0}")]
    NotFound(String),

    /// Guards kept redirecting without settling on a route.
    #[error("too many redirects while navigating to {0}")]
    RedirectLoop(String),
}

/// Result type alias for router operations.
pub type Result<T> = std::result::Result<T, RouterError>;
