//! The application's route table.

use std::fmt;

use crate::error::{Result, RouterError};

/// A page of the admin front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Login,
    Register,
    /// Product management. Requires a session.
    Admin,
}

impl Route {
    /// Every route, in menu order.
    pub const ALL: [Self; 4] = [Self::Home, Self::Login, Self::Register, Self::Admin];

    /// Returns the URL path.
    pub fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Login => "/login",
            Self::Register => "/register",
            Self::Admin => "/admin",
        }
    }

    /// Resolves a URL path, ignoring a trailing slash and any query string.
    pub fn from_path(path: &str) -> Result<Self> {
        let trimmed = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = trimmed.trim_end_matches('/');
        let normalized = if trimmed.is_empty() { "/" } else { trimmed };

        Self::ALL
            .into_iter()
            .find(|route| route.path() == normalized)
            .ok_or_else(|| RouterError::NotFound(path.to_string()))
    }

    /// Returns true if the route needs an authenticated session.
    pub fn is_protected(self) -> bool {
        matches!(self, Self::Admin)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}
