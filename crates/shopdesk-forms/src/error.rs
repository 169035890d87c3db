//! Error types for forms.

use std::collections::BTreeMap;

use thiserror::Error;

/// Form-specific errors.
///
/// Validation failures are not errors: they live in
/// [`FieldState::error`](crate::FieldState) or in [`ValidationErrors`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    /// An event referenced a key the form model does not declare.
    #[error("unknown field: {0}")]
    UnknownField(String),

    /// Two fields in one form model share a key.
    #[error("duplicate field key: {0}")]
    DuplicateField(String),

    /// A `match_field` points at a key outside the form model.
    #[error("field {field} matches unknown field {target}")]
    UnknownMatchField { field: String, target: String },

    /// A field references itself as its match target.
    #[error("field {0} cannot match itself")]
    SelfMatch(String),
}

/// Record-wide validation errors keyed by field.
///
/// Each field carries at most one message; the first failing rule wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: BTreeMap<String, String>,
}

impl ValidationErrors {
    /// Creates a new empty `ValidationErrors`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an error for a field unless one is already present.
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.errors
            .entry(field.to_string())
            .or_insert_with(|| message.into());
    }

    /// Returns whether there are any errors.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the number of fields with errors.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns the error for a specific field.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    /// Iterates over `(field, message)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.errors.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (field, message) in &self.errors {
            writeln!(f, "{field}: {message}")?;
        }
        Ok(())
    }
}

/// Result type alias for form operations.
pub type Result<T> = std::result::Result<T, FormError>;
