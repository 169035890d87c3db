//! # shopdesk-forms
//!
//! Declarative form models with per-field validation, a stateful form
//! engine and Bootstrap 5 rendering.
//!
//! This crate provides:
//! - [`FormModel`] / [`FieldModel`] descriptors and the built-in
//!   [`schemas`]
//! - Field validators and a shared message catalog ([`Rule`])
//! - The [`Form`] engine tracking a value and an error per field
//! - HTML rendering helpers
//!
//! ## Quick Start
//!
//! ```rust
//! use shopdesk_forms::{schemas, Form};
//!
//! let mut form = Form::new(schemas::register());
//! form.on_change("name", "alice").unwrap();
//! form.on_change("password", "Abc123").unwrap();
//! form.on_change("confirmPassword", "Abc124").unwrap();
//!
//! assert!(form.submit().is_none());
//! assert_eq!(
//!     form.error("confirmPassword"),
//!     Some("confirming password do not match"),
//! );
//!
//! form.on_change("confirmPassword", "Abc123").unwrap();
//! let payload = form.submit().expect("valid form");
//! assert_eq!(payload["name"], "alice");
//! ```
//!
//! ## Validation
//!
//! ```rust
//! use shopdesk_forms::validation::validate_field;
//!
//! assert_eq!(validate_field("price", "12.5", true), "");
//! assert_eq!(validate_field("price", "", true), "This field is required");
//! assert_eq!(validate_field("password", "123456", true),
//!     "Password must be 6-100 characters long and contain at least one letter and one number");
//! ```

mod error;
mod form;
pub mod messages;
mod model;
mod render;
pub mod schemas;
pub mod validation;
pub mod widgets;

pub use error::{FormError, Result, ValidationErrors};
pub use form::{FieldState, Form, FormEvent, FormOutcome, Payload, Record};
pub use messages::Rule;
pub use model::{FieldModel, FormBuilder, FormModel, InputKind};
pub use render::{render_field, render_form};
pub use validation::Format;
