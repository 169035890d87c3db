//! Declarative form models.

use std::collections::HashSet;

use crate::error::{FormError, Result};
use crate::validation::Format;

/// The kind of input a field renders as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputKind {
    /// Single-line text.
    Text,
    /// Numeric input; the value is still carried as text.
    Number,
    /// Masked text.
    Password,
    /// Dropdown over a fixed, ordered list of options.
    Select { options: Vec<String> },
}

impl InputKind {
    /// Creates a select over the given options.
    pub fn select<I, S>(options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Select {
            options: options.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns the HTML input type.
    pub fn input_type(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Number => "number",
            Self::Password => "password",
            Self::Select { .. } => "select",
        }
    }

    /// Returns the select options, empty for other kinds.
    pub fn options(&self) -> &[String] {
        match self {
            Self::Select { options } => options,
            _ => &[],
        }
    }
}

/// Definition of a single form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldModel {
    /// Unique key within the form; also the payload key.
    pub key: String,
    /// Display label.
    pub label: String,
    /// HTML `id` attribute.
    pub html_id: String,
    /// Input kind.
    pub kind: InputKind,
    /// Whether a blank value is rejected.
    pub required: bool,
    /// Placeholder text.
    pub placeholder: Option<String>,
    /// Format rule the value must satisfy.
    pub format: Format,
    /// Key of the field this one must equal.
    pub match_field: Option<String>,
    /// Message shown when the match check fails.
    pub error_message: Option<String>,
    /// Pre-fill from the match target when the record lacks this key.
    pub prefill_from_match: bool,
}

impl FieldModel {
    /// Creates a new optional field; the format follows the key.
    pub fn new(key: impl Into<String>, label: impl Into<String>, kind: InputKind) -> Self {
        let key = key.into();
        Self {
            html_id: key.clone(),
            format: Format::for_key(&key),
            key,
            label: label.into(),
            kind,
            required: false,
            placeholder: None,
            match_field: None,
            error_message: None,
            prefill_from_match: false,
        }
    }

    /// Makes the field required.
    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Sets the HTML `id` attribute.
    #[must_use]
    pub fn html_id(mut self, id: impl Into<String>) -> Self {
        self.html_id = id.into();
        self
    }

    /// Sets the placeholder text.
    #[must_use]
    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = Some(text.into());
        self
    }

    /// Overrides the format rule.
    #[must_use]
    pub fn format(mut self, format: Format) -> Self {
        self.format = format;
        self
    }

    /// Requires this field to equal another field of the same form.
    #[must_use]
    pub fn matches(mut self, key: impl Into<String>, message: Option<&str>) -> Self {
        self.match_field = Some(key.into());
        self.error_message = message.map(str::to_string);
        self
    }

    /// Enables pre-filling from the match target's record value.
    #[must_use]
    pub fn prefill_from_match(mut self) -> Self {
        self.prefill_from_match = true;
        self
    }
}

/// A named, ordered collection of fields.
///
/// The name doubles as the heading and the submit button label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormModel {
    /// Form name.
    pub name: String,
    /// Fields in display order.
    pub fields: Vec<FieldModel>,
}

impl FormModel {
    /// Creates a form model without checking its invariants.
    ///
    /// Use [`FormBuilder`] for models assembled at runtime.
    pub fn new(name: impl Into<String>, fields: Vec<FieldModel>) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }

    /// Returns the field with the given key.
    pub fn field(&self, key: &str) -> Option<&FieldModel> {
        self.fields.iter().find(|f| f.key == key)
    }

    /// Returns the field keys in display order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.key.as_str())
    }

    /// Checks that keys are unique and every match target exists.
    pub fn check(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for field in &self.fields {
            if !seen.insert(field.key.as_str()) {
                return Err(FormError::DuplicateField(field.key.clone()));
            }
        }

        for field in &self.fields {
            if let Some(target) = &field.match_field {
                if target == &field.key {
                    return Err(FormError::SelfMatch(field.key.clone()));
                }
                if !seen.contains(target.as_str()) {
                    return Err(FormError::UnknownMatchField {
                        field: field.key.clone(),
                        target: target.clone(),
                    });
                }
            }
        }

        Ok(())
    }
}

/// Builds a [`FormModel`] and checks its invariants.
#[derive(Debug, Default)]
pub struct FormBuilder {
    name: String,
    fields: Vec<FieldModel>,
}

impl FormBuilder {
    /// Creates a new form builder.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Adds a field to the form.
    #[must_use]
    pub fn field(mut self, field: FieldModel) -> Self {
        self.fields.push(field);
        self
    }

    /// Returns the checked form model.
    pub fn build(self) -> Result<FormModel> {
        let model = FormModel::new(self.name, self.fields);
        model.check()?;
        Ok(model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_builder() {
        let field = FieldModel::new("username", "Username", InputKind::Text)
            .required()
            .html_id("id_username")
            .placeholder("Enter username");

        assert_eq!(field.key, "username");
        assert_eq!(field.label, "Username");
        assert_eq!(field.html_id, "id_username");
        assert!(field.required);
        assert_eq!(field.placeholder.as_deref(), Some("Enter username"));
        assert_eq!(field.format, Format::Free);
    }

    #[test]
    fn test_format_follows_key() {
        let field = FieldModel::new("password", "Password", InputKind::Password);
        assert_eq!(field.format, Format::Password);
        assert_eq!(field.html_id, "password");
    }

    #[test]
    fn test_builder_preserves_order() {
        let model = FormBuilder::new("Sign in")
            .field(FieldModel::new("name", "Name", InputKind::Text))
            .field(FieldModel::new("password", "Password", InputKind::Password))
            .build()
            .unwrap();

        assert_eq!(model.keys().collect::<Vec<_>>(), vec!["name", "password"]);
        assert!(model.field("password").is_some());
        assert!(model.field("email").is_none());
    }

    #[test]
    fn test_builder_rejects_duplicate_key() {
        let err = FormBuilder::new("Broken")
            .field(FieldModel::new("name", "Name", InputKind::Text))
            .field(FieldModel::new("name", "Again", InputKind::Text))
            .build()
            .unwrap_err();
        assert_eq!(err, FormError::DuplicateField("name".to_string()));
    }

    #[test]
    fn test_builder_rejects_unknown_match_target() {
        let err = FormBuilder::new("Broken")
            .field(
                FieldModel::new("confirmPassword", "Confirm", InputKind::Password)
                    .matches("password", None),
            )
            .build()
            .unwrap_err();
        assert!(matches!(err, FormError::UnknownMatchField { .. }));
    }

    #[test]
    fn test_builder_rejects_self_match() {
        let err = FormBuilder::new("Broken")
            .field(FieldModel::new("a", "A", InputKind::Text).matches("a", None))
            .build()
            .unwrap_err();
        assert_eq!(err, FormError::SelfMatch("a".to_string()));
    }

    #[test]
    fn test_select_options() {
        let kind = InputKind::select(["A", "B"]);
        assert_eq!(kind.input_type(), "select");
        assert_eq!(kind.options(), &["A".to_string(), "B".to_string()]);
        assert!(InputKind::Text.options().is_empty());
    }
}
