//! Field validators.
//!
//! [`validate_field`] is the single entry point the form engine uses for
//! required and format checks; [`validate_match`] covers cross-field
//! equality. Both return an empty string for a valid value.

use std::sync::LazyLock;

use regex::Regex;

use crate::messages::Rule;

/// Trait for field validators.
pub trait Validator: Send + Sync {
    /// Validates a value and returns an error message if invalid.
    fn validate(&self, value: &str) -> Result<(), String>;

    /// Returns the error message for this validator.
    fn message(&self) -> &str;
}

/// Validator that requires a non-blank value.
#[derive(Debug, Clone)]
pub struct RequiredValidator {
    message: String,
}

impl RequiredValidator {
    /// Creates a new RequiredValidator with the catalog message.
    pub fn new() -> Self {
        Self {
            message: Rule::Required.message().to_string(),
        }
    }
}

impl Default for RequiredValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator for RequiredValidator {
    fn validate(&self, value: &str) -> Result<(), String> {
        if value.trim().is_empty() {
            Err(self.message.clone())
        } else {
            Ok(())
        }
    }

    fn message(&self) -> &str {
        &self.message
    }
}

/// Validator using a regex pattern.
#[derive(Debug, Clone)]
pub struct RegexValidator {
    pattern: Regex,
    message: String,
}

impl RegexValidator {
    /// Creates a new RegexValidator.
    pub fn new(pattern: &str, message: impl Into<String>) -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
            message: message.into(),
        })
    }
}

impl Validator for RegexValidator {
    fn validate(&self, value: &str) -> Result<(), String> {
        if self.pattern.is_match(value) {
            Ok(())
        } else {
            Err(self.message.clone())
        }
    }

    fn message(&self) -> &str {
        &self.message
    }
}

/// Password validator: 6-100 ASCII letters or digits with at least one of
/// each.
///
/// The `regex` crate has no lookahead, so the letter/digit requirement is
/// checked separately from the charset pattern.
#[derive(Debug, Clone)]
pub struct PasswordValidator {
    charset: Regex,
    message: String,
}

impl PasswordValidator {
    /// Creates a new PasswordValidator with the catalog message.
    pub fn new() -> Self {
        Self {
            charset: Regex::new(r"^[A-Za-z0-9]{6,100}$").expect("valid password pattern"),
            message: Rule::Password.message().to_string(),
        }
    }
}

impl Default for PasswordValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator for PasswordValidator {
    fn validate(&self, value: &str) -> Result<(), String> {
        let has_letter = value.chars().any(|c| c.is_ascii_alphabetic());
        let has_digit = value.chars().any(|c| c.is_ascii_digit());
        if has_letter && has_digit && self.charset.is_match(value) {
            Ok(())
        } else {
            Err(self.message.clone())
        }
    }

    fn message(&self) -> &str {
        &self.message
    }
}

// `\d` is Unicode-aware in `regex`; the rules below are ASCII-only.
static NAME: LazyLock<RegexValidator> = LazyLock::new(|| {
    RegexValidator::new(r"^[A-Za-z0-9._-]{3,50}$", Rule::Name.message())
        .expect("valid name pattern")
});

static EMAIL: LazyLock<RegexValidator> = LazyLock::new(|| {
    RegexValidator::new(r"^\S+@\S+\.\S+$", Rule::Email.message()).expect("valid email pattern")
});

static PHONE_NUMBER: LazyLock<RegexValidator> = LazyLock::new(|| {
    RegexValidator::new(r"^[0-9]{10,}$", Rule::PhoneNumber.message())
        .expect("valid phone number pattern")
});

static PASSWORD: LazyLock<PasswordValidator> = LazyLock::new(PasswordValidator::new);

static PRICE: LazyLock<RegexValidator> = LazyLock::new(|| {
    RegexValidator::new(r"^[0-9]+(\.[0-9]+)?$", Rule::PriceFormat.message())
        .expect("valid price pattern")
});

static REQUIRED: LazyLock<RequiredValidator> = LazyLock::new(RequiredValidator::new);

/// The semantic format a field's value must satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    /// Account name: `[A-Za-z0-9._-]{3,50}`.
    Name,
    /// `local@domain.tld`.
    Email,
    /// At least ten digits.
    PhoneNumber,
    /// See [`PasswordValidator`].
    Password,
    /// Unsigned decimal.
    Price,
    /// No format constraint.
    Free,
}

impl Format {
    /// Resolves the format conventionally associated with a field key.
    pub fn for_key(key: &str) -> Self {
        match key {
            "name" => Self::Name,
            "email" => Self::Email,
            "phoneNumber" => Self::PhoneNumber,
            "password" => Self::Password,
            "price" => Self::Price,
            _ => Self::Free,
        }
    }

    fn validator(self) -> Option<&'static dyn Validator> {
        match self {
            Self::Name => Some(&*NAME),
            Self::Email => Some(&*EMAIL),
            Self::PhoneNumber => Some(&*PHONE_NUMBER),
            Self::Password => Some(&*PASSWORD),
            Self::Price => Some(&*PRICE),
            Self::Free => None,
        }
    }
}

/// Validates a value against the format implied by `key`.
///
/// Returns an empty string when the value is valid.
pub fn validate_field(key: &str, value: &str, required: bool) -> String {
    validate_format(Format::for_key(key), value, required)
}

/// Validates a value against an explicit format.
///
/// A blank value short-circuits: it fails with the required message when
/// `required` is set and passes otherwise, so optional fields are never
/// format-checked while empty.
pub fn validate_format(format: Format, value: &str, required: bool) -> String {
    if let Err(message) = REQUIRED.validate(value) {
        return if required { message } else { String::new() };
    }

    format
        .validator()
        .and_then(|validator| validator.validate(value).err())
        .unwrap_or_default()
}

/// Checks that `value` equals the value of its match target.
///
/// Returns `message` (or the catalog default) on mismatch.
pub fn validate_match(value: &str, other: &str, message: Option<&str>) -> String {
    if value == other {
        String::new()
    } else {
        message.unwrap_or(Rule::Mismatch.message()).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const REQUIRED_MSG: &str = "This field is required";

    #[test]
    fn test_required_blank_values() {
        for key in ["name", "email", "phoneNumber", "password", "price", "other"] {
            assert_eq!(validate_field(key, "", true), REQUIRED_MSG);
            assert_eq!(validate_field(key, "   ", true), REQUIRED_MSG);
        }
    }

    #[test]
    fn test_optional_blank_values_pass() {
        for key in ["name", "email", "phoneNumber", "password", "price", "other"] {
            assert_eq!(validate_field(key, "", false), "");
            assert_eq!(validate_field(key, " \t", false), "");
        }
    }

    #[test]
    fn test_name_format() {
        assert_eq!(validate_field("name", "ab", true), Rule::Name.message());
        assert_eq!(validate_field("name", "user_1.co-de", true), "");
        assert_eq!(validate_field("name", &"a".repeat(50), true), "");
        assert_eq!(validate_field("name", &"a".repeat(51), true), Rule::Name.message());
        assert_eq!(validate_field("name", "user name", true), Rule::Name.message());
        assert_eq!(validate_field("name", "user@123", true), Rule::Name.message());
        assert_eq!(validate_field("name", "userên", true), Rule::Name.message());
    }

    #[test]
    fn test_name_format_applies_to_optional_non_blank() {
        assert_eq!(validate_field("name", "ab", false), Rule::Name.message());
    }

    #[test]
    fn test_email_format() {
        assert_eq!(validate_field("email", "user@example.com", true), "");
        assert_eq!(validate_field("email", "user@example", true), Rule::Email.message());
        assert_eq!(validate_field("email", "invalid", true), Rule::Email.message());
    }

    #[test]
    fn test_phone_number_format() {
        assert_eq!(validate_field("phoneNumber", "0123456789", true), "");
        assert_eq!(
            validate_field("phoneNumber", "012345678", true),
            Rule::PhoneNumber.message()
        );
        assert_eq!(
            validate_field("phoneNumber", "012345678a", true),
            Rule::PhoneNumber.message()
        );
    }

    #[test]
    fn test_password_format() {
        assert_eq!(validate_field("password", "123456", true), Rule::Password.message());
        assert_eq!(validate_field("password", "abcdef", true), Rule::Password.message());
        assert_eq!(validate_field("password", "abc12", true), Rule::Password.message());
        assert_eq!(validate_field("password", "abc123", true), "");
        assert_eq!(validate_field("password", "Abc123", true), "");
        assert_eq!(validate_field("password", "abc 123", true), Rule::Password.message());
        assert_eq!(validate_field("password", "abc@123", true), Rule::Password.message());
        let long = format!("a1{}", "b".repeat(99));
        assert_eq!(validate_field("password", &long, true), Rule::Password.message());
    }

    #[test]
    fn test_price_format() {
        assert_eq!(validate_field("price", "12.5", true), "");
        assert_eq!(validate_field("price", "9999", true), "");
        assert_eq!(validate_field("price", "abc", true), Rule::PriceFormat.message());
        assert_eq!(validate_field("price", "-1", true), Rule::PriceFormat.message());
        assert_eq!(validate_field("price", "1.", true), Rule::PriceFormat.message());
    }

    #[test]
    fn test_unknown_key_is_free() {
        assert_eq!(validate_field("description", "anything at all", true), "");
        assert_eq!(validate_field("quantity", "abc", true), "");
    }

    #[test]
    fn test_validate_match() {
        assert_eq!(validate_match("Abc123", "Abc123", None), "");
        assert_eq!(validate_match("Abc124", "Abc123", None), "the field not match");
        assert_eq!(
            validate_match("Abc124", "Abc123", Some("confirming password do not match")),
            "confirming password do not match"
        );
    }

    #[test]
    fn test_regex_validator() {
        let v = RegexValidator::new(r"^\d{4}-\d{2}-\d{2}$", "Enter a valid date.").unwrap();
        assert!(v.validate("2024-01-15").is_ok());
        assert_eq!(v.validate("not a date"), Err("Enter a valid date.".to_string()));
        assert_eq!(v.message(), "Enter a valid date.");
    }
}
