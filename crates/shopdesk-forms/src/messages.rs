//! Validation message catalog.
//!
//! Inline field validation and record-wide product validation both pull
//! their text from here, keyed by [`Rule`].

/// Identifies a validation rule whose failure produces a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    /// Value is missing or blank.
    Required,
    /// Account name format.
    Name,
    /// Email address format.
    Email,
    /// Phone number digit count.
    PhoneNumber,
    /// Password composition and length.
    Password,
    /// Decimal price format.
    PriceFormat,
    /// Field does not equal its match target.
    Mismatch,
    /// Product name length (record-wide).
    ProductNameLength,
    /// Product price lower bound (record-wide).
    PriceRange,
    /// Product price upper bound (record-wide).
    PriceMaximum,
    /// Product quantity lower bound and integrality (record-wide).
    QuantityRange,
    /// Product quantity upper bound (record-wide).
    QuantityMaximum,
    /// Product description length (record-wide).
    DescriptionLength,
    /// Product category membership (record-wide).
    Category,
}

impl Rule {
    /// Returns the user-facing message for this rule.
    pub fn message(self) -> &'static str {
        match self {
            Self::Required => "This field is required",
            Self::Name => {
                r#"Name must be 3-50 characters long and can only contain letters, numbers, ".", "-", or "_""#
            }
            Self::Email => "Invalid email. Example: someone@example.com",
            Self::PhoneNumber => "Phone Number must have at least 10 digits",
            Self::Password => {
                "Password must be 6-100 characters long and contain at least one letter and one number"
            }
            Self::PriceFormat => "Price should have digits only",
            Self::Mismatch => "the field not match",
            Self::ProductNameLength => "Product name must be 3-100 characters",
            Self::PriceRange => "Price must be greater than 0",
            Self::PriceMaximum => "Price must not exceed 999,999,999",
            Self::QuantityRange => "Quantity must be a whole number >= 0",
            Self::QuantityMaximum => "Quantity must not exceed 99,999",
            Self::DescriptionLength => "Description must not exceed 500 characters",
            Self::Category => "Invalid category",
        }
    }
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_message() {
        assert_eq!(Rule::Required.message(), "This field is required");
        assert_eq!(Rule::Required.to_string(), "This field is required");
    }

    #[test]
    fn test_mismatch_default() {
        assert_eq!(Rule::Mismatch.message(), "the field not match");
    }
}
