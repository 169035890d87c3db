//! Record-wide product validation.
//!
//! Runs on the submitted payload after the inline field checks pass and
//! mirrors the rules the backend applies to a whole product.

use shopdesk_api::{Category, ProductInput};
use shopdesk_forms::messages::Rule;
use shopdesk_forms::{Payload, ValidationErrors};

/// Largest accepted price.
pub const MAX_PRICE: f64 = 999_999_999.0;

/// Largest accepted quantity.
pub const MAX_QUANTITY: i64 = 99_999;

const NAME_MIN: usize = 3;
const NAME_MAX: usize = 100;
const DESCRIPTION_MAX: usize = 500;

/// A product payload with numeric fields coerced.
///
/// Fields that fail to parse are kept as `None` so the validator can
/// report them.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    pub product_name: String,
    pub price: Option<f64>,
    pub quantity: Option<i64>,
    pub description: String,
    pub category: Option<Category>,
}

impl ProductDraft {
    /// Coerces a form payload.
    ///
    /// Prices accept any finite decimal; quantities must be whole numbers.
    /// Categories match case-insensitively.
    pub fn from_payload(payload: &Payload) -> Self {
        let field = |key: &str| payload.get(key).map(|v| v.trim()).unwrap_or_default();

        Self {
            product_name: field("productName").to_string(),
            price: field("price").parse::<f64>().ok().filter(|p| p.is_finite()),
            quantity: field("quantity").parse().ok(),
            description: field("description").to_string(),
            category: field("category").parse().ok(),
        }
    }

    /// Converts a valid draft into the wire body.
    ///
    /// Returns the validation errors when the draft is not valid.
    pub fn into_input(self) -> Result<ProductInput, ValidationErrors> {
        let errors = validate_product(&self);
        match (self.price, self.quantity, self.category) {
            (Some(price), Some(quantity), Some(category)) if errors.is_empty() => {
                Ok(ProductInput {
                    product_name: self.product_name,
                    price,
                    quantity,
                    description: self.description,
                    category,
                })
            }
            _ => Err(errors),
        }
    }
}

/// Checks a draft against the product rules.
///
/// The draft is valid iff the returned map is empty.
pub fn validate_product(draft: &ProductDraft) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    let name_len = draft.product_name.chars().count();
    if !(NAME_MIN..=NAME_MAX).contains(&name_len) {
        errors.add("productName", Rule::ProductNameLength.message());
    }

    match draft.price {
        Some(price) if price > MAX_PRICE => errors.add("price", Rule::PriceMaximum.message()),
        Some(price) if price > 0.0 => {}
        _ => errors.add("price", Rule::PriceRange.message()),
    }

    match draft.quantity {
        Some(quantity) if quantity > MAX_QUANTITY => {
            errors.add("quantity", Rule::QuantityMaximum.message())
        }
        Some(quantity) if quantity >= 0 => {}
        _ => errors.add("quantity", Rule::QuantityRange.message()),
    }

    if draft.description.chars().count() > DESCRIPTION_MAX {
        errors.add("description", Rule::DescriptionLength.message());
    }

    if draft.category.is_none() {
        errors.add("category", Rule::Category.message());
    }

    errors
}
