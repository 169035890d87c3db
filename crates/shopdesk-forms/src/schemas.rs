//! Built-in form models.

use crate::model::{FieldModel, FormModel, InputKind};

/// Category values accepted by the product forms, in display order.
pub const PRODUCT_CATEGORIES: [&str; 4] = ["SMARTPHONE", "LAPTOPS", "HEADPHONES", "CAMERAS"];

/// The sign-in form.
pub fn login() -> FormModel {
    FormModel::new(
        "Sign in",
        vec![
            FieldModel::new("name", "Name", InputKind::Text)
                .required()
                .placeholder("Enter Your Name"),
            FieldModel::new("password", "Password", InputKind::Password)
                .required()
                .placeholder("Enter Your Password"),
        ],
    )
}

/// The account registration form.
pub fn register() -> FormModel {
    FormModel::new(
        "Register",
        vec![
            FieldModel::new("name", "Name", InputKind::Text)
                .required()
                .placeholder("Enter your Name"),
            FieldModel::new("password", "Password", InputKind::Password)
                .required()
                .placeholder("Enter Your Password"),
            FieldModel::new("confirmPassword", "Confirm Password", InputKind::Password)
                .required()
                .placeholder("Enter Your Password")
                .matches("password", Some("confirming password do not match")),
        ],
    )
}

/// The add-product form.
pub fn add_product() -> FormModel {
    product_form("Add product", "add")
}

/// The update-product form.
pub fn update_product() -> FormModel {
    product_form("Update product", "update")
}

fn product_form(name: &str, id_prefix: &str) -> FormModel {
    FormModel::new(
        name,
        vec![
            FieldModel::new("productName", "Product Name", InputKind::Text)
                .html_id(format!("{id_prefix}ProductName"))
                .required()
                .placeholder("Enter product name"),
            FieldModel::new("price", "Price", InputKind::Number)
                .html_id(format!("{id_prefix}Price"))
                .required()
                .placeholder("Enter price"),
            FieldModel::new("quantity", "Quantity", InputKind::Number)
                .html_id(format!("{id_prefix}Quantity"))
                .required()
                .placeholder("Enter quantity"),
            FieldModel::new("description", "Description", InputKind::Text)
                .html_id(format!("{id_prefix}Description"))
                .placeholder("Enter description..."),
            FieldModel::new(
                "category",
                "Category",
                InputKind::select(PRODUCT_CATEGORIES),
            )
            .html_id(format!("{id_prefix}Category"))
            .required(),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::Format;

    #[test]
    fn test_builtin_models_are_well_formed() {
        for model in [login(), register(), add_product(), update_product()] {
            assert!(model.check().is_ok(), "{} is malformed", model.name);
        }
    }

    #[test]
    fn test_register_confirm_matches_password() {
        let model = register();
        let confirm = model.field("confirmPassword").unwrap();
        assert_eq!(confirm.match_field.as_deref(), Some("password"));
        assert_eq!(
            confirm.error_message.as_deref(),
            Some("confirming password do not match")
        );
        assert!(!confirm.prefill_from_match);
    }

    #[test]
    fn test_product_form_layout() {
        let model = add_product();
        assert_eq!(
            model.keys().collect::<Vec<_>>(),
            vec!["productName", "price", "quantity", "description", "category"]
        );
        assert_eq!(model.field("price").unwrap().format, Format::Price);
        assert_eq!(model.field("productName").unwrap().html_id, "addProductName");
        assert!(!model.field("description").unwrap().required);
        assert_eq!(model.field("category").unwrap().kind.options().len(), 4);
        assert_eq!(update_product().field("price").unwrap().html_id, "updatePrice");
    }
}
