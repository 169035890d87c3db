//! Input widgets for rendering form fields.

mod bootstrap;

pub use bootstrap::{BootstrapSelect, BootstrapTextInput};

use std::collections::BTreeMap;

use crate::model::{FieldModel, InputKind};

/// Extra HTML attributes applied to a widget.
#[derive(Debug, Clone, Default)]
pub struct WidgetAttrs {
    attrs: BTreeMap<String, String>,
}

impl WidgetAttrs {
    /// Creates new empty widget attributes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an attribute.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.attrs.insert(key.into(), value.into());
    }

    /// Gets an attribute.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.attrs.get(key).map(String::as_str)
    }

    /// Builder method to set an attribute.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// Renders every attribute except `id` and `class` as ` key="value"`.
    fn extra_html(&self) -> String {
        self.attrs
            .iter()
            .filter(|(k, _)| k.as_str() != "class" && k.as_str() != "id")
            .map(|(k, v)| format!(r#" {k}="{}""#, html_escape(v)))
            .collect()
    }
}

/// Trait for widgets that render an HTML input.
pub trait Widget: Send + Sync {
    /// Renders the widget for field `name` holding `value`.
    fn render(&self, name: &str, value: &str, attrs: &WidgetAttrs) -> String;
}

/// Picks the widget for a field's input kind.
pub fn widget_for(field: &FieldModel) -> Box<dyn Widget> {
    match &field.kind {
        InputKind::Select { options } => Box::new(BootstrapSelect::new(options.clone())),
        kind => {
            let mut input = BootstrapTextInput::new(kind.input_type());
            if let Some(placeholder) = &field.placeholder {
                input = input.placeholder(placeholder);
            }
            Box::new(input)
        }
    }
}

/// Escapes HTML special characters.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_escape() {
        assert_eq!(html_escape("<script>"), "&lt;script&gt;");
        assert_eq!(html_escape("\"test\""), "&quot;test&quot;");
        assert_eq!(html_escape("a & b"), "a &amp; b");
    }

    #[test]
    fn test_extra_attrs_skip_id_and_class() {
        let attrs = WidgetAttrs::new()
            .with("class", "is-invalid")
            .with("id", "x")
            .with("required", "required");
        assert_eq!(attrs.extra_html(), r#" required="required""#);
        assert_eq!(attrs.get("id"), Some("x"));
    }

    #[test]
    fn test_widget_for_kind() {
        let price = FieldModel::new("price", "Price", InputKind::Number).placeholder("Enter price");
        let html = widget_for(&price).render("price", "12", &WidgetAttrs::new());
        assert!(html.contains(r#"type="number""#));
        assert!(html.contains(r#"placeholder="Enter price""#));

        let category = FieldModel::new("category", "Category", InputKind::select(["A", "B"]));
        let html = widget_for(&category).render("category", "B", &WidgetAttrs::new());
        assert!(html.starts_with("<select"));
        assert!(html.contains(r#"<option value="B" selected>B</option>"#));
    }
}
