//! Bootstrap 5 input widgets.

use super::{html_escape, Widget, WidgetAttrs};

/// Bootstrap 5 `<input>` for text, number and password fields.
#[derive(Debug, Clone)]
pub struct BootstrapTextInput {
    input_type: String,
    placeholder: Option<String>,
}

impl BootstrapTextInput {
    /// Creates an input of the given HTML type.
    pub fn new(input_type: impl Into<String>) -> Self {
        Self {
            input_type: input_type.into(),
            placeholder: None,
        }
    }

    /// Sets the placeholder text.
    #[must_use]
    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = Some(text.into());
        self
    }
}

impl Widget for BootstrapTextInput {
    fn render(&self, name: &str, value: &str, attrs: &WidgetAttrs) -> String {
        let id = attrs.get("id").unwrap_or(name);
        let class = match attrs.get("class") {
            Some(extra) => format!("form-control {extra}"),
            None => "form-control".to_string(),
        };
        let placeholder_attr = self
            .placeholder
            .as_ref()
            .map(|p| format!(r#" placeholder="{}""#, html_escape(p)))
            .unwrap_or_default();

        format!(
            r#"<input type="{}" class="{class}" id="{}" name="{}" value="{}"{placeholder_attr}{}>"#,
            self.input_type,
            html_escape(id),
            html_escape(name),
            html_escape(value),
            attrs.extra_html(),
        )
    }
}

/// Bootstrap 5 `<select>` whose option values double as labels.
#[derive(Debug, Clone)]
pub struct BootstrapSelect {
    options: Vec<String>,
    blank_label: String,
}

impl BootstrapSelect {
    /// Creates a select over the given options.
    pub fn new(options: Vec<String>) -> Self {
        Self {
            options,
            blank_label: "Select...".to_string(),
        }
    }

    /// Sets the label of the leading blank option.
    #[must_use]
    pub fn blank_label(mut self, label: impl Into<String>) -> Self {
        self.blank_label = label.into();
        self
    }
}

impl Widget for BootstrapSelect {
    fn render(&self, name: &str, value: &str, attrs: &WidgetAttrs) -> String {
        let id = attrs.get("id").unwrap_or(name);
        let class = match attrs.get("class") {
            Some(extra) => format!("form-select {extra}"),
            None => "form-select".to_string(),
        };

        let mut options = format!(
            r#"<option value="">{}</option>"#,
            html_escape(&self.blank_label)
        );
        for option in &self.options {
            let selected = if option == value { " selected" } else { "" };
            let option = html_escape(option);
            options.push_str(&format!(
                r#"<option value="{option}"{selected}>{option}</option>"#
            ));
        }

        format!(
            r#"<select class="{class}" id="{}" name="{}"{}>{options}</select>"#,
            html_escape(id),
            html_escape(name),
            attrs.extra_html(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_input_escapes_value() {
        let widget = BootstrapTextInput::new("text");
        let html = widget.render("productName", "<b>", &WidgetAttrs::new().with("id", "addProductName"));
        assert!(html.contains(r#"id="addProductName""#));
        assert!(html.contains(r#"value="&lt;b&gt;""#));
        assert!(html.contains(r#"class="form-control""#));
    }

    #[test]
    fn test_invalid_class_is_appended() {
        let widget = BootstrapTextInput::new("password");
        let html = widget.render("password", "", &WidgetAttrs::new().with("class", "is-invalid"));
        assert!(html.contains(r#"type="password""#));
        assert!(html.contains(r#"class="form-control is-invalid""#));
    }

    #[test]
    fn test_select_blank_option() {
        let widget = BootstrapSelect::new(vec!["LAPTOPS".to_string()]).blank_label("Pick one");
        let html = widget.render("category", "", &WidgetAttrs::new());
        assert!(html.contains(r#"<option value="">Pick one</option>"#));
        assert!(html.contains(r#"<option value="LAPTOPS">LAPTOPS</option>"#));
        assert!(!html.contains("selected"));
    }
}
