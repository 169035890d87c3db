//! Bootstrap 5 rendering of a live form.

use ironhtml::html;
use ironhtml_elements::Div;

use crate::form::{FieldState, Form};
use crate::model::FieldModel;
use crate::widgets::{widget_for, WidgetAttrs};

/// Renders one field with its label, current value and error.
pub fn render_field(field: &FieldModel, state: &FieldState) -> String {
    let id = field.html_id.clone();
    let has_error = !state.error.is_empty();

    let mut attrs = WidgetAttrs::new().with("id", &id);
    if has_error {
        attrs.set("class", "is-invalid");
    }
    if field.required {
        attrs.set("required", "required");
    }

    let widget_html = widget_for(field).render(&field.key, &state.value, &attrs);
    let label_text = format!("{} :", field.label);
    let label_el = html! {
        label.for_(#id).class("form-label") { #label_text }
    };
    let error = state.error.clone();

    html! { div.class("mb-3") }
        .raw(label_el.render())
        .raw(&widget_html)
        .child::<Div, _>(|d| {
            d.class(if has_error {
                "invalid-feedback d-block"
            } else {
                "invalid-feedback"
            })
            .text(&error)
        })
        .render()
}

/// Renders a complete form posting to `action`.
///
/// Browser-side validation is disabled so the engine's messages are the
/// only ones shown.
pub fn render_form(form: &Form, action: &str) -> String {
    let model = form.model();
    let title = model.name.clone();

    let mut el = html! {
        form.action(#action).method("post")
    }
    .attr("novalidate", "novalidate");

    if form.is_closable() {
        el = el.child::<Div, _>(|d| {
            let close = html! {
                button.type_("button").class("btn-close")
            };
            d.class("d-flex justify-content-end")
                .raw(close.attr("aria-label", "Close").render())
        });
    }

    let heading_text = title.clone();
    let heading = html! { h1.class("h4 mb-3") { #heading_text } };
    el = el.child::<Div, _>(|d| d.raw(heading.render()));

    if let Some(id) = form.record_id() {
        let id_text = format!("ID: {id}");
        el = el.child::<Div, _>(|d| d.class("mb-2 text-muted").text(&id_text));
    }

    for field in &model.fields {
        let default_state = FieldState::default();
        let state = form.state(&field.key).unwrap_or(&default_state);
        let field_html = render_field(field, state);
        el = el.child::<Div, _>(|d| d.raw(&field_html));
    }

    let submit = html! {
        button.type_("submit").class("btn btn-primary") { #title }
    };
    el.child::<Div, _>(|d| d.raw(submit.render())).render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::Rule;
    use crate::schemas;
    use std::collections::HashMap;

    #[test]
    fn test_render_field_no_error() {
        let model = schemas::login();
        let field = model.field("name").unwrap();
        let state = FieldState {
            value: "alice".to_string(),
            error: String::new(),
        };

        let html = render_field(field, &state);
        assert!(html.contains("form-label"));
        assert!(html.contains("Name :"));
        assert!(html.contains(r#"value="alice""#));
        assert!(!html.contains("is-invalid"));
    }

    #[test]
    fn test_render_field_with_error() {
        let model = schemas::login();
        let field = model.field("password").unwrap();
        let state = FieldState {
            value: String::new(),
            error: Rule::Required.message().to_string(),
        };

        let html = render_field(field, &state);
        assert!(html.contains("is-invalid"));
        assert!(html.contains("This field is required"));
    }

    #[test]
    fn test_render_form_after_failed_submit() {
        let mut form = Form::new(schemas::add_product()).closable();
        assert!(form.submit().is_none());

        let html = render_form(&form, "/admin/products");
        assert!(html.contains("novalidate"));
        assert!(html.contains("btn-close"));
        assert!(html.contains("Add product"));
        assert!(html.contains(r#"id="addCategory""#));
        assert_eq!(html.matches("This field is required").count(), 4);
    }

    #[test]
    fn test_render_form_shows_record_id() {
        let record: HashMap<String, String> = [
            ("id".to_string(), "42".to_string()),
            ("productName".to_string(), "Pixel".to_string()),
            ("category".to_string(), "SMARTPHONE".to_string()),
        ]
        .into_iter()
        .collect();
        let form = Form::with_record(schemas::update_product(), &record);

        let html = render_form(&form, "/admin/products/42");
        assert!(html.contains("ID: 42"));
        assert!(html.contains(r#"value="Pixel""#));
        assert!(html.contains(r#"<option value="SMARTPHONE" selected>"#));
        assert!(!html.contains("btn-close"));
    }
}
