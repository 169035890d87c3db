//! Page layout with the session header.

use ironhtml::html;
use ironhtml::typed::{Document, Element};
use ironhtml_elements::{Body, Div, Head, Html, Link, Main, Meta, Nav, Span, Title, I};

/// Inputs of the page layout.
#[derive(Debug, Clone)]
pub struct LayoutContext {
    pub page_title: String,
    /// Signed-in user shown in the header.
    pub username: Option<String>,
    /// Main content HTML.
    pub content: String,
}

/// Renders a complete document around `ctx.content`.
pub fn render_layout(ctx: &LayoutContext) -> String {
    let title = format!("{} | Shopdesk", ctx.page_title);

    Document::new()
        .doctype()
        .root::<Html, _>(|html_el| {
            html_el
                .attr("lang", "en")
                .child::<Head, _>(|head| {
                    head.child::<Meta, _>(|m| m.attr("charset", "UTF-8"))
                        .child::<Meta, _>(|m| {
                            m.attr("name", "viewport")
                                .attr("content", "width=device-width, initial-scale=1.0")
                        })
                        .child::<Title, _>(|t| t.text(&title))
                        .child::<Link, _>(|l| {
                            l.attr("href", "https://cdn.jsdelivr.net/npm/bootstrap@5.3.2/dist/css/bootstrap.min.css")
                                .attr("rel", "stylesheet")
                        })
                        .child::<Link, _>(|l| {
                            l.attr("href", "https://cdn.jsdelivr.net/npm/bootstrap-icons@1.11.1/font/bootstrap-icons.css")
                                .attr("rel", "stylesheet")
                        })
                })
                .child::<Body, _>(|body| {
                    body.child::<Nav, _>(|n| render_header(n, ctx.username.as_deref()))
                        .child::<Main, _>(|m| {
                            m.class("container py-4")
                                .child::<Div, _>(|d| d.raw(&ctx.content))
                        })
                })
        })
        .build()
}

fn render_header(nav: Element<Nav>, username: Option<&str>) -> Element<Nav> {
    let logout = html! {
        form.action("/logout").method("post") {
            button.type_("submit").class("btn btn-outline-light btn-sm") {
                i.class("bi bi-box-arrow-right")
            }
        }
    };

    nav.class("navbar navbar-dark bg-dark px-4")
        .child::<Div, _>(|d| {
            d.class("d-flex align-items-center gap-2 text-white")
                .child::<I, _>(|i| i.class("bi bi-person-circle fs-4"))
                .child::<Span, _>(|s| s.class("username").text(username.unwrap_or_default()))
        })
        .child::<Div, _>(|d| d.raw(logout.attr("aria-label", "Log out").render()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_shows_user() {
        let html = render_layout(&LayoutContext {
            page_title: "Products".to_string(),
            username: Some("alice".to_string()),
            content: "<p>body</p>".to_string(),
        });
        assert!(html.contains(r#"lang="en""#));
        assert!(html.contains("Products | Shopdesk"));
        assert!(html.contains("alice"));
        assert!(html.contains("<p>body</p>"));
        assert!(html.contains(r#"action="/logout""#));
    }
}
