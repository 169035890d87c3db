//! The product detail popover.

use ironhtml::html;
use ironhtml_elements::{Div, Span};
use shopdesk_api::Product;

use super::format_price;

const MISSING: &str = "-";

/// Renders the detail popover. Absent values show as "-".
pub fn render_detail(product: Option<&Product>) -> String {
    let name = product
        .map(|p| p.product_name.clone())
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| MISSING.to_string());
    let price = product.map_or_else(|| MISSING.to_string(), |p| format_price(p.price));
    let category = product.map_or_else(|| MISSING.to_string(), |p| p.category.to_string());
    let quantity = product.map_or_else(|| MISSING.to_string(), |p| p.quantity.to_string());
    let description = product
        .and_then(|p| p.description.clone())
        .filter(|d| !d.is_empty())
        .unwrap_or_else(|| MISSING.to_string());

    let rows = [
        ("Name:", name),
        ("Price:", price),
        ("Category:", category),
        ("Quantity:", quantity),
        ("Description:", description),
    ];

    let close = html! {
        button.type_("button").class("btn-close")
    };
    let title = html! { h2.class("h5 mb-0") { "Product details" } };

    let mut board = html! { div.class("card shadow") }.child::<Div, _>(|d| {
        d.class("card-header d-flex justify-content-between align-items-center")
            .raw(title.render())
            .raw(close.attr("aria-label", "Close").render())
    });

    for (label, value) in &rows {
        board = board.child::<Div, _>(|d| {
            d.class("d-flex gap-2 px-3 py-1")
                .child::<Span, _>(|s| s.class("fw-semibold").text(*label))
                .child::<Span, _>(|s| s.text(value.as_str()))
        });
    }

    html! { div.class("product-detail position-fixed top-50 start-50 translate-middle") }
        .raw(board.render())
        .render()
}
