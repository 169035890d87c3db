//! Bootstrap 5 HTML templates for the product page.

mod base;
mod detail;
mod list;

pub use base::{render_layout, LayoutContext};
pub use detail::render_detail;
pub use list::{render_pagination, render_product_card, render_product_list, render_sort_controls};

use shopdesk_api::ProductRepository;
use shopdesk_forms::render_form;
use shopdesk_router::{Notifier, Route};

pub(crate) use shopdesk_forms::widgets::html_escape;

use crate::page::ProductPage;

/// Formats a price with thousands separators and at most two decimals.
pub fn format_price(price: f64) -> String {
    let cents = (price.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let fraction = cents % 100;

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if price < 0.0 { "-" } else { "" };
    if fraction == 0 {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped}.{fraction:02}")
    }
}

/// Renders the whole product page: sort controls, the open form, the
/// list, pagination and the detail popover.
pub fn render_product_page<R, M>(page: &ProductPage<R, M>, username: Option<&str>) -> String
where
    R: ProductRepository,
    M: Notifier,
{
    let mut content = String::new();
    content.push_str(r#"<h1 class="h3 mb-3">Product management</h1>"#);
    content.push_str(&format!(
        r#"<div class="d-flex justify-content-between mb-3">{}<button type="button" class="btn btn-primary" data-action="add"><i class="bi bi-plus-lg me-1"></i>Add product</button></div>"#,
        render_sort_controls(&page.params())
    ));

    if let Some(editor) = page.editor() {
        content.push_str(&render_form(editor.form(), Route::Admin.path()));
    }

    content.push_str(&render_product_list(page.products()));
    content.push_str(&render_pagination(page.params().page, page.total_pages()));

    if let Some(product) = page.detail() {
        content.push_str(&render_detail(Some(product)));
    }

    render_layout(&LayoutContext {
        page_title: "Products".to_string(),
        username: username.map(str::to_string),
        content,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(9999.0), "9,999");
        assert_eq!(format_price(1_500_000.5), "1,500,000.50");
        assert_eq!(format_price(12.5), "12.50");
        assert_eq!(format_price(0.0), "0");
        assert_eq!(format_price(999.0), "999");
    }
}
