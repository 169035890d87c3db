//! Product list, sort controls and pagination.

use ironhtml::html;
use ironhtml_elements::{Div, P, H2};
use shopdesk_api::{Product, SortDirection, SortField};

use super::{format_price, html_escape};
use crate::page::ListParams;

const SORT_FIELDS: [(SortField, &str); 4] = [
    (SortField::Id, "ID"),
    (SortField::ProductName, "Name"),
    (SortField::Price, "Price"),
    (SortField::Quantity, "Quantity"),
];

const SORT_DIRECTIONS: [(SortDirection, &str); 2] = [
    (SortDirection::Asc, "Ascending"),
    (SortDirection::Desc, "Descending"),
];

/// Renders the product cards, or a placeholder when the list is empty.
pub fn render_product_list(products: &[Product]) -> String {
    if products.is_empty() {
        return r#"<p class="text-center text-muted py-5">No products.</p>"#.to_string();
    }

    let cards: Vec<String> = products.iter().map(render_product_card).collect();
    format!(
        r#"<div class="row row-cols-1 row-cols-md-3 g-3">{}</div>"#,
        cards.join("\n")
    )
}

/// Renders one product card with its detail, edit and delete actions.
pub fn render_product_card(product: &Product) -> String {
    let id = product.id.to_string();
    let name = product.product_name.as_str();
    let price = format_price(product.price);
    let quantity = format!("Quantity: {}", product.quantity);
    let category = format!("Category: {}", product.category);

    let detail = html! {
        button.type_("button").class("btn btn-link p-0") {
            i.class("bi bi-info-circle")
        }
    };
    let edit = html! {
        button.type_("button").class("btn btn-sm btn-outline-primary me-1") {
            i.class("bi bi-pencil me-1")
            "Edit"
        }
    };
    let delete = html! {
        button.type_("button").class("btn btn-sm btn-outline-danger") {
            i.class("bi bi-trash me-1")
            "Delete"
        }
    };

    let body = html! { div.class("card-body") }
        .child::<Div, _>(|d| {
            d.class("d-flex justify-content-between align-items-start")
                .child::<H2, _>(|h| h.class("h5 card-title").text(name))
                .raw(detail.attr("data-action", "detail").render())
        })
        .child::<P, _>(|p| p.class("fw-semibold mb-1").text(&price))
        .child::<P, _>(|p| p.class("mb-1").text(&quantity))
        .child::<P, _>(|p| p.class("mb-1").text(&category));

    let body = match product.description.as_deref().filter(|d| !d.is_empty()) {
        Some(description) => {
            let quoted = format!("\u{201c}{description}\u{201d}");
            body.child::<P, _>(|p| p.class("fst-italic text-muted").text(&quoted))
        }
        None => body,
    };

    let card = html! { div.class("card h-100") }
        .attr("data-product-id", &id)
        .raw(body.render())
        .child::<Div, _>(|d| {
            d.class("card-footer bg-white")
                .raw(edit.attr("data-action", "edit").render())
                .raw(delete.attr("data-action", "delete").render())
        });

    html! { div.class("col") }.raw(card.render()).render()
}

/// Renders the pagination bar.
///
/// `page` is 0-indexed and shown 1-indexed. Nothing is rendered when
/// there are no pages.
pub fn render_pagination(page: u32, total_pages: u32) -> String {
    if total_pages == 0 {
        return String::new();
    }

    let prev_disabled = if page == 0 { " disabled" } else { "" };
    let next_disabled = if page.saturating_add(1) >= total_pages { " disabled" } else { "" };

    format!(
        r#"<nav class="d-flex justify-content-center align-items-center gap-3 my-3" aria-label="pagination">
    <button type="button" class="btn btn-outline-secondary" data-page="{prev}"{prev_disabled}>&laquo; Previous</button>
    <span>Page {current} / {total_pages}</span>
    <button type="button" class="btn btn-outline-secondary" data-page="{next}"{next_disabled}>Next &raquo;</button>
</nav>"#,
        prev = page.saturating_sub(1),
        next = page.saturating_add(1),
        current = page.saturating_add(1),
    )
}

/// Renders the sort field and direction selects.
pub fn render_sort_controls(params: &ListParams) -> String {
    let fields: Vec<String> = SORT_FIELDS
        .iter()
        .map(|(field, label)| {
            option(field.as_str(), label, *field == params.sort_by)
        })
        .collect();
    let directions: Vec<String> = SORT_DIRECTIONS
        .iter()
        .map(|(dir, label)| option(dir.as_str(), label, *dir == params.sort_dir))
        .collect();

    format!(
        r#"<div class="d-flex gap-2">
    <select name="sortBy" class="form-select form-select-sm w-auto" aria-label="Sort by">{}</select>
    <select name="sortDir" class="form-select form-select-sm w-auto" aria-label="Sort direction">{}</select>
</div>"#,
        fields.join(""),
        directions.join("")
    )
}

fn option(value: &str, label: &str, selected: bool) -> String {
    format!(
        r#"<option value="{}"{}>{}</option>"#,
        html_escape(value),
        if selected { " selected" } else { "" },
        html_escape(label)
    )
}
