//! # shopdesk-admin
//!
//! The product management page of the shopdesk admin.
//!
//! [`ProductPage`] keeps the visible page of products, the list
//! parameters, the open add/edit form and the detail popover. It talks to
//! the backend through a [`ProductRepository`](shopdesk_api::ProductRepository)
//! and reports to the user through a [`Notifier`](shopdesk_router::Notifier).
//!
//! Submitted products go through two layers of validation: the inline
//! field rules of the form, then [`validate_product`] on the coerced
//! record.
//!
//! ## Example
//!
//! ```rust
//! use shopdesk_admin::{ProductPage, SubmitOutcome};
//! use shopdesk_api::InMemoryProductRepository;
//! use shopdesk_router::RecordingNotifier;
//!
//! # futures::executor::block_on(async {
//! let mut page = ProductPage::new(
//!     InMemoryProductRepository::new(),
//!     RecordingNotifier::accepting(),
//! );
//! page.reload().await.unwrap();
//!
//! page.open_add_form();
//! page.on_change("productName", "iPhone 99").unwrap();
//! page.on_change("price", "9999").unwrap();
//! page.on_change("quantity", "10").unwrap();
//! page.on_change("category", "SMARTPHONE").unwrap();
//!
//! assert!(matches!(page.submit_editor().await.unwrap(), SubmitOutcome::Saved(_)));
//! assert_eq!(page.products()[0].product_name, "iPhone 99");
//! # });
//! ```

mod error;
mod page;
pub mod templates;
mod validation;

pub use error::{AdminError, Result};
pub use page::{
    DeleteOutcome, Editor, ListParams, LoadState, ProductPage, SubmitOutcome, ADD_FAILURE,
    ADD_SUCCESS, DEFAULT_PAGE_SIZE, DELETE_FAILURE, DELETE_PROMPT, DELETE_SUCCESS,
    UPDATE_FAILURE, UPDATE_SUCCESS,
};
pub use validation::{validate_product, ProductDraft, MAX_PRICE, MAX_QUANTITY};
