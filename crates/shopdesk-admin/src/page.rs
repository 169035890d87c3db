//! The product page controller.

use shopdesk_api::{
    ApiError, PageQuery, Product, ProductInput, ProductRepository, SortDirection, SortField,
};
use shopdesk_forms::{schemas, Form, Payload, ValidationErrors};
use shopdesk_router::{Level, Notifier};
use tracing::{debug, error};

use crate::error::{AdminError, Result};
use crate::validation::ProductDraft;

/// Default number of products per page.
pub const DEFAULT_PAGE_SIZE: u32 = 5;

pub const ADD_SUCCESS: &str = "Product added successfully";
pub const UPDATE_SUCCESS: &str = "Product updated successfully";
pub const DELETE_SUCCESS: &str = "Product deleted successfully";
pub const ADD_FAILURE: &str = "Failed to add product";
pub const UPDATE_FAILURE: &str = "Failed to update product";
pub const DELETE_FAILURE: &str = "Failed to delete product";
pub const DELETE_PROMPT: &str = "Are you sure you want to delete this product?";

/// Page, size and ordering of the product list.
///
/// `page` is 0-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListParams {
    pub page: u32,
    pub page_size: u32,
    pub sort_by: SortField,
    pub sort_dir: SortDirection,
}

impl Default for ListParams {
    fn default() -> Self {
        Self {
            page: 0,
            page_size: DEFAULT_PAGE_SIZE,
            sort_by: SortField::Id,
            sort_dir: SortDirection::Asc,
        }
    }
}

impl ListParams {
    fn query(self) -> PageQuery {
        PageQuery {
            page: self.page,
            limit: self.page_size,
            sort_by: self.sort_by,
            sort_dir: self.sort_dir,
        }
    }
}

/// Progress of the product list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Loaded,
}

/// The open product form.
#[derive(Debug, Clone)]
pub enum Editor {
    Add(Form),
    Edit { id: i64, form: Form },
}

impl Editor {
    pub fn form(&self) -> &Form {
        match self {
            Self::Add(form) | Self::Edit { form, .. } => form,
        }
    }

    pub fn form_mut(&mut self) -> &mut Form {
        match self {
            Self::Add(form) | Self::Edit { form, .. } => form,
        }
    }
}

/// Result of submitting a product.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// Inline field validation failed; errors are on the form.
    Invalid,
    /// The record-wide rules failed.
    Rejected(ValidationErrors),
    /// The backend refused the request.
    Failed(ApiError),
    /// The product was stored.
    Saved(Product),
}

/// Result of a delete request.
#[derive(Debug)]
pub enum DeleteOutcome {
    /// The user declined the confirmation.
    Cancelled,
    Failed(ApiError),
    Deleted,
}

/// Lists, pages, sorts and edits products.
///
/// Every mutation waits for the backend before reloading the current
/// page, so the list never runs ahead of a pending write. A failed call
/// leaves the list, the parameters and the open form as they were.
pub struct ProductPage<R, M> {
    repo: R,
    notifier: M,
    params: ListParams,
    products: Vec<Product>,
    total_pages: u32,
    state: LoadState,
    editor: Option<Editor>,
    detail: Option<Product>,
}

impl<R: ProductRepository, M: Notifier> ProductPage<R, M> {
    pub fn new(repo: R, notifier: M) -> Self {
        Self {
            repo,
            notifier,
            params: ListParams::default(),
            products: Vec::new(),
            total_pages: 0,
            state: LoadState::Idle,
            editor: None,
            detail: None,
        }
    }

    pub fn params(&self) -> ListParams {
        self.params
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn product(&self, id: i64) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    pub fn editor(&self) -> Option<&Editor> {
        self.editor.as_ref()
    }

    pub fn detail(&self) -> Option<&Product> {
        self.detail.as_ref()
    }

    /// Returns true when a previous page exists.
    pub fn has_previous(&self) -> bool {
        self.params.page > 0
    }

    /// Returns true when a next page exists.
    pub fn has_next(&self) -> bool {
        self.params.page.saturating_add(1) < self.total_pages
    }

    /// Fetches one page and, on success, replaces the list and the
    /// parameters.
    ///
    /// On failure the error is logged and returned; nothing changes.
    pub async fn load_page(&mut self, params: ListParams) -> Result<()> {
        let previous = self.state;
        self.state = LoadState::Loading;
        debug!(?params, "loading products");

        match self.repo.list(params.query()).await {
            Ok(page) => {
                self.params = params;
                self.products = page.content;
                self.total_pages = page.total_pages;
                self.state = LoadState::Loaded;
                Ok(())
            }
            Err(err) => {
                error!(error = %err, "failed to fetch products");
                self.state = previous;
                Err(err.into())
            }
        }
    }

    /// Fetches the current page again.
    pub async fn reload(&mut self) -> Result<()> {
        self.load_page(self.params).await
    }

    pub async fn go_to_page(&mut self, page: u32) -> Result<()> {
        self.load_page(ListParams { page, ..self.params }).await
    }

    /// Moves forward one page; does nothing on the last page.
    pub async fn next_page(&mut self) -> Result<()> {
        if !self.has_next() {
            return Ok(());
        }
        self.go_to_page(self.params.page.saturating_add(1)).await
    }

    /// Moves back one page; does nothing on the first page.
    pub async fn previous_page(&mut self) -> Result<()> {
        if !self.has_previous() {
            return Ok(());
        }
        self.go_to_page(self.params.page - 1).await
    }

    pub async fn set_sort(&mut self, sort_by: SortField, sort_dir: SortDirection) -> Result<()> {
        self.load_page(ListParams {
            sort_by,
            sort_dir,
            ..self.params
        })
        .await
    }

    /// Changes the page size and returns to the first page.
    pub async fn set_page_size(&mut self, page_size: u32) -> Result<()> {
        self.load_page(ListParams {
            page: 0,
            page_size,
            ..self.params
        })
        .await
    }

    /// Opens an empty add-product form.
    pub fn open_add_form(&mut self) {
        self.editor = Some(Editor::Add(Form::new(schemas::add_product()).closable()));
    }

    /// Opens the update form prefilled from `product`.
    pub fn select_for_edit(&mut self, product: &Product) {
        let form = Form::with_record(schemas::update_product(), &product.to_record()).closable();
        self.editor = Some(Editor::Edit {
            id: product.id,
            form,
        });
    }

    /// Shows `product` in the detail popover.
    pub fn select_for_detail(&mut self, product: &Product) {
        self.detail = Some(product.clone());
    }

    pub fn close_detail(&mut self) {
        self.detail = None;
    }

    /// Closes the open form, if any.
    pub fn close_form(&mut self) {
        if let Some(editor) = self.editor.take() {
            editor.form().close(|| debug!(form = %editor.form().model().name, "form closed"));
        }
    }

    /// Forwards a value change to the open form.
    pub fn on_change(&mut self, key: &str, value: impl Into<String>) -> Result<()> {
        let editor = self.editor.as_mut().ok_or(AdminError::NoEditor)?;
        Ok(editor.form_mut().on_change(key, value)?)
    }

    /// Forwards a blur to the open form.
    pub fn on_blur(&mut self, key: &str) -> Result<()> {
        let editor = self.editor.as_mut().ok_or(AdminError::NoEditor)?;
        Ok(editor.form_mut().on_blur(key)?)
    }

    /// Validates the open form and creates or updates the product.
    pub async fn submit_editor(&mut self) -> Result<SubmitOutcome> {
        let editor = self.editor.as_mut().ok_or(AdminError::NoEditor)?;
        let id = match editor {
            Editor::Add(_) => None,
            Editor::Edit { id, .. } => Some(*id),
        };
        let Some(payload) = editor.form_mut().submit() else {
            return Ok(SubmitOutcome::Invalid);
        };

        Ok(match id {
            None => self.create_product(&payload).await,
            Some(id) => self.update_product(id, &payload).await,
        })
    }

    /// Coerces `payload` and creates a product.
    ///
    /// On success the form closes, the user is notified and the current
    /// page is reloaded.
    pub async fn create_product(&mut self, payload: &Payload) -> SubmitOutcome {
        let input = match self.prepare(payload) {
            Ok(input) => input,
            Err(outcome) => return outcome,
        };

        match self.repo.create(&input).await {
            Ok(product) => {
                debug!(id = product.id, "product created");
                self.editor = None;
                self.notifier.notify(Level::Success, ADD_SUCCESS);
                self.reload_after_write().await;
                SubmitOutcome::Saved(product)
            }
            Err(err) => self.write_failed(err, ADD_FAILURE),
        }
    }

    /// Coerces `payload` and replaces product `id`.
    pub async fn update_product(&mut self, id: i64, payload: &Payload) -> SubmitOutcome {
        let input = match self.prepare(payload) {
            Ok(input) => input,
            Err(outcome) => return outcome,
        };

        match self.repo.update(id, &input).await {
            Ok(product) => {
                debug!(id, "product updated");
                self.editor = None;
                if self.detail.as_ref().is_some_and(|p| p.id == id) {
                    self.detail = Some(product.clone());
                }
                self.notifier.notify(Level::Success, UPDATE_SUCCESS);
                self.reload_after_write().await;
                SubmitOutcome::Saved(product)
            }
            Err(err) => self.write_failed(err, UPDATE_FAILURE),
        }
    }

    /// Asks for confirmation, then deletes product `id`.
    pub async fn delete_product(&mut self, id: i64) -> DeleteOutcome {
        if !self.notifier.confirm(DELETE_PROMPT) {
            return DeleteOutcome::Cancelled;
        }

        match self.repo.delete(id).await {
            Ok(()) => {
                debug!(id, "product deleted");
                if self.detail.as_ref().is_some_and(|p| p.id == id) {
                    self.detail = None;
                }
                self.notifier.notify(Level::Success, DELETE_SUCCESS);
                self.reload_after_write().await;
                DeleteOutcome::Deleted
            }
            Err(err) => {
                error!(id, error = %err, "failed to delete product");
                self.notifier
                    .notify(Level::Error, err.backend_message().unwrap_or(DELETE_FAILURE));
                DeleteOutcome::Failed(err)
            }
        }
    }

    fn prepare(&self, payload: &Payload) -> std::result::Result<ProductInput, SubmitOutcome> {
        ProductDraft::from_payload(payload).into_input().map_err(|errors| {
            debug!(errors = errors.len(), "product rejected");
            let summary = errors
                .iter()
                .map(|(_, message)| message)
                .collect::<Vec<_>>()
                .join("\n");
            self.notifier.notify(Level::Error, &summary);
            SubmitOutcome::Rejected(errors)
        })
    }

    fn write_failed(&self, err: ApiError, fallback: &str) -> SubmitOutcome {
        error!(error = %err, "product write failed");
        self.notifier
            .notify(Level::Error, err.backend_message().unwrap_or(fallback));
        SubmitOutcome::Failed(err)
    }

    async fn reload_after_write(&mut self) {
        // Already logged by load_page; the write itself succeeded.
        let _ = self.reload().await;
    }
}
