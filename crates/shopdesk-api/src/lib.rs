//! Backend access for the shopdesk admin front end.
//!
//! The page controllers talk to the backend through two traits,
//! [`ProductRepository`] and [`AuthRepository`]. This crate ships an HTTP
//! implementation built on a shared [`ApiClient`] and an in-memory one for
//! demos and tests.
//!
//! # Example
//!
//! ```rust,no_run
//! use shopdesk_api::{ApiClient, ClientConfig, PageQuery, ProductRepository};
//!
//! # async fn run() -> shopdesk_api::Result<()> {
//! let client = ApiClient::new(ClientConfig::default())?;
//! let page = client.products().list(PageQuery::default()).await?;
//! println!("{} pages", page.total_pages);
//! # Ok(())
//! # }
//! ```

mod config;
mod error;
mod http;
pub mod memory;
mod repository;
mod types;

pub use config::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use error::{ApiError, Result};
pub use http::{ApiClient, HttpAuthRepository, HttpProductRepository};
pub use memory::{InMemoryAuthRepository, InMemoryProductRepository};
pub use repository::{AuthRepository, ProductRepository};
pub use types::{
    Account, Category, Page, PageQuery, Product, ProductInput, SortDirection, SortField,
    UserSession,
};
