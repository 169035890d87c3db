use futures::future::BoxFuture;
use reqwest::Method;

use super::ApiClient;
use crate::error::Result;
use crate::repository::ProductRepository;
use crate::types::{Page, PageQuery, Product, ProductInput};

/// [`ProductRepository`] backed by the `/products` endpoints.
#[derive(Debug, Clone)]
pub struct HttpProductRepository {
    client: ApiClient,
}

impl HttpProductRepository {
    pub(crate) fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

impl ProductRepository for HttpProductRepository {
    fn list(&self, query: PageQuery) -> BoxFuture<'_, Result<Page<Product>>> {
        Box::pin(async move {
            self.client
                .json::<_, ()>(Method::GET, "/products", &query.to_params(), None)
                .await
        })
    }

    fn get(&self, id: i64) -> BoxFuture<'_, Result<Product>> {
        Box::pin(async move {
            self.client
                .json::<_, ()>(Method::GET, &format!("/products/{id}"), &[], None)
                .await
        })
    }

    fn create<'a>(&'a self, input: &'a ProductInput) -> BoxFuture<'a, Result<Product>> {
        Box::pin(async move {
            self.client
                .json(Method::POST, "/products", &[], Some(input))
                .await
        })
    }

    fn update<'a>(&'a self, id: i64, input: &'a ProductInput) -> BoxFuture<'a, Result<Product>> {
        Box::pin(async move {
            self.client
                .json(Method::PUT, &format!("/products/{id}"), &[], Some(input))
                .await
        })
    }

    fn delete(&self, id: i64) -> BoxFuture<'_, Result<()>> {
        Box::pin(async move {
            self.client
                .empty::<()>(Method::DELETE, &format!("/products/{id}"), None)
                .await
        })
    }
}
