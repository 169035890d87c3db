//! Repository traits consumed by the page controllers.

use std::sync::Arc;

use futures::future::BoxFuture;

use crate::error::Result;
use crate::types::{Account, Page, PageQuery, Product, ProductInput, UserSession};

/// Product CRUD against the backend.
pub trait ProductRepository: Send + Sync {
    /// Fetches one page of products.
    fn list(&self, query: PageQuery) -> BoxFuture<'_, Result<Page<Product>>>;

    /// Fetches a single product.
    fn get(&self, id: i64) -> BoxFuture<'_, Result<Product>>;

    /// Creates a product.
    fn create<'a>(&'a self, input: &'a ProductInput) -> BoxFuture<'a, Result<Product>>;

    /// Replaces the fields of an existing product.
    fn update<'a>(&'a self, id: i64, input: &'a ProductInput) -> BoxFuture<'a, Result<Product>>;

    /// Deletes a product.
    fn delete(&self, id: i64) -> BoxFuture<'_, Result<()>>;
}

/// Account and session operations against the backend.
pub trait AuthRepository: Send + Sync {
    /// Authenticates and establishes a session.
    fn login<'a>(&'a self, username: &'a str, password: &'a str)
        -> BoxFuture<'a, Result<UserSession>>;

    /// Returns the user owning the current session.
    fn current_user(&self) -> BoxFuture<'_, Result<UserSession>>;

    /// Creates an account.
    fn register<'a>(
        &'a self,
        username: &'a str,
        password: &'a str,
        confirm_password: &'a str,
    ) -> BoxFuture<'a, Result<Account>>;

    /// Ends the current session.
    fn logout(&self) -> BoxFuture<'_, Result<()>>;
}

impl<T: ProductRepository + ?Sized> ProductRepository for Arc<T> {
    fn list(&self, query: PageQuery) -> BoxFuture<'_, Result<Page<Product>>> {
        (**self).list(query)
    }

    fn get(&self, id: i64) -> BoxFuture<'_, Result<Product>> {
        (**self).get(id)
    }

    fn create<'a>(&'a self, input: &'a ProductInput) -> BoxFuture<'a, Result<Product>> {
        (**self).create(input)
    }

    fn update<'a>(&'a self, id: i64, input: &'a ProductInput) -> BoxFuture<'a, Result<Product>> {
        (**self).update(id, input)
    }

    fn delete(&self, id: i64) -> BoxFuture<'_, Result<()>> {
        (**self).delete(id)
    }
}

impl<T: AuthRepository + ?Sized> AuthRepository for Arc<T> {
    fn login<'a>(
        &'a self,
        username: &'a str,
        password: &'a str,
    ) -> BoxFuture<'a, Result<UserSession>> {
        (**self).login(username, password)
    }

    fn current_user(&self) -> BoxFuture<'_, Result<UserSession>> {
        (**self).current_user()
    }

    fn register<'a>(
        &'a self,
        username: &'a str,
        password: &'a str,
        confirm_password: &'a str,
    ) -> BoxFuture<'a, Result<Account>> {
        (**self).register(username, password, confirm_password)
    }

    fn logout(&self) -> BoxFuture<'_, Result<()>> {
        (**self).logout()
    }
}
