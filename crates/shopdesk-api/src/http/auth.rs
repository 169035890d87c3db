use futures::future::BoxFuture;
use reqwest::Method;

use super::ApiClient;
use crate::error::Result;
use crate::repository::AuthRepository;
use crate::types::{Account, LoginRequest, RegisterRequest, UserSession};

/// [`AuthRepository`] backed by the `/auth` endpoints.
///
/// The session lives in the client's cookie store, so every repository
/// created from the same [`ApiClient`] shares it.
#[derive(Debug, Clone)]
pub struct HttpAuthRepository {
    client: ApiClient,
}

impl HttpAuthRepository {
    pub(crate) fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

impl AuthRepository for HttpAuthRepository {
    fn login<'a>(
        &'a self,
        username: &'a str,
        password: &'a str,
    ) -> BoxFuture<'a, Result<UserSession>> {
        Box::pin(async move {
            let body = LoginRequest { username, password };
            self.client
                .json(Method::POST, "/auth/login", &[], Some(&body))
                .await
        })
    }

    fn current_user(&self) -> BoxFuture<'_, Result<UserSession>> {
        Box::pin(async move {
            self.client
                .json::<_, ()>(Method::GET, "/auth/current", &[], None)
                .await
        })
    }

    fn register<'a>(
        &'a self,
        username: &'a str,
        password: &'a str,
        confirm_password: &'a str,
    ) -> BoxFuture<'a, Result<Account>> {
        Box::pin(async move {
            let body = RegisterRequest {
                username,
                password,
                verify_password: confirm_password,
            };
            // 201 Created carries no body.
            self.client
                .empty(Method::POST, "/auth/register", Some(&body))
                .await?;
            Ok(Account {
                username: username.to_string(),
            })
        })
    }

    fn logout(&self) -> BoxFuture<'_, Result<()>> {
        Box::pin(async move {
            self.client
                .empty::<()>(Method::POST, "/auth/logout", None)
                .await
        })
    }
}
