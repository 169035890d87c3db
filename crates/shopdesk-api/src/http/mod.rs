//! reqwest-backed repositories.
//!
//! A single [`ApiClient`] owns the connection pool and the cookie store
//! holding the session cookie set at login; the repositories are cheap
//! handles onto it.

mod auth;
mod products;

pub use auth::HttpAuthRepository;
pub use products::HttpProductRepository;

use std::sync::Arc;

use reqwest::{header, Method};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;
use url::Url;

use crate::config::ClientConfig;
use crate::error::{ApiError, Result};

/// HTTP client for the shopdesk backend.
#[derive(Debug, Clone)]
pub struct ApiClient {
    inner: Arc<ClientInner>,
}

#[derive(Debug)]
struct ClientInner {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    /// Creates a client from the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let base_url = config.base_url.trim_end_matches('/').to_string();
        Url::parse(&base_url)?;

        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(config.user_agent)
            .timeout(config.timeout)
            .cookie_store(true)
            .build()
            .map_err(|e| ApiError::Config(e.to_string()))?;

        Ok(Self {
            inner: Arc::new(ClientInner { base_url, http }),
        })
    }

    /// Returns the product repository.
    pub fn products(&self) -> HttpProductRepository {
        HttpProductRepository::new(self.clone())
    }

    /// Returns the auth repository.
    pub fn auth(&self) -> HttpAuthRepository {
        HttpAuthRepository::new(self.clone())
    }

    fn url(&self, path: &str, params: &[(&str, String)]) -> Result<Url> {
        let mut url = Url::parse(&format!("{}{}", self.inner.base_url, path))?;
        if !params.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in params {
                pairs.append_pair(key, value);
            }
        }
        Ok(url)
    }

    /// Sends a request and decodes a JSON response body.
    pub(crate) async fn json<T, B>(
        &self,
        method: Method,
        path: &str,
        params: &[(&str, String)],
        body: Option<&B>,
    ) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let bytes = self.send(method, path, params, body).await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Sends a request and discards the response body.
    pub(crate) async fn empty<B>(&self, method: Method, path: &str, body: Option<&B>) -> Result<()>
    where
        B: Serialize + ?Sized,
    {
        self.send(method, path, &[], body).await.map(|_| ())
    }

    async fn send<B>(
        &self,
        method: Method,
        path: &str,
        params: &[(&str, String)],
        body: Option<&B>,
    ) -> Result<Vec<u8>>
    where
        B: Serialize + ?Sized,
    {
        let url = self.url(path, params)?;
        debug!(%method, %url, "sending request");

        let mut request = self.inner.http.request(method, url);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;
        debug!(status = status.as_u16(), len = bytes.len(), "response received");

        if status.is_success() {
            return Ok(bytes.to_vec());
        }

        let text = String::from_utf8_lossy(&bytes).trim().to_string();
        Err(ApiError::Status {
            status: status.as_u16(),
            message: (!text.is_empty()).then_some(text),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_base_path() {
        let client = ApiClient::new(ClientConfig::new("http://localhost:8080/api/")).unwrap();
        let url = client
            .url("/products", &[("page", "0".to_string()), ("sortBy", "id".to_string())])
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:8080/api/products?page=0&sortBy=id"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        let err = ApiClient::new(ClientConfig::new("not a url")).unwrap_err();
        assert!(matches!(err, ApiError::Url(_)));
    }
}
