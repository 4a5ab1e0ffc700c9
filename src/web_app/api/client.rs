//! HTTP client for the product API.
//!
//! The same code runs natively (tests, tooling) and in the browser, where
//! reqwest is backed by `fetch`. Every call is a single attempt: no retries
//! and no timeouts.

use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

use crate::web_app::config::CatalogConfig;
use crate::web_app::error::CatalogError;
use crate::web_app::model::ProductPage;

use super::query::ProductQuery;

/// Client for `GET {base}categories/` and `GET {base}?page=..`.
#[derive(Clone, Debug)]
pub struct ProductApi {
    client: Client,
    base: Url,
}

impl ProductApi {
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidBaseUrl`] if `config.api_base` is not an
    /// absolute http(s) URL.
    pub fn new(config: &CatalogConfig) -> Result<Self, CatalogError> {
        let base = Url::parse(&config.api_base).map_err(|e| CatalogError::InvalidBaseUrl {
            base: config.api_base.clone(),
            reason: e.to_string(),
        })?;

        if !matches!(base.scheme(), "http" | "https") {
            return Err(CatalogError::InvalidBaseUrl {
                base: config.api_base.clone(),
                reason: format!("unsupported scheme \"{}\"", base.scheme()),
            });
        }

        Ok(Self {
            client: Client::new(),
            base,
        })
    }

    pub fn categories_url(&self) -> Result<Url, CatalogError> {
        self.base
            .join("categories/")
            .map_err(|e| CatalogError::InvalidBaseUrl {
                base: self.base.to_string(),
                reason: e.to_string(),
            })
    }

    pub fn products_url(&self, query: &ProductQuery) -> Url {
        let mut url = self.base.clone();
        {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query.params() {
                pairs.append_pair(key, &value);
            }
        }
        url
    }

    /// Fetches the category names shown in the sidebar.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::Http`]: network failure.
    /// - [`CatalogError::UnexpectedStatus`]: any non-2xx response.
    /// - [`CatalogError::Deserialize`]: body is not a JSON array of strings.
    pub async fn categories(&self) -> Result<Vec<String>, CatalogError> {
        let url = self.categories_url()?;
        self.get_json(url, "categories").await
    }

    /// Fetches one page of products for `query`.
    ///
    /// # Errors
    ///
    /// Same as [`ProductApi::categories`].
    pub async fn products(&self, query: &ProductQuery) -> Result<ProductPage, CatalogError> {
        let url = self.products_url(query);
        self.get_json(url, "product listing").await
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: Url,
        context: &str,
    ) -> Result<T, CatalogError> {
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(url.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|source| CatalogError::Deserialize {
            context: context.to_string(),
            source,
        })
    }
}
