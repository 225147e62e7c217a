//! HTTP client for the country/city option API

use super::traits::OptionProvider;
use crate::state::{ApiOption, OptionKind};
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::time::Duration;

/// Client for the option API
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new API client
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint_url(&self, kind: OptionKind) -> String {
        format!("{}/{}", self.base_url, kind.endpoint())
    }
}

#[async_trait]
impl OptionProvider for ApiClient {
    async fn list_options(&self, kind: OptionKind) -> Result<Vec<ApiOption>> {
        let url = self.endpoint_url(kind);
        tracing::debug!(%url, "fetching options");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Failed to send request to {url}"))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Option API error {}: {}", status, body);
        }

        let options: Vec<ApiOption> = response
            .json()
            .await
            .with_context(|| format!("Failed to parse response from {url}"))?;

        tracing::debug!(%url, count = options.len(), "options fetched");
        Ok(options)
    }
}
