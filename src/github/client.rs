use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};
use serde::Deserialize;
use serde_json::Value;

use crate::config::GitHubConfig;

/// One page of repository search results.
///
/// `encoded_query` has already been through
/// [`encode_query`](crate::github::query::encode_query) and is sent verbatim.
#[async_trait]
pub trait SearchBackend: Send + Sync {
    async fn search_page(&self, encoded_query: &str, per_page: usize) -> Result<Vec<Value>>;
}

/// reqwest-backed client for `<base_url>/search/repositories`.
///
/// Standard headers and the optional bearer token are set once on the
/// underlying client.
#[derive(Clone)]
pub struct GitHubClient {
    http: reqwest::Client,
    base_url: String,
}

#[derive(Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<Value>,
}

impl GitHubClient {
    pub fn new(config: &GitHubConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static("repo-rank/0.1"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));
        headers.insert("x-github-api-version", HeaderValue::from_static("2022-11-28"));
        if let Some(token) = config.token.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
            let mut value = HeaderValue::from_str(&format!("Bearer {token}"))
                .context("GitHub token contains characters not allowed in a header")?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .connect_timeout(Duration::from_secs(5))
            .timeout(request_timeout(config))
            .build()
            .context("Failed to build search HTTP client")?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Single-page search URL, sorted by stars descending.
    pub fn search_url(&self, encoded_query: &str, per_page: usize) -> String {
        format!(
            "{}/search/repositories?q={encoded_query}&sort=stars&order=desc&per_page={per_page}&page=1",
            self.base_url
        )
    }
}

/// Per-request timeout, kept within 1..=60 seconds however the config was built.
fn request_timeout(config: &GitHubConfig) -> Duration {
    Duration::from_secs(config.timeout_secs.clamp(1, 60))
}

#[async_trait]
impl SearchBackend for GitHubClient {
    async fn search_page(&self, encoded_query: &str, per_page: usize) -> Result<Vec<Value>> {
        let url = self.search_url(encoded_query, per_page);
        tracing::debug!("GET {url}");

        let resp = self
            .http
            .get(&url)
            .send()
            .await
            .context("Failed to call repository search API")?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            anyhow::bail!("Repository search API returned {status}: {body}");
        }

        let body: SearchResponse = resp
            .json()
            .await
            .context("Failed to parse repository search response")?;
        Ok(body.items)
    }
}
