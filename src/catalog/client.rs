use anyhow::{Context, Result};
use serde::Deserialize;
use std::time::Duration;

use crate::models::{CatalogItem, WireItem};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<WireItem>,
    #[serde(default)]
    #[allow(dead_code)]
    total: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct CategoriesResponse {
    #[serde(default)]
    categories: Vec<String>,
}

/// Blocking client for the catalog search service. One request at a time,
/// issued from the UI thread, so responses always land in request order.
pub struct SearchClient {
    http: reqwest::blocking::Client,
    base_url: String,
}

impl SearchClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Free-text search. An empty query is legal and returns the default
    /// page, up to `limit` items.
    pub fn search(&self, query: &str, limit: usize) -> Result<Vec<CatalogItem>> {
        let url = format!("{}/api/search", self.base_url);
        let limit = limit.to_string();
        let resp: SearchResponse = self
            .http
            .get(&url)
            .query(&[("q", query), ("limit", limit.as_str())])
            .send()
            .with_context(|| format!("Search request failed: {url}"))?
            .error_for_status()
            .context("Search service returned an error")?
            .json()
            .context("Search response was not valid JSON")?;

        Ok(ingest(resp.items))
    }

    /// All known catalog categories.
    pub fn categories(&self) -> Result<Vec<String>> {
        let url = format!("{}/api/categories", self.base_url);
        let resp: CategoriesResponse = self
            .http
            .get(&url)
            .send()
            .with_context(|| format!("Categories request failed: {url}"))?
            .error_for_status()
            .context("Search service returned an error")?
            .json()
            .context("Categories response was not valid JSON")?;
        Ok(resp.categories)
    }

    /// All items in one category, up to `limit`.
    pub fn by_category(&self, category: &str, limit: usize) -> Result<Vec<CatalogItem>> {
        let url = format!("{}/api/category/{category}", self.base_url);
        let resp: SearchResponse = self
            .http
            .get(&url)
            .query(&[("limit", limit.to_string())])
            .send()
            .with_context(|| format!("Category request failed: {url}"))?
            .error_for_status()
            .context("Search service returned an error")?
            .json()
            .context("Category response was not valid JSON")?;
        Ok(ingest(resp.items))
    }
}

fn ingest(items: Vec<WireItem>) -> Vec<CatalogItem> {
    items.into_iter().map(CatalogItem::from_wire).collect()
}
