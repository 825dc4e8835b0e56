// Google Custom Search JSON API implementation.
//
// Both tools search through the same endpoint: keyword research asks for a
// full page of ten results to extract phrases from, and the plagiarism
// checker searches each snippet verbatim. Pacing is the caller's job; the
// plagiarism checker owns a RequestPacer that covers searches and fetches.
//
// API docs: https://developers.google.com/custom-search/v1/reference/rest/v1/cse/list

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use super::models::SearchResponse;
use super::traits::SearchProvider;

/// Default Custom Search endpoint.
pub const DEFAULT_SEARCH_URL: &str = "https://www.googleapis.com/customsearch/v1";

/// Results requested per search (the API maximum).
pub const RESULTS_PER_PAGE: u8 = 10;

/// Google Custom Search client.
pub struct GoogleSearchClient {
    client: Client,
    endpoint: String,
    api_key: String,
    cx: String,
}

impl GoogleSearchClient {
    /// Create a client for the given API key and search engine ID.
    pub fn new(endpoint: &str, api_key: String, cx: String) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("wordsmith/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            api_key,
            cx,
        })
    }
}

#[async_trait]
impl SearchProvider for GoogleSearchClient {
    async fn search(&self, query: &str) -> Result<SearchResponse> {
        let num = RESULTS_PER_PAGE.to_string();

        debug!(query_preview = %crate::output::truncate_chars(query, 50), "Custom Search request");

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("key", self.api_key.as_str()),
                ("cx", self.cx.as_str()),
                ("q", query),
                ("num", num.as_str()),
            ])
            .send()
            .await
            .context("Failed to call Google Custom Search API")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorBody>(&body)
                .map(|b| b.error.message)
                .unwrap_or(body);
            anyhow::bail!("Google Custom Search returned {}: {}", status, message);
        }

        let parsed: SearchResponse = response
            .json()
            .await
            .context("Failed to parse Google Custom Search response")?;

        debug!(items = parsed.items.len(), "Custom Search response");

        Ok(parsed)
    }

    fn public_url(&self, query: &str) -> Option<String> {
        reqwest::Url::parse_with_params(&self.endpoint, &[("cx", self.cx.as_str()), ("q", query)])
            .ok()
            .map(String::from)
    }
}

// --- Error body ---

#[derive(Deserialize)]
struct ApiErrorBody {
    error: ApiError,
}

#[derive(Deserialize)]
struct ApiError {
    message: String,
}
