// Search provider trait — swap-ready abstraction over the web search API.
//
// The Google Custom Search client is the only implementation today. Tests
// use in-memory fakes so the pipelines run without network access.

use anyhow::Result;
use async_trait::async_trait;

use super::models::SearchResponse;

/// A web search backend that returns Custom Search shaped responses.
#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Run a search for `query` and return the parsed response.
    async fn search(&self, query: &str) -> Result<SearchResponse>;

    /// A shareable URL for `query` with no credentials in it, recorded
    /// alongside cached results. None when the provider has no such URL.
    fn public_url(&self, _query: &str) -> Option<String> {
        None
    }
}
