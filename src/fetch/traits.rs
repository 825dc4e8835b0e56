// Content fetcher trait.
//
// `Ok(None)` means "nothing usable at that URL" (non-success status, empty
// body). `Err` means the request itself failed. The plagiarism checker
// treats both as "this candidate contributes nothing" and moves on.

use anyhow::Result;
use async_trait::async_trait;

#[async_trait]
pub trait ContentFetcher: Send + Sync {
    /// Fetch `url` and return its readable text.
    async fn fetch_text(&self, url: &str) -> Result<Option<String>>;
}
