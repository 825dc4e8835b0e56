// HTTP content fetcher.
//
// Result pages are fetched with a browser User-Agent (many sites refuse
// obvious bots) and reduced to body text. Non-success statuses and pages
// with no readable text come back as None, not as errors.

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use super::html::body_text;
use super::traits::ContentFetcher;

/// User-Agent sent with page fetches.
pub const BROWSER_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

pub struct HttpContentFetcher {
    client: Client,
}

impl HttpContentFetcher {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent(BROWSER_USER_AGENT)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self { client })
    }
}

#[async_trait]
impl ContentFetcher for HttpContentFetcher {
    async fn fetch_text(&self, url: &str) -> Result<Option<String>> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .with_context(|| format!("Failed to fetch {url}"))?;

        if !response.status().is_success() {
            debug!(url, status = %response.status(), "Page fetch returned non-success");
            return Ok(None);
        }

        let html = response
            .text()
            .await
            .with_context(|| format!("Failed to read body of {url}"))?;

        let text = body_text(&html);
        debug!(url, chars = text.len(), "Fetched page text");

        Ok(if text.is_empty() { None } else { Some(text) })
    }
}
