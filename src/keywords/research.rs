// Keyword research flow: cache first, then search + extract + store.
//
// Search terms are trimmed before use and normalized (lowercased) as cache
// keys, so "SEO Tools" and " seo tools" share one entry. The cache is an
// optimization only: a failed read falls through to a live search, and a
// failed write is logged while the live result is still returned.

use anyhow::Result;
use serde::Serialize;
use tracing::{info, warn};

use super::density::KeywordDensity;
use super::traits::KeywordExtractor;
use crate::db::models::{CachedSearch, NewSearch};
use crate::db::KeywordCache;
use crate::error::TextError;
use crate::search::traits::SearchProvider;

/// What keyword research hands back to the CLI and the web API.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResearchOutcome {
    pub title: String,
    pub total_results: String,
    pub search_terms: String,
    pub search_time: f64,
    pub keywords: KeywordDensity,
    pub keyword_count: usize,
    pub cached: bool,
    pub cached_at: Option<String>,
}

pub struct KeywordResearch<'a> {
    search: &'a dyn SearchProvider,
    extractor: &'a dyn KeywordExtractor,
    cache: Option<&'a dyn KeywordCache>,
}

impl<'a> KeywordResearch<'a> {
    pub fn new(
        search: &'a dyn SearchProvider,
        extractor: &'a dyn KeywordExtractor,
        cache: Option<&'a dyn KeywordCache>,
    ) -> Self {
        Self {
            search,
            extractor,
            cache,
        }
    }

    /// Research a search term. With `refresh`, skip the cache read and
    /// always make a live search (the fresh result is still stored).
    pub async fn research(&self, term: &str, refresh: bool) -> Result<ResearchOutcome> {
        let clean = term.trim();
        if clean.is_empty() {
            return Err(TextError::EmptyInput.into());
        }

        if !refresh {
            if let Some(cache) = self.cache {
                match cache.get(clean).await {
                    Ok(Some(hit)) => {
                        info!(term = clean, cached_at = %hit.created_at, "Returning cached keywords");
                        return Ok(outcome_from_cache(clean, hit));
                    }
                    Ok(None) => {}
                    Err(e) => warn!(error = %e, "Keyword cache read failed, searching live"),
                }
            }
        }

        info!(term = clean, "Searching for keyword research");
        let response = self.search.search(clean).await?;
        let keywords = self.extractor.extract_from_response(&response);

        let title = response
            .request_title()
            .map(str::to_string)
            .unwrap_or_else(|| default_title(clean));
        let total_results = response
            .search_information
            .total_results
            .clone()
            .unwrap_or_else(|| "0".to_string());
        let search_time = response.search_information.search_time.unwrap_or(0.0);

        if let Some(cache) = self.cache {
            let url = self.search.public_url(clean);
            let stored = cache
                .store(&NewSearch {
                    search_query: clean,
                    keywords: &keywords,
                    url: url.as_deref(),
                    title: Some(&title),
                    total_results: Some(&total_results),
                    search_time: Some(search_time),
                })
                .await;
            match stored {
                Ok(id) => info!(id, "Stored keyword research result"),
                Err(e) => warn!(error = %e, "Failed to store keyword research result"),
            }
        }

        Ok(ResearchOutcome {
            title,
            total_results,
            search_terms: clean.to_string(),
            search_time,
            keyword_count: keywords.len(),
            keywords,
            cached: false,
            cached_at: None,
        })
    }
}

fn default_title(term: &str) -> String {
    format!("Search results for \"{term}\"")
}

fn outcome_from_cache(term: &str, hit: CachedSearch) -> ResearchOutcome {
    // Rows written before result metadata was stored only have keywords;
    // report the summed phrase occurrences as the total in that case.
    let total_results = hit.total_results.unwrap_or_else(|| {
        hit.keywords
            .values()
            .map(|k| u64::from(k.count))
            .sum::<u64>()
            .to_string()
    });

    ResearchOutcome {
        title: hit.title.unwrap_or_else(|| default_title(term)),
        total_results,
        search_terms: term.to_string(),
        search_time: hit.search_time.unwrap_or(0.0),
        keyword_count: hit.keywords.len(),
        keywords: hit.keywords,
        cached: true,
        cached_at: Some(hit.created_at),
    }
}
