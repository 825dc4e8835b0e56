// Plagiarism check pipeline.
//
// Strategy: split the article into snippets, search each snippet, fetch the
// top MAX_CANDIDATES result pages and score the snippet against each page's
// text. A snippet's score is its best candidate; the article's score is the
// mean over snippets.
//
// Everything is strictly sequential. Every outbound call, search or fetch,
// first goes through the RequestPacer, so with the default 1 s interval a
// ten-snippet article takes on the order of 40 seconds. A failed or empty
// fetch contributes nothing to its snippet; a snippet whose search fails or
// comes back empty is left out of the report. Nothing here aborts the run
// except invalid input.

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info, warn};

use super::report::{PlagiarismReport, SnippetResult, SourceMatch};
use super::similarity::similarity;
use super::snippets::{split_snippets, SnippetLimits};
use crate::error::TextError;
use crate::fetch::traits::ContentFetcher;
use crate::keywords::density::round2;
use crate::rate_limiter::RequestPacer;
use crate::search::models::SearchResponse;
use crate::search::traits::SearchProvider;

/// Result pages scored per snippet.
pub const MAX_CANDIDATES: usize = 3;

/// Characters of page text kept as a preview (always followed by "...").
pub const CONTENT_PREVIEW_CHARS: usize = 200;

/// Tunables for a check.
#[derive(Debug, Clone)]
pub struct CheckerSettings {
    pub limits: SnippetLimits,
    pub max_candidates: usize,
    pub preview_chars: usize,
    /// Draw a terminal progress bar while checking
    pub show_progress: bool,
}

impl Default for CheckerSettings {
    fn default() -> Self {
        Self {
            limits: SnippetLimits::default(),
            max_candidates: MAX_CANDIDATES,
            preview_chars: CONTENT_PREVIEW_CHARS,
            show_progress: false,
        }
    }
}

/// Runs plagiarism checks against a search provider and a page fetcher.
pub struct PlagiarismChecker<'a> {
    search: &'a dyn SearchProvider,
    fetcher: &'a dyn ContentFetcher,
    pacer: &'a dyn RequestPacer,
    settings: CheckerSettings,
}

impl<'a> PlagiarismChecker<'a> {
    pub fn new(
        search: &'a dyn SearchProvider,
        fetcher: &'a dyn ContentFetcher,
        pacer: &'a dyn RequestPacer,
        settings: CheckerSettings,
    ) -> Self {
        Self {
            search,
            fetcher,
            pacer,
            settings,
        }
    }

    /// Check an article end to end.
    ///
    /// Fails with `TextError::EmptyInput` or `TextError::ArticleTooLong`
    /// (downcastable from the anyhow error) before any network call.
    pub async fn check(&self, article: &str) -> Result<PlagiarismReport> {
        if article.trim().is_empty() {
            return Err(TextError::EmptyInput.into());
        }
        let snippets = split_snippets(article, &self.settings.limits)?;

        info!(snippets = snippets.len(), "Checking article for plagiarism");

        let pb = if self.settings.show_progress {
            let pb = ProgressBar::new(snippets.len() as u64);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("  Snippets [{bar:30}] {pos}/{len} ({eta})")
                    .expect("static template"),
            );
            pb
        } else {
            ProgressBar::hidden()
        };

        let mut results = Vec::with_capacity(snippets.len());

        for (index, snippet) in snippets.iter().enumerate() {
            self.pacer.acquire().await;
            match self.search.search(snippet).await {
                Ok(response) if !response.items.is_empty() => {
                    results.push(self.score_snippet(index, snippet, &response).await);
                }
                Ok(_) => {
                    info!(snippet = index, "No search results for snippet, skipping");
                }
                Err(e) => {
                    warn!(snippet = index, error = %e, "Snippet search failed, skipping");
                }
            }
            pb.inc(1);
        }
        pb.finish_and_clear();

        let report = PlagiarismReport::new(results, snippets.len());
        info!(
            overall = report.overall_score,
            searched = report.snippets_searched,
            sources = report.sources_checked,
            "Plagiarism check complete"
        );
        Ok(report)
    }

    /// Fetch and score the top candidates for one snippet.
    async fn score_snippet(
        &self,
        index: usize,
        snippet: &str,
        response: &SearchResponse,
    ) -> SnippetResult {
        let mut sources = Vec::new();
        let mut max_similarity: f64 = 0.0;

        // The candidate window is the top results as ranked; a link-less
        // item still uses up one of the slots.
        for item in response.items.iter().take(self.settings.max_candidates) {
            let Some(url) = item.link.as_deref() else {
                continue;
            };

            self.pacer.acquire().await;
            let text = match self.fetcher.fetch_text(url).await {
                Ok(Some(text)) => text,
                Ok(None) => {
                    debug!(snippet = index, url, "No readable content, skipping");
                    continue;
                }
                Err(e) => {
                    warn!(snippet = index, url, error = %e, "Page fetch failed, skipping");
                    continue;
                }
            };

            let score = similarity(snippet, &text);
            debug!(snippet = index, url, score, "Scored candidate");
            max_similarity = max_similarity.max(score);

            sources.push(SourceMatch {
                url: url.to_string(),
                title: item.title.clone().unwrap_or_default(),
                similarity: round2(score),
                content_preview: preview(&text, self.settings.preview_chars),
            });
        }

        SnippetResult {
            snippet_index: index,
            original_snippet: snippet.to_string(),
            max_similarity,
            sources,
        }
    }
}

/// The first `chars` characters of a page followed by "...", whether or
/// not anything was cut.
fn preview(text: &str, chars: usize) -> String {
    let head: String = text.chars().take(chars).collect();
    format!("{head}...")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_always_marks_continuation() {
        assert_eq!(preview("short page", 200), "short page...");
        assert_eq!(preview("héllo wörld", 5), "héllo...");
    }
}
