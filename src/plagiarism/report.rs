// Plagiarism check results.
//
// Serialized in camelCase because the same structs are the JSON bodies of
// the web API.

use serde::{Deserialize, Serialize};

use crate::keywords::density::round2;

/// One candidate page scored against a snippet.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceMatch {
    pub url: String,
    pub title: String,
    /// Similarity percentage, rounded to 2 decimals
    pub similarity: f64,
    /// The first characters of the page text
    pub content_preview: String,
}

/// The outcome for one snippet.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnippetResult {
    pub snippet_index: usize,
    pub original_snippet: String,
    /// Highest similarity across the scored candidates (0 when none could be fetched)
    pub max_similarity: f64,
    pub sources: Vec<SourceMatch>,
}

/// The outcome for a whole article.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlagiarismReport {
    pub snippets: Vec<SnippetResult>,
    /// Mean of the per-snippet maxima, rounded to 2 decimals
    pub overall_score: f64,
    /// How many snippets the article was split into
    pub snippets_total: usize,
    /// How many of those returned search results and were scored
    pub snippets_searched: usize,
    /// How many candidate pages were fetched and scored
    pub sources_checked: usize,
}

impl PlagiarismReport {
    pub fn new(snippets: Vec<SnippetResult>, snippets_total: usize) -> Self {
        let snippets_searched = snippets.len();
        let sources_checked = snippets.iter().map(|s| s.sources.len()).sum();
        let overall_score = if snippets.is_empty() {
            0.0
        } else {
            round2(snippets.iter().map(|s| s.max_similarity).sum::<f64>() / snippets.len() as f64)
        };

        Self {
            snippets,
            overall_score,
            snippets_total,
            snippets_searched,
            sources_checked,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(index: usize, max: f64, sources: usize) -> SnippetResult {
        SnippetResult {
            snippet_index: index,
            original_snippet: format!("snippet {index}"),
            max_similarity: max,
            sources: (0..sources)
                .map(|i| SourceMatch {
                    url: format!("https://example.com/{i}"),
                    title: String::new(),
                    similarity: max,
                    content_preview: String::new(),
                })
                .collect(),
        }
    }

    #[test]
    fn test_overall_is_unweighted_mean() {
        let report = PlagiarismReport::new(vec![result(0, 80.0, 3), result(1, 20.0, 1)], 3);
        assert_eq!(report.overall_score, 50.0);
        assert_eq!(report.snippets_total, 3);
        assert_eq!(report.snippets_searched, 2);
        assert_eq!(report.sources_checked, 4);
    }

    #[test]
    fn test_empty_report() {
        let report = PlagiarismReport::new(vec![], 0);
        assert_eq!(report.overall_score, 0.0);
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(PlagiarismReport::new(vec![result(0, 10.0, 1)], 1)).unwrap();
        assert!(json.get("overallScore").is_some());
        assert!(json["snippets"][0].get("maxSimilarity").is_some());
        assert!(json["snippets"][0]["sources"][0].get("contentPreview").is_some());
    }
}
