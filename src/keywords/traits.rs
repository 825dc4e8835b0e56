// Keyword extractor trait — swap-ready abstraction.
//
// The n-gram density extractor is the default. A different ranking (TF-IDF
// across result pages, embeddings) can implement this without touching
// keyword research or the CLI.

use super::density::{fragments_from_response, KeywordDensity};
use crate::search::models::SearchResponse;

/// Trait for turning text fragments into a phrase → statistics map.
pub trait KeywordExtractor: Send + Sync {
    /// Analyze a bag of text fragments.
    fn extract(&self, fragments: &[&str]) -> KeywordDensity;

    /// Analyze the text fields of a search response.
    fn extract_from_response(&self, response: &SearchResponse) -> KeywordDensity {
        self.extract(&fragments_from_response(response))
    }
}
