// Stop-word sets for keyword extraction.
//
// The default set is a short, closed list of English function words tuned
// for search-result text. The extended set merges in the full English list
// from the `stop-words` crate for callers that want more aggressive
// filtering (e.g. density over long-form prose).

use std::collections::HashSet;

use stop_words::{get, LANGUAGE};

/// The closed list used by keyword research.
pub const SEO_STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
    "is", "are", "was", "were", "be", "been", "being", "have", "has", "had", "do", "does",
    "did", "will", "would", "could", "should", "may", "might", "must", "can", "this", "that",
    "these", "those", "i", "you", "he", "she", "it", "we", "they", "me", "him", "her", "us",
    "them", "my", "your", "his", "its", "our", "their", "from", "as", "so", "if", "when",
    "where", "how", "what", "why", "who",
];

/// A set of lowercase words to drop during tokenization.
#[derive(Debug, Clone)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    /// The closed keyword-research list.
    pub fn seo() -> Self {
        Self {
            words: SEO_STOP_WORDS.iter().map(|w| (*w).to_string()).collect(),
        }
    }

    /// The closed list plus the full English list from the `stop-words` crate.
    pub fn english() -> Self {
        let mut set = Self::seo();
        set.words
            .extend(get(LANGUAGE::English).into_iter().map(|w| w.to_lowercase()));
        set
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for StopWords {
    fn default() -> Self {
        Self::seo()
    }
}
