// N-gram keyword density.
//
// The input is a bag of text fragments (result titles, snippets, display
// links and the query echo from a search response). They are joined,
// normalized and filtered into a token stream; every run of 1 to 4
// consecutive surviving tokens is counted as a phrase.
//
// N-grams are built over the *filtered* stream, so two words separated only
// by a stop word in the source are adjacent here. Only phrases seen more
// than once are kept. Density uses the filtered unigram count as the
// denominator for every phrase length:
//
//   density = round2(100 * count / filtered_token_count)

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use super::stopwords::StopWords;
use super::traits::KeywordExtractor;
use crate::search::models::SearchResponse;
use crate::text::normalize;

/// Longest phrase, in tokens, that gets counted.
pub const MAX_NGRAM: usize = 4;

/// Tokens with this many characters or fewer are dropped.
pub const MAX_SHORT_TOKEN_CHARS: usize = 2;

/// Occurrence statistics for one phrase.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KeywordStats {
    /// How many times the phrase occurs in the filtered token stream (≥ 2)
    pub count: u32,
    /// Percentage of the filtered unigram count, rounded to 2 decimals
    pub density: f64,
    /// Number of tokens in the phrase (1 to 4)
    #[serde(rename = "wordCount")]
    pub word_count: u8,
}

/// Phrase → statistics. Ordered so serialized output is stable.
pub type KeywordDensity = BTreeMap<String, KeywordStats>;

/// The default extractor: n-grams of 1..=`max_ngram` filtered tokens.
#[derive(Debug, Clone)]
pub struct NgramDensityExtractor {
    pub stop_words: StopWords,
    pub max_ngram: usize,
}

impl Default for NgramDensityExtractor {
    fn default() -> Self {
        Self {
            stop_words: StopWords::seo(),
            max_ngram: MAX_NGRAM,
        }
    }
}

impl KeywordExtractor for NgramDensityExtractor {
    fn extract(&self, fragments: &[&str]) -> KeywordDensity {
        // Separate fragments with a space so the last word of one can't fuse
        // with the first word of the next.
        let combined = fragments.join(" ");
        let tokens = tokenize(&combined, &self.stop_words);
        density_from_tokens(&tokens, self.max_ngram)
    }
}

/// Normalize and filter text into the token stream n-grams are built from.
pub fn tokenize(text: &str, stop_words: &StopWords) -> Vec<String> {
    normalize(text)
        .split(' ')
        .filter(|w| w.len() > MAX_SHORT_TOKEN_CHARS)
        .filter(|w| !stop_words.contains(w))
        .filter(|w| !w.bytes().all(|b| b.is_ascii_digit()))
        .map(str::to_string)
        .collect()
}

/// All contiguous n-token phrases of `tokens`, joined by single spaces.
pub fn ngrams(tokens: &[String], n: usize) -> impl Iterator<Item = String> + '_ {
    // windows(0) panics; n = 0 yields nothing.
    let windows = if n == 0 {
        tokens[..0].windows(1)
    } else {
        tokens.windows(n)
    };
    windows.map(|window| window.join(" "))
}

/// Count every phrase of length 1..=`max_ngram` and keep the repeated ones.
pub fn density_from_tokens(tokens: &[String], max_ngram: usize) -> KeywordDensity {
    let total = tokens.len();
    if total == 0 {
        return KeywordDensity::new();
    }

    let mut counts: HashMap<String, u32> = HashMap::new();
    for n in 1..=max_ngram {
        for phrase in ngrams(tokens, n) {
            *counts.entry(phrase).or_insert(0) += 1;
        }
    }

    counts
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .map(|(phrase, count)| {
            let word_count = phrase.split(' ').count() as u8;
            let stats = KeywordStats {
                count,
                density: round2(100.0 * count as f64 / total as f64),
                word_count,
            };
            (phrase, stats)
        })
        .collect()
}

/// Collect the text fragments of a search response in a fixed order:
/// each item's title, snippet and display link, then the search terms and
/// title of every request / nextPage / previousPage query.
pub fn fragments_from_response(response: &SearchResponse) -> Vec<&str> {
    let mut fragments = Vec::new();

    for item in &response.items {
        fragments.extend(item.title.as_deref());
        fragments.extend(item.snippet.as_deref());
        fragments.extend(item.display_link.as_deref());
    }

    let queries = &response.queries;
    for group in [&queries.request, &queries.next_page, &queries.previous_page] {
        for query in group {
            fragments.extend(query.search_terms.as_deref());
            fragments.extend(query.title.as_deref());
        }
    }

    fragments
}

/// Sort phrases for display: highest density first, then longer phrases,
/// then alphabetically.
pub fn rank_by_density(keywords: &KeywordDensity) -> Vec<(&str, &KeywordStats)> {
    let mut ranked: Vec<(&str, &KeywordStats)> =
        keywords.iter().map(|(k, v)| (k.as_str(), v)).collect();
    ranked.sort_by(|a, b| {
        b.1.density
            .partial_cmp(&a.1.density)
            .unwrap_or(Ordering::Equal)
            .then_with(|| b.1.word_count.cmp(&a.1.word_count))
            .then_with(|| a.0.cmp(b.0))
    });
    ranked
}

/// Round to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
