// Snippet ↔ document word-overlap score.
//
// One-directional set overlap: the share of the snippet's distinct words
// that also appear anywhere in the candidate document.
//
//   similarity = 100 * |{w ∈ S : w ∈ D, len(w) > 2}| / |S|
//
// where S and D are the distinct normalized tokens of the snippet and the
// document. Words of two characters or fewer never count as a match but
// still count in the denominator, which biases the score downward on
// short-word-heavy snippets. That asymmetry is intentional.
//
// This is a coarse likelihood signal, not a Jaccard index: there is no
// union in the denominator and word order and frequency are ignored.

use std::collections::HashSet;

use crate::text::normalize;

/// Tokens this short never count as a match.
pub const MAX_UNMATCHED_TOKEN_CHARS: usize = 2;

/// Score how much of `snippet` appears in `document`, from 0 to 100.
pub fn similarity(snippet: &str, document: &str) -> f64 {
    let snippet_norm = normalize(snippet);
    let document_norm = normalize(document);

    let snippet_words: HashSet<&str> = snippet_norm.split(' ').collect();
    let document_words: HashSet<&str> = document_norm.split(' ').collect();

    if snippet_words.is_empty() {
        return 0.0;
    }

    let matching = snippet_words
        .iter()
        .filter(|w| w.len() > MAX_UNMATCHED_TOKEN_CHARS && document_words.contains(*w))
        .count();

    let score = 100.0 * matching as f64 / snippet_words.len() as f64;
    score.min(100.0)
}
