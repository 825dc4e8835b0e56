// Text tools — word statistics, case conversion, digests — plus the
// normalization shared by keyword extraction and snippet similarity.

pub mod case;
pub mod digest;
pub mod stats;

use std::sync::OnceLock;

use regex_lite::Regex;

/// Matches runs of characters that are neither ASCII word characters nor
/// whitespace.
fn non_word() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^\w\s]+").expect("static pattern"))
}

/// Lowercase, replace punctuation runs with a space, collapse whitespace
/// and trim. The output is a single-space separated word sequence.
pub fn normalize(text: &str) -> String {
    let lower = text.to_lowercase();
    let spaced = non_word().replace_all(&lower, " ");
    spaced.split_whitespace().collect::<Vec<_>>().join(" ")
}
