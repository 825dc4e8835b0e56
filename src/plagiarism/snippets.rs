// Article → snippets.
//
// The article is cut into at most MAX_SNIPPETS contiguous, non-overlapping
// word windows of roughly IDEAL_SNIPPET_WORDS each. Every window is searched
// separately, so the caps bound the number of search calls per check.
//
// Over-long articles are refused, never silently truncated: a check that
// only covered the first thousand words would report a misleadingly low
// score for the rest.

use crate::error::TextError;

/// Articles longer than this many words are refused.
pub const MAX_ARTICLE_WORDS: usize = 1000;

/// Target snippet length in words.
pub const IDEAL_SNIPPET_WORDS: usize = 100;

/// Upper bound on snippets per article.
pub const MAX_SNIPPETS: usize = 10;

/// Size policy for splitting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnippetLimits {
    pub max_words: usize,
    pub ideal_snippet_words: usize,
    pub max_snippets: usize,
}

impl Default for SnippetLimits {
    fn default() -> Self {
        Self {
            max_words: MAX_ARTICLE_WORDS,
            ideal_snippet_words: IDEAL_SNIPPET_WORDS,
            max_snippets: MAX_SNIPPETS,
        }
    }
}

/// Split an article into snippets.
///
/// An empty article yields no snippets; callers that need a non-empty
/// article should reject it before calling.
pub fn split_snippets(article: &str, limits: &SnippetLimits) -> Result<Vec<String>, TextError> {
    let words: Vec<&str> = article.split_whitespace().collect();
    let total = words.len();

    if total > limits.max_words {
        return Err(TextError::ArticleTooLong {
            words: total,
            max: limits.max_words,
        });
    }
    if total == 0 {
        return Ok(Vec::new());
    }

    let count = total
        .div_ceil(limits.ideal_snippet_words.max(1))
        .min(limits.max_snippets.max(1));
    let size = total.div_ceil(count);

    Ok(words.chunks(size).map(|chunk| chunk.join(" ")).collect())
}
