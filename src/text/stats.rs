// Word counter: words, characters, paragraphs, lines and reading time.

use serde::Serialize;

/// Reading speed used for the time estimate.
pub const WORDS_PER_MINUTE: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStats {
    pub words: usize,
    pub characters: usize,
    pub characters_no_spaces: usize,
    pub paragraphs: usize,
    pub lines: usize,
    pub reading_time_minutes: usize,
}

/// Count everything the word counter shows.
pub fn analyze(text: &str) -> TextStats {
    let trimmed = text.trim();
    let words = trimmed.split_whitespace().count();

    TextStats {
        words,
        characters: text.chars().count(),
        characters_no_spaces: text.chars().filter(|c| !c.is_whitespace()).count(),
        paragraphs: count_paragraphs(trimmed),
        lines: text.split('\n').count(),
        reading_time_minutes: words.div_ceil(WORDS_PER_MINUTE),
    }
}

/// Paragraphs are separated by a line that is empty or whitespace only.
fn count_paragraphs(text: &str) -> usize {
    let mut paragraphs = 0;
    let mut in_paragraph = false;
    for line in text.lines() {
        if line.trim().is_empty() {
            in_paragraph = false;
        } else if !in_paragraph {
            in_paragraph = true;
            paragraphs += 1;
        }
    }
    paragraphs
}
