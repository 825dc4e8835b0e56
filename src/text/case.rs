// Case converter.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseStyle {
    Upper,
    Lower,
    /// First letter of each sentence capitalized, the rest lowercase
    Sentence,
    /// First letter of each word capitalized
    Title,
    /// Every letter's case inverted
    Toggle,
    /// Letters alternate lower/upper, starting lower
    Alternating,
}

impl CaseStyle {
    pub const ALL: [CaseStyle; 6] = [
        CaseStyle::Upper,
        CaseStyle::Lower,
        CaseStyle::Sentence,
        CaseStyle::Title,
        CaseStyle::Toggle,
        CaseStyle::Alternating,
    ];

    pub fn name(self) -> &'static str {
        match self {
            CaseStyle::Upper => "upper",
            CaseStyle::Lower => "lower",
            CaseStyle::Sentence => "sentence",
            CaseStyle::Title => "title",
            CaseStyle::Toggle => "toggle",
            CaseStyle::Alternating => "alternating",
        }
    }
}

impl fmt::Display for CaseStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CaseStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        CaseStyle::ALL
            .into_iter()
            .find(|style| style.name() == lower)
            .ok_or_else(|| {
                let names: Vec<&str> = CaseStyle::ALL.iter().map(|s| s.name()).collect();
                format!("unknown case style '{s}' (expected one of: {})", names.join(", "))
            })
    }
}

/// Convert `text` to the given style.
pub fn convert(text: &str, style: CaseStyle) -> String {
    match style {
        CaseStyle::Upper => text.to_uppercase(),
        CaseStyle::Lower => text.to_lowercase(),
        CaseStyle::Sentence => sentence_case(text),
        CaseStyle::Title => title_case(text),
        CaseStyle::Toggle => toggle_case(text),
        CaseStyle::Alternating => alternating_case(text),
    }
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn sentence_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut capitalize_next = true;
    for c in text.to_lowercase().chars() {
        if is_word_char(c) {
            if capitalize_next {
                out.push(c.to_ascii_uppercase());
                capitalize_next = false;
            } else {
                out.push(c);
            }
        } else {
            out.push(c);
            if matches!(c, '.' | '!' | '?') {
                capitalize_next = true;
            } else if !c.is_whitespace() {
                capitalize_next = false;
            }
        }
    }
    out
}

fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_is_word = false;
    for c in text.to_lowercase().chars() {
        let word = is_word_char(c);
        if word && !prev_is_word {
            out.push(c.to_ascii_uppercase());
        } else {
            out.push(c);
        }
        prev_is_word = word;
    }
    out
}

fn toggle_case(text: &str) -> String {
    text.chars()
        .flat_map(|c| -> Box<dyn Iterator<Item = char>> {
            if c.is_uppercase() {
                Box::new(c.to_lowercase())
            } else if c.is_lowercase() {
                Box::new(c.to_uppercase())
            } else {
                Box::new(std::iter::once(c))
            }
        })
        .collect()
}

fn alternating_case(text: &str) -> String {
    let mut letters = 0usize;
    text.chars()
        .map(|c| {
            if c.is_ascii_alphabetic() {
                let mapped = if letters % 2 == 0 {
                    c.to_ascii_lowercase()
                } else {
                    c.to_ascii_uppercase()
                };
                letters += 1;
                mapped
            } else {
                c
            }
        })
        .collect()
}
