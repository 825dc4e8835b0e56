// Typed errors for the pure text computations.
//
// Everything that talks to the network or the database uses anyhow. The
// core functions return TextError instead so callers can tell a refusal
// ("article too long") apart from an empty result and map it to the right
// message or HTTP status.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TextError {
    /// The input was empty or whitespace only.
    #[error("input text is empty")]
    EmptyInput,

    /// The article is over the word ceiling. It is refused, never truncated.
    #[error("article has {words} words, the maximum is {max}")]
    ArticleTooLong { words: usize, max: usize },

    /// The input is below the minimum length for the requested tool.
    #[error("text must be at least {min} characters long (got {len})")]
    InputTooShort { len: usize, min: usize },
}
