// Wordsmith: keyword density research and snippet plagiarism checking
//
// This is the library root. Each module corresponds to one subsystem:
// the pure text computations (keywords, plagiarism, text), the external
// seams they are fed through (search, fetch, db, rate_limiter) and the
// surfaces on top (output, web).

pub mod config;
pub mod db;
pub mod error;
pub mod fetch;
pub mod keywords;
pub mod output;
pub mod plagiarism;
pub mod rate_limiter;
pub mod search;
pub mod text;

#[cfg(feature = "web")]
pub mod web;
