// Web search — the provider trait, the response model, and the Google
// Custom Search client that implements it.
//
// Keyword research feeds the whole response into the extractor; the
// plagiarism checker only needs the top result links for each snippet.

pub mod google;
pub mod models;
pub mod traits;
