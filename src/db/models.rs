// Data models — Rust structs that map to keyword cache rows.
//
// Separate from the queries so the research flow and the web layer can use
// them without depending on rusqlite directly.

use serde::{Deserialize, Serialize};

use crate::keywords::density::KeywordDensity;

/// A stored keyword research result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CachedSearch {
    pub id: i64,
    /// Normalized (trimmed, lowercased) search query
    pub search_query: String,
    pub keywords: KeywordDensity,
    /// The search URL the keywords were extracted from (API key stripped)
    pub url: Option<String>,
    pub title: Option<String>,
    pub total_results: Option<String>,
    pub search_time: Option<f64>,
    /// RFC 3339 timestamp
    pub created_at: String,
}

/// A keyword research result about to be stored.
#[derive(Debug, Clone)]
pub struct NewSearch<'a> {
    pub search_query: &'a str,
    pub keywords: &'a KeywordDensity,
    pub url: Option<&'a str>,
    pub title: Option<&'a str>,
    pub total_results: Option<&'a str>,
    pub search_time: Option<f64>,
}

/// Normalize a search query the way cache keys are stored.
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}
