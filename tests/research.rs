// Keyword research flow tests: live search, cache hits, refresh and the
// cache-failure fallbacks. Uses an in-memory SQLite cache and a fake search.

mod common;

use anyhow::Result;
use async_trait::async_trait;
use rusqlite::Connection;

use common::{FakeSearch, Reply};
use wordsmith::db::models::{CachedSearch, NewSearch};
use wordsmith::db::schema::create_tables;
use wordsmith::db::sqlite::SqliteKeywordCache;
use wordsmith::db::KeywordCache;
use wordsmith::error::TextError;
use wordsmith::keywords::density::NgramDensityExtractor;
use wordsmith::keywords::research::KeywordResearch;
use wordsmith::search::models::SearchItem;

fn memory_cache() -> SqliteKeywordCache {
    let conn = Connection::open_in_memory().unwrap();
    create_tables(&conn).unwrap();
    SqliteKeywordCache::new(conn)
}

fn results() -> Reply {
    let item = |title: &str, snippet: &str| SearchItem {
        title: Some(title.to_string()),
        link: Some("https://example.com/".to_string()),
        snippet: Some(snippet.to_string()),
        display_link: Some("example.com".to_string()),
    };
    Reply::Items(vec![
        item("Best SEO tools for 2024", "Compare SEO tools and pricing"),
        item("Free SEO tools", "The SEO tools marketers use"),
    ])
}

#[tokio::test]
async fn second_lookup_is_served_from_cache() {
    let cache = memory_cache();
    let search = FakeSearch::always(results());
    let extractor = NgramDensityExtractor::default();
    let research = KeywordResearch::new(&search, &extractor, Some(&cache));

    let live = research.research("seo tools", false).await.unwrap();
    assert!(!live.cached);
    assert!(live.cached_at.is_none());
    assert_eq!(live.keywords["seo tools"].count, 4);
    assert_eq!(live.keyword_count, live.keywords.len());

    let cached = research.research("seo tools", false).await.unwrap();
    assert!(cached.cached);
    assert!(cached.cached_at.is_some());
    assert_eq!(cached.keywords, live.keywords);
    assert_eq!(search.calls(), 1);
}

#[tokio::test]
async fn cache_key_ignores_case_and_surrounding_whitespace() {
    let cache = memory_cache();
    let search = FakeSearch::always(results());
    let extractor = NgramDensityExtractor::default();
    let research = KeywordResearch::new(&search, &extractor, Some(&cache));

    research.research("  SEO Tools ", false).await.unwrap();
    let hit = research.research("seo tools", false).await.unwrap();

    assert!(hit.cached);
    assert_eq!(search.calls(), 1);
    // The search itself used the trimmed term
    assert_eq!(search.queries(), vec!["SEO Tools"]);
}

#[tokio::test]
async fn refresh_bypasses_cache_and_stores_again() {
    let cache = memory_cache();
    let search = FakeSearch::always(results());
    let extractor = NgramDensityExtractor::default();
    let research = KeywordResearch::new(&search, &extractor, Some(&cache));

    research.research("seo tools", false).await.unwrap();
    let fresh = research.research("seo tools", true).await.unwrap();

    assert!(!fresh.cached);
    assert_eq!(search.calls(), 2);
    assert_eq!(cache.list().await.unwrap().len(), 2);
}

#[tokio::test]
async fn stored_row_keeps_url_without_credentials() {
    let cache = memory_cache();
    let search = FakeSearch::always(results());
    let extractor = NgramDensityExtractor::default();
    let research = KeywordResearch::new(&search, &extractor, Some(&cache));

    research.research("seo tools", false).await.unwrap();
    let row = cache.get("seo tools").await.unwrap().unwrap();
    assert_eq!(row.url.as_deref(), Some("https://search.example/?q=seo tools"));
    assert_eq!(row.search_query, "seo tools");
}

#[tokio::test]
async fn works_without_a_cache() {
    let search = FakeSearch::always(results());
    let extractor = NgramDensityExtractor::default();
    let research = KeywordResearch::new(&search, &extractor, None);

    research.research("seo tools", false).await.unwrap();
    research.research("seo tools", false).await.unwrap();
    assert_eq!(search.calls(), 2);
}

#[tokio::test]
async fn empty_term_is_refused_without_searching() {
    let search = FakeSearch::always(results());
    let extractor = NgramDensityExtractor::default();
    let research = KeywordResearch::new(&search, &extractor, None);

    let err = research.research("   ", false).await.unwrap_err();
    assert_eq!(err.downcast_ref::<TextError>(), Some(&TextError::EmptyInput));
    assert_eq!(search.calls(), 0);
}

#[tokio::test]
async fn search_failure_propagates() {
    let search = FakeSearch::always(Reply::Fail);
    let extractor = NgramDensityExtractor::default();
    let research = KeywordResearch::new(&search, &extractor, None);

    let err = research.research("seo tools", false).await.unwrap_err();
    assert!(err.to_string().contains("429"));
}

#[tokio::test]
async fn empty_response_gives_defaults() {
    let search = FakeSearch::always(Reply::Empty);
    let extractor = NgramDensityExtractor::default();
    let research = KeywordResearch::new(&search, &extractor, None);

    let outcome = research.research("nothing here", false).await.unwrap();
    assert!(outcome.keywords.is_empty());
    assert_eq!(outcome.total_results, "0");
    assert_eq!(outcome.title, "Search results for \"nothing here\"");
}

/// A cache whose every call fails, as with a locked or corrupt database.
struct BrokenCache;

#[async_trait]
impl KeywordCache for BrokenCache {
    async fn table_count(&self) -> Result<i64> {
        anyhow::bail!("database is locked")
    }

    async fn get(&self, _query: &str) -> Result<Option<CachedSearch>> {
        anyhow::bail!("database is locked")
    }

    async fn store(&self, _search: &NewSearch<'_>) -> Result<i64> {
        anyhow::bail!("database is locked")
    }

    async fn list(&self) -> Result<Vec<CachedSearch>> {
        anyhow::bail!("database is locked")
    }
}

#[tokio::test]
async fn cache_failures_fall_back_to_live_results() {
    let search = FakeSearch::always(results());
    let extractor = NgramDensityExtractor::default();
    let research = KeywordResearch::new(&search, &extractor, Some(&BrokenCache));

    let outcome = research.research("seo tools", false).await.unwrap();
    assert!(!outcome.cached);
    assert!(!outcome.keywords.is_empty());
}
