// Keyword cache trait — backend-agnostic async interface.
//
// SqliteKeywordCache is the only implementation. The trait is async so a
// networked store (MySQL, Postgres) can sit behind the same interface
// without changing the research flow.

use anyhow::Result;
use async_trait::async_trait;

use super::models::{CachedSearch, NewSearch};

#[async_trait]
pub trait KeywordCache: Send + Sync {
    /// Count the number of user-created tables in the store.
    async fn table_count(&self) -> Result<i64>;

    /// Most recent cached result for a query (normalized internally).
    async fn get(&self, query: &str) -> Result<Option<CachedSearch>>;

    /// Store a result and return its ID.
    async fn store(&self, search: &NewSearch<'_>) -> Result<i64>;

    /// All cached results, newest first.
    async fn list(&self) -> Result<Vec<CachedSearch>>;
}
