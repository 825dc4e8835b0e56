// SqliteKeywordCache — rusqlite backend implementing the KeywordCache trait.
//
// The Connection is wrapped in tokio::sync::Mutex because Connection is !Sync.
// Trait methods lock the mutex, do synchronous rusqlite work, and return.

use anyhow::Result;
use async_trait::async_trait;
use rusqlite::Connection;
use tokio::sync::Mutex;

use super::models::{CachedSearch, NewSearch};
use super::traits::KeywordCache;

pub struct SqliteKeywordCache {
    conn: Mutex<Connection>,
}

impl SqliteKeywordCache {
    /// Wrap an already-opened rusqlite Connection.
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Mutex::new(conn),
        }
    }
}

#[async_trait]
impl KeywordCache for SqliteKeywordCache {
    async fn table_count(&self) -> Result<i64> {
        let conn = self.conn.lock().await;
        super::schema::table_count(&conn)
    }

    async fn get(&self, query: &str) -> Result<Option<CachedSearch>> {
        let conn = self.conn.lock().await;
        super::queries::get_latest_search(&conn, query)
    }

    async fn store(&self, search: &NewSearch<'_>) -> Result<i64> {
        let conn = self.conn.lock().await;
        super::queries::insert_search(&conn, search)
    }

    async fn list(&self) -> Result<Vec<CachedSearch>> {
        let conn = self.conn.lock().await;
        super::queries::list_searches(&conn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::schema::create_tables;
    use crate::keywords::density::{KeywordDensity, KeywordStats};

    fn test_cache() -> SqliteKeywordCache {
        let conn = Connection::open_in_memory().unwrap();
        create_tables(&conn).unwrap();
        SqliteKeywordCache::new(conn)
    }

    #[tokio::test]
    async fn test_trait_store_and_get() {
        let cache = test_cache();
        assert!(cache.get("rust crates").await.unwrap().is_none());

        let mut keywords = KeywordDensity::new();
        keywords.insert(
            "crates".to_string(),
            KeywordStats {
                count: 4,
                density: 20.0,
                word_count: 1,
            },
        );
        let id = cache
            .store(&NewSearch {
                search_query: "Rust Crates",
                keywords: &keywords,
                url: None,
                title: Some("Results"),
                total_results: Some("99"),
                search_time: Some(0.1),
            })
            .await
            .unwrap();
        assert!(id > 0);

        let hit = cache.get(" rust crates ").await.unwrap().unwrap();
        assert_eq!(hit.keywords["crates"].count, 4);
        assert_eq!(cache.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_trait_table_count() {
        let cache = test_cache();
        assert_eq!(cache.table_count().await.unwrap(), 2);
    }
}
