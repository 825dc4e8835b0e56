// Database queries — CRUD for the keyword cache.
//
// Every database interaction goes through this module. Cache keys are
// normalized here on both read and write so callers can't miss a hit by
// passing "SEO Tools " instead of "seo tools".

use anyhow::Result;
use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension, Row};
use tracing::warn;

use super::models::{normalize_query, CachedSearch, NewSearch};
use crate::keywords::density::KeywordDensity;

const SELECT_COLUMNS: &str =
    "id, search_query, keywords, url, title, total_results, search_time, created_at";

/// Fetch the most recent cached result for a query.
pub fn get_latest_search(conn: &Connection, query: &str) -> Result<Option<CachedSearch>> {
    let sql = format!(
        "SELECT {SELECT_COLUMNS} FROM custom_search
         WHERE search_query = ?1
         ORDER BY created_at DESC, id DESC
         LIMIT 1"
    );
    let mut stmt = conn.prepare(&sql)?;
    let result = stmt
        .query_row(params![normalize_query(query)], row_to_cached)
        .optional()?;
    Ok(result)
}

/// Store a keyword research result and return its row ID.
pub fn insert_search(conn: &Connection, search: &NewSearch<'_>) -> Result<i64> {
    let keywords_json = serde_json::to_string(search.keywords)?;
    conn.execute(
        "INSERT INTO custom_search
            (search_query, keywords, url, title, total_results, search_time, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            normalize_query(search.search_query),
            keywords_json,
            search.url,
            search.title,
            search.total_results,
            search.search_time,
            Utc::now().to_rfc3339(),
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// All cached results, newest first.
pub fn list_searches(conn: &Connection) -> Result<Vec<CachedSearch>> {
    let sql = format!(
        "SELECT {SELECT_COLUMNS} FROM custom_search ORDER BY created_at DESC, id DESC"
    );
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map([], row_to_cached)?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(rows)
}

fn row_to_cached(row: &Row<'_>) -> rusqlite::Result<CachedSearch> {
    let id: i64 = row.get(0)?;
    let keywords_json: String = row.get(2)?;
    Ok(CachedSearch {
        id,
        search_query: row.get(1)?,
        keywords: parse_keywords(id, &keywords_json),
        url: row.get(3)?,
        title: row.get(4)?,
        total_results: row.get(5)?,
        search_time: row.get(6)?,
        created_at: row.get(7)?,
    })
}

/// A row with an unreadable keyword blob is served as an empty map rather
/// than failing the whole lookup.
fn parse_keywords(id: i64, json: &str) -> KeywordDensity {
    serde_json::from_str(json).unwrap_or_else(|e| {
        warn!(id, error = %e, "Cached keywords JSON is unreadable, treating as empty");
        KeywordDensity::new()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::schema::create_tables;
    use crate::keywords::density::KeywordStats;

    fn test_conn() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        create_tables(&conn).unwrap();
        conn
    }

    fn sample_keywords() -> KeywordDensity {
        let mut map = KeywordDensity::new();
        map.insert(
            "seo tools".to_string(),
            KeywordStats {
                count: 3,
                density: 12.5,
                word_count: 2,
            },
        );
        map
    }

    #[test]
    fn test_get_missing_returns_none() {
        let conn = test_conn();
        assert!(get_latest_search(&conn, "nothing").unwrap().is_none());
    }

    #[test]
    fn test_insert_then_get_normalizes_key() {
        let conn = test_conn();
        let keywords = sample_keywords();
        let id = insert_search(
            &conn,
            &NewSearch {
                search_query: "  SEO Tools ",
                keywords: &keywords,
                url: Some("https://www.googleapis.com/customsearch/v1?q=seo+tools"),
                title: Some("Google Custom Search - SEO Tools"),
                total_results: Some("1000"),
                search_time: Some(0.3),
            },
        )
        .unwrap();
        assert!(id > 0);

        let cached = get_latest_search(&conn, "seo tools").unwrap().unwrap();
        assert_eq!(cached.search_query, "seo tools");
        assert_eq!(cached.keywords, keywords);
        assert_eq!(cached.total_results.as_deref(), Some("1000"));
    }

    #[test]
    fn test_latest_row_wins() {
        let conn = test_conn();
        let old = KeywordDensity::new();
        let new = sample_keywords();
        for keywords in [&old, &new] {
            insert_search(
                &conn,
                &NewSearch {
                    search_query: "seo",
                    keywords,
                    url: None,
                    title: None,
                    total_results: None,
                    search_time: None,
                },
            )
            .unwrap();
        }
        let cached = get_latest_search(&conn, "SEO").unwrap().unwrap();
        assert_eq!(cached.keywords.len(), 1);
        assert_eq!(list_searches(&conn).unwrap().len(), 2);
    }

    #[test]
    fn test_corrupt_keywords_read_as_empty() {
        let conn = test_conn();
        conn.execute(
            "INSERT INTO custom_search (search_query, keywords, created_at)
             VALUES ('broken', 'not json', '2026-01-01T00:00:00+00:00')",
            [],
        )
        .unwrap();
        let cached = get_latest_search(&conn, "broken").unwrap().unwrap();
        assert!(cached.keywords.is_empty());
    }
}
