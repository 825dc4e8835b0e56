// Database schema — table creation and migrations.
//
// A `schema_version` table tracks which migrations have run, and each
// migration is a function that executes SQL statements.

use anyhow::{Context, Result};
use rusqlite::Connection;

/// Create all tables if they don't exist yet.
///
/// This is idempotent — safe to call on every startup.
pub fn create_tables(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "
        -- Tracks schema version for future migrations
        CREATE TABLE IF NOT EXISTS schema_version (
            version INTEGER PRIMARY KEY,
            applied_at TEXT NOT NULL DEFAULT (datetime('now'))
        );

        -- Keyword research results, keyed by normalized query.
        -- Several rows may share a query; the newest one wins on read.
        CREATE TABLE IF NOT EXISTS custom_search (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            search_query TEXT NOT NULL,        -- trimmed + lowercased
            keywords TEXT NOT NULL,            -- JSON object: phrase -> {count, density, wordCount}
            url TEXT,
            created_at TEXT NOT NULL           -- RFC 3339
        );

        CREATE INDEX IF NOT EXISTS idx_custom_search_query
            ON custom_search(search_query, created_at);
        ",
    )
    .context("Failed to create database tables")?;

    conn.execute(
        "INSERT OR IGNORE INTO schema_version (version) VALUES (?1)",
        [1],
    )?;

    // Migration v2: keep the provider's result metadata with each row so a
    // cache hit can report the same title / total / timing as the live call.
    run_migration(conn, 2, |c| {
        c.execute_batch(
            "ALTER TABLE custom_search ADD COLUMN title TEXT;
             ALTER TABLE custom_search ADD COLUMN total_results TEXT;
             ALTER TABLE custom_search ADD COLUMN search_time REAL;",
        )
    })?;

    Ok(())
}

/// Run a migration if it hasn't been applied yet.
fn run_migration<F>(conn: &Connection, version: i64, migrate: F) -> Result<()>
where
    F: FnOnce(&Connection) -> rusqlite::Result<()>,
{
    let already_applied: bool = conn.query_row(
        "SELECT COUNT(*) > 0 FROM schema_version WHERE version = ?1",
        [version],
        |row| row.get(0),
    )?;

    if !already_applied {
        migrate(conn).with_context(|| format!("Migration v{version} failed"))?;
        conn.execute(
            "INSERT INTO schema_version (version) VALUES (?1)",
            [version],
        )?;
    }

    Ok(())
}

/// Count the number of tables in the database (useful for init confirmation).
pub fn table_count(conn: &Connection) -> Result<i64> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name NOT LIKE 'sqlite_%'",
        [],
        |row| row.get(0),
    )?;
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_tables_is_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        create_tables(&conn).unwrap();
        create_tables(&conn).unwrap();
    }

    #[test]
    fn test_table_count() {
        let conn = Connection::open_in_memory().unwrap();
        create_tables(&conn).unwrap();
        // schema_version, custom_search
        assert_eq!(table_count(&conn).unwrap(), 2);
    }

    #[test]
    fn test_migration_v2_adds_metadata_columns() {
        let conn = Connection::open_in_memory().unwrap();
        create_tables(&conn).unwrap();

        conn.execute(
            "INSERT INTO custom_search (search_query, keywords, created_at, title, total_results, search_time)
             VALUES ('seo', '{}', '2026-01-01T00:00:00+00:00', 'Results', '42', 0.25)",
            [],
        )
        .unwrap();

        let (total, time): (String, f64) = conn
            .query_row(
                "SELECT total_results, search_time FROM custom_search WHERE search_query = 'seo'",
                [],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )
            .unwrap();
        assert_eq!(total, "42");
        assert!((time - 0.25).abs() < f64::EPSILON);
    }

    #[test]
    fn test_migrations_recorded_once() {
        let conn = Connection::open_in_memory().unwrap();
        create_tables(&conn).unwrap();
        create_tables(&conn).unwrap();
        create_tables(&conn).unwrap();

        let versions: Vec<i64> = conn
            .prepare("SELECT version FROM schema_version ORDER BY version")
            .unwrap()
            .query_map([], |row| row.get(0))
            .unwrap()
            .map(|r| r.unwrap())
            .collect();
        assert_eq!(versions, vec![1, 2]);
    }
}
