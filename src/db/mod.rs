// Database layer — SQLite keyword cache.
//
// rusqlite with the "bundled" feature, so there's no system SQLite
// dependency. The database file lives wherever WORDSMITH_DB_PATH points.

pub mod models;
pub mod queries;
pub mod schema;
pub mod sqlite;
pub mod traits;

pub use traits::KeywordCache;

use anyhow::{Context, Result};
use rusqlite::Connection;
use std::path::Path;
use std::sync::Arc;

/// Open (or create) the database and run migrations.
pub fn initialize(db_path: &str) -> Result<Connection> {
    if let Some(parent) = Path::new(db_path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory for database: {}", db_path))?;
        }
    }

    let conn = Connection::open(db_path)
        .with_context(|| format!("Failed to open database at {}", db_path))?;

    conn.pragma_update(None, "journal_mode", "WAL")?;

    schema::create_tables(&conn)?;

    Ok(conn)
}

/// Open an existing database (fails if it doesn't exist yet).
pub fn open(db_path: &str) -> Result<Connection> {
    if !Path::new(db_path).exists() {
        anyhow::bail!(
            "Keyword cache not found at {}. Run `wordsmith init` first.",
            db_path
        );
    }

    let conn = Connection::open(db_path)
        .with_context(|| format!("Failed to open database at {}", db_path))?;

    conn.pragma_update(None, "journal_mode", "WAL")?;

    // Cheap and idempotent; picks up migrations added since `init`.
    schema::create_tables(&conn)?;

    Ok(conn)
}

/// Create the SQLite cache if needed and wrap it in the trait object.
pub fn initialize_sqlite(db_path: &str) -> Result<Arc<dyn KeywordCache>> {
    let conn = initialize(db_path)?;
    Ok(Arc::new(sqlite::SqliteKeywordCache::new(conn)))
}

/// Open an existing SQLite cache as a trait object.
pub fn open_sqlite(db_path: &str) -> Result<Arc<dyn KeywordCache>> {
    let conn = open(db_path)?;
    Ok(Arc::new(sqlite::SqliteKeywordCache::new(conn)))
}
