//! LuminaLens persistence layer
//!
//! A flat key-value store holding JSON documents:
//! - SQLite-backed store (pooled) for the desktop application
//! - In-memory store for tests and `storage.backend = "memory"`

mod kv;
mod memory;
mod pool;
mod schema;

pub use kv::{KeyValueStore, SqliteStore};
pub use memory::MemoryStore;
pub use pool::{init_pool, DbPool};
pub use schema::migrate;

use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Database errors
#[derive(Error, Debug)]
pub enum DbError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Pool error: {0}")]
    Pool(String),

    #[error("Migration error: {0}")]
    Migration(String),

    #[error("Corrupt JSON under key '{key}': {source}")]
    Json {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, DbError>;

/// Default directory for the database file
pub fn db_dir() -> PathBuf {
    ProjectDirs::from("com", "LuminaLens", "LuminaLens")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("./data"))
}

/// Open (creating and migrating if needed) the SQLite store at `path`,
/// or at `db_dir()/lumina.db` when no path is given.
pub fn open(path: Option<&Path>) -> Result<SqliteStore> {
    let db_path = match path {
        Some(p) => p.to_path_buf(),
        None => db_dir().join("lumina.db"),
    };
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let pool = init_pool(&db_path)?;
    migrate(&pool)?;

    tracing::info!("Database initialized at {:?}", db_path);
    Ok(SqliteStore::new(pool))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_open_creates_parent_dir() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("lumina.db");
        let store = open(Some(&path)).unwrap();
        store.write("k", &serde_json::json!(1)).unwrap();
        assert!(path.exists());
    }
}
