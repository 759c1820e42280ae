//! Key-value store over JSON documents

use crate::{DbError, DbPool, Result};
use serde_json::Value;
use std::sync::Arc;

/// Flat key-value persistence: one JSON document per key
pub trait KeyValueStore: Send + Sync {
    /// Read the document stored under `key`, if any
    fn read(&self, key: &str) -> Result<Option<Value>>;

    /// Store `value` under `key`, replacing any previous document
    fn write(&self, key: &str, value: &Value) -> Result<()>;

    /// Delete `key`; deleting a missing key is not an error
    fn remove(&self, key: &str) -> Result<()>;

    fn contains(&self, key: &str) -> Result<bool> {
        Ok(self.read(key)?.is_some())
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Arc<S> {
    fn read(&self, key: &str) -> Result<Option<Value>> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &Value) -> Result<()> {
        (**self).write(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }

    fn contains(&self, key: &str) -> Result<bool> {
        (**self).contains(key)
    }
}

/// SQLite-backed store
pub struct SqliteStore {
    pool: DbPool,
}

impl SqliteStore {
    /// Wrap an already migrated pool
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// All stored keys, sorted
    pub fn keys(&self) -> Result<Vec<String>> {
        let conn = self.pool.get().map_err(|e| DbError::Pool(e.to_string()))?;
        let mut stmt = conn.prepare("SELECT key FROM kv ORDER BY key")?;
        let rows = stmt.query_map([], |row| row.get(0))?;

        let mut keys = Vec::new();
        for row in rows {
            keys.push(row?);
        }
        Ok(keys)
    }
}

impl KeyValueStore for SqliteStore {
    fn read(&self, key: &str) -> Result<Option<Value>> {
        let conn = self.pool.get().map_err(|e| DbError::Pool(e.to_string()))?;

        let raw = conn.query_row("SELECT value FROM kv WHERE key = ?1", [key], |row| {
            row.get::<_, String>(0)
        });

        match raw {
            Ok(text) => serde_json::from_str(&text)
                .map(Some)
                .map_err(|source| DbError::Json {
                    key: key.to_string(),
                    source,
                }),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&self, key: &str, value: &Value) -> Result<()> {
        let conn = self.pool.get().map_err(|e| DbError::Pool(e.to_string()))?;
        let text = serde_json::to_string(value).map_err(|source| DbError::Json {
            key: key.to_string(),
            source,
        })?;

        conn.execute(
            r#"
            INSERT INTO kv (key, value) VALUES (?1, ?2)
            ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = strftime('%s', 'now')
            "#,
            rusqlite::params![key, text],
        )?;

        tracing::trace!(key, bytes = text.len(), "kv write");
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let conn = self.pool.get().map_err(|e| DbError::Pool(e.to_string()))?;
        conn.execute("DELETE FROM kv WHERE key = ?1", [key])?;
        Ok(())
    }
}
