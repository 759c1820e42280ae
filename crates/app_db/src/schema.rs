//! Database schema and migrations

use crate::{DbError, DbPool, Result};

const SCHEMA_VERSION: i32 = 1;

/// Run database migrations
pub fn migrate(pool: &DbPool) -> Result<()> {
    let conn = pool.get().map_err(|e| DbError::Pool(e.to_string()))?;

    let current_version: i32 = conn
        .query_row("PRAGMA user_version", [], |row| row.get(0))
        .unwrap_or(0);

    if current_version > SCHEMA_VERSION {
        return Err(DbError::Migration(format!(
            "database schema v{} is newer than supported v{}",
            current_version, SCHEMA_VERSION
        )));
    }

    if current_version < SCHEMA_VERSION {
        tracing::info!(
            "Migrating database from version {} to {}",
            current_version,
            SCHEMA_VERSION
        );

        if current_version < 1 {
            apply_v1(&conn)?;
        }

        conn.execute_batch(&format!("PRAGMA user_version = {}", SCHEMA_VERSION))?;
    }

    Ok(())
}

fn apply_v1(conn: &rusqlite::Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        -- One JSON document per key (projects, categories, settings, services, auth flag)
        CREATE TABLE IF NOT EXISTS kv (
            key TEXT PRIMARY KEY NOT NULL,
            value TEXT NOT NULL,
            updated_at INTEGER NOT NULL DEFAULT (strftime('%s', 'now'))
        );
        "#,
    )?;

    Ok(())
}
