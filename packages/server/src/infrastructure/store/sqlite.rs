//! SQLite MessageStore implementation backed by sqlx.
//!
//! The schema is created at connect time. Timestamps are stored as Unix
//! UTC milliseconds so ordering survives export/import; reads order by
//! `created_at` with `id` as the tie-breaker.

use std::str::FromStr;
use std::sync::Arc;

use async_trait::async_trait;
use sqlx::{
    Row,
    sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions, SqliteRow},
};

use agora_shared::time::Clock;

use crate::domain::{AuthorId, ChatMessage, MessageContent, MessageStore, StoreError};

const CREATE_MESSAGES_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS messages (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    author_id TEXT NOT NULL,
    content TEXT NOT NULL,
    created_at INTEGER NOT NULL
)
"#;

/// SQLite-backed message store.
pub struct SqliteMessageStore {
    pool: SqlitePool,
    clock: Arc<dyn Clock>,
}

impl SqliteMessageStore {
    /// Connect to the given SQLite URL (e.g. `sqlite:agora.db` or
    /// `sqlite::memory:`) and create the schema if it does not exist.
    pub async fn connect(url: &str, clock: Arc<dyn Clock>) -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str(url)
            .map_err(store_error)?
            .create_if_missing(true);

        // Single connection: SQLite serializes writers anyway, and an
        // in-memory database is per-connection.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await
            .map_err(store_error)?;

        sqlx::query(CREATE_MESSAGES_TABLE)
            .execute(&pool)
            .await
            .map_err(store_error)?;

        Ok(Self { pool, clock })
    }
}

#[async_trait]
impl MessageStore for SqliteMessageStore {
    async fn append(
        &self,
        author_id: AuthorId,
        content: MessageContent,
    ) -> Result<ChatMessage, StoreError> {
        let created_at = self.clock.now_utc_millis();

        let result =
            sqlx::query("INSERT INTO messages (author_id, content, created_at) VALUES (?1, ?2, ?3)")
                .bind(author_id.as_str())
                .bind(content.as_str())
                .bind(created_at)
                .execute(&self.pool)
                .await
                .map_err(store_error)?;

        Ok(ChatMessage {
            id: result.last_insert_rowid(),
            author_id,
            content,
            created_at,
        })
    }

    async fn list_all(&self) -> Result<Vec<ChatMessage>, StoreError> {
        let rows = sqlx::query(
            "SELECT id, author_id, content, created_at FROM messages ORDER BY created_at ASC, id ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(store_error)?;

        rows.into_iter().map(row_to_message).collect()
    }

    async fn clear_all(&self) -> Result<(), StoreError> {
        sqlx::query("DELETE FROM messages")
            .execute(&self.pool)
            .await
            .map_err(store_error)?;
        Ok(())
    }

    async fn delete_by_author(&self, author_id: &AuthorId) -> Result<(), StoreError> {
        sqlx::query("DELETE FROM messages WHERE author_id = ?1")
            .bind(author_id.as_str())
            .execute(&self.pool)
            .await
            .map_err(store_error)?;
        Ok(())
    }
}

fn store_error(e: impl std::fmt::Display) -> StoreError {
    StoreError::Unavailable(e.to_string())
}

fn row_to_message(row: SqliteRow) -> Result<ChatMessage, StoreError> {
    let author_id = AuthorId::new(row.get::<String, _>("author_id"))
        .map_err(|e| StoreError::Unavailable(format!("corrupt row: {e}")))?;
    let content = MessageContent::new(row.get::<String, _>("content"))
        .map_err(|e| StoreError::Unavailable(format!("corrupt row: {e}")))?;

    Ok(ChatMessage {
        id: row.get::<i64, _>("id"),
        author_id,
        content,
        created_at: row.get::<i64, _>("created_at"),
    })
}
