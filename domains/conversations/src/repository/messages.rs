//! Message repository

use crate::domain::entities::Message;
use crate::domain::timestamp::now_for_storage;
use chateai_common::Result;
use sqlx::SqlitePool;

#[derive(Clone)]
pub struct MessageRepository {
    pool: SqlitePool,
}

impl MessageRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Append a message to a conversation and return its id.
    ///
    /// The parent is not looked up here. With foreign keys enabled a missing
    /// conversation surfaces as a database constraint error.
    pub async fn create(&self, conversation_id: i64, role: &str, content: &str) -> Result<i64> {
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO messages (conversation_id, role, content, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?4, NULL)
            RETURNING id
            "#,
        )
        .bind(conversation_id)
        .bind(role)
        .bind(content)
        .bind(now_for_storage())
        .fetch_one(&self.pool)
        .await?;

        tracing::info!(conversation_id, message_id = id, role, "Message created");
        Ok(id)
    }

    /// List messages for a conversation, oldest first
    pub async fn list_by_conversation(&self, conversation_id: i64) -> Result<Vec<Message>> {
        let messages = sqlx::query_as::<_, Message>(
            r#"
            SELECT id, conversation_id, role, content, created_at, updated_at
            FROM messages
            WHERE conversation_id = ?1
            ORDER BY julianday(created_at) ASC, id ASC
            "#,
        )
        .bind(conversation_id)
        .fetch_all(&self.pool)
        .await?;

        tracing::debug!(conversation_id, count = messages.len(), "Listed messages");
        Ok(messages)
    }

    /// List messages across all conversations, oldest first
    pub async fn list_all(&self) -> Result<Vec<Message>> {
        let messages = sqlx::query_as::<_, Message>(
            r#"
            SELECT id, conversation_id, role, content, created_at, updated_at
            FROM messages
            ORDER BY julianday(created_at) ASC, id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        tracing::debug!(count = messages.len(), "Listed all messages");
        Ok(messages)
    }
}
