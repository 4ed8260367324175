//! Conversation repository

use std::future::Future;

use chateai_common::{Error, RepositoryError, Result};
use sqlx::{Sqlite, SqlitePool, Transaction};

use super::transactions::{delete_conversation_tx, delete_messages_for_conversation_tx};
use crate::domain::entities::{validate_conversation_id, Conversation, ConversationRename};
use crate::domain::timestamp::now_for_storage;

#[derive(Clone)]
pub struct ConversationRepository {
    pool: SqlitePool,
}

fn not_found(id: i64) -> Error {
    Error::NotFound(format!("conversation id={} does not exist", id))
}

impl ConversationRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a conversation and return its id.
    ///
    /// The name is stored as given, including the empty string.
    pub async fn create(&self, name: &str) -> Result<i64> {
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO conversations (name, created_at, updated_at)
            VALUES (?1, ?2, NULL)
            RETURNING id
            "#,
        )
        .bind(name)
        .bind(now_for_storage())
        .fetch_one(&self.pool)
        .await?;

        tracing::info!(conversation_id = id, "Conversation created");
        Ok(id)
    }

    /// Find conversation by ID
    pub async fn find(&self, id: i64) -> Result<Option<Conversation>> {
        let conv = sqlx::query_as::<_, Conversation>(
            r#"
            SELECT id, name, created_at, updated_at
            FROM conversations
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(conv)
    }

    /// List every conversation, newest first
    pub async fn list_all(&self) -> Result<Vec<Conversation>> {
        let convs = sqlx::query_as::<_, Conversation>(
            r#"
            SELECT id, name, created_at, updated_at
            FROM conversations
            ORDER BY julianday(created_at) DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        tracing::debug!(count = convs.len(), "Listed conversations");
        Ok(convs)
    }

    /// Rename a conversation and stamp `updated_at`.
    ///
    /// Input is validated before any query runs. A missing row is reported as
    /// `Error::NotFound`.
    pub async fn rename(&self, id: i64, name: &str) -> Result<u64> {
        let rename = ConversationRename::new(id, name)?;

        let result = sqlx::query(
            r#"
            UPDATE conversations
            SET name = ?1, updated_at = ?2
            WHERE id = ?3
            "#,
        )
        .bind(&rename.name)
        .bind(now_for_storage())
        .bind(rename.id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(not_found(id));
        }

        tracing::info!(conversation_id = id, "Conversation renamed");
        Ok(result.rows_affected())
    }

    /// Delete a conversation and all of its messages in one transaction
    pub async fn delete(&self, id: i64) -> Result<u64> {
        self.delete_until(id, std::future::pending()).await
    }

    /// Delete a conversation and its messages, abandoning the work if `cancel`
    /// completes first.
    ///
    /// Messages are removed explicitly rather than through the foreign key,
    /// which only cascades when `PRAGMA foreign_keys` is on. If the
    /// conversation row does not exist the whole transaction is rolled back.
    /// SQLite never exposes uncommitted writes to other connections, so
    /// readers see either both deletes or neither.
    pub async fn delete_until<F>(&self, id: i64, cancel: F) -> Result<u64>
    where
        F: Future<Output = ()>,
    {
        validate_conversation_id(id)?;

        // Dropping `tx` without a commit rolls it back.
        let mut tx = self.pool.begin().await?;

        let outcome = tokio::select! {
            biased;
            () = cancel => Err(Error::Cancelled(format!(
                "delete of conversation id={} was cancelled",
                id
            ))),
            result = cascade_delete(&mut tx, id) => result,
        };

        match outcome {
            Ok(rows) => {
                tx.commit().await?;
                tracing::info!(conversation_id = id, rows_affected = rows, "Conversation deleted");
                Ok(rows)
            }
            Err(err) => {
                if let Err(rollback_err) = tx.rollback().await {
                    tracing::warn!(
                        conversation_id = id,
                        error = %rollback_err,
                        "Rollback after failed delete also failed"
                    );
                }
                tracing::debug!(conversation_id = id, error = %err, "Conversation delete rolled back");
                Err(err)
            }
        }
    }
}

async fn cascade_delete(tx: &mut Transaction<'_, Sqlite>, id: i64) -> Result<u64> {
    let messages = delete_messages_for_conversation_tx(tx, id).await?;

    let rows = delete_conversation_tx(tx, id).await.map_err(|e| match e {
        RepositoryError::NotFound => not_found(id),
        other => other.into(),
    })?;

    tracing::debug!(conversation_id = id, messages, "Cascade delete staged");
    Ok(rows)
}
