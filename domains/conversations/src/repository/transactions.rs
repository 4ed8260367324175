//! Transactional free functions for the cascading conversation delete

use chateai_common::RepositoryError;
use sqlx::{Sqlite, Transaction};

/// Delete every message of a conversation within an existing transaction.
///
/// Returns the number of messages removed, which may be zero.
pub async fn delete_messages_for_conversation_tx(
    transaction: &mut Transaction<'_, Sqlite>,
    conversation_id: i64,
) -> std::result::Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM messages WHERE conversation_id = ?1")
        .bind(conversation_id)
        .execute(&mut **transaction)
        .await?;
    Ok(result.rows_affected())
}

/// Delete a conversation row within an existing transaction.
///
/// Returns `RepositoryError::NotFound` if no row matched, so the caller can
/// roll back the message delete issued earlier in the same transaction.
pub async fn delete_conversation_tx(
    transaction: &mut Transaction<'_, Sqlite>,
    id: i64,
) -> std::result::Result<u64, RepositoryError> {
    let result = sqlx::query("DELETE FROM conversations WHERE id = ?1")
        .bind(id)
        .execute(&mut **transaction)
        .await?;

    if result.rows_affected() == 0 {
        return Err(RepositoryError::NotFound);
    }
    Ok(result.rows_affected())
}
