//! Schema provisioning
//!
//! Creates the conversations and messages tables if they are absent. Safe to
//! run on every startup.

use chateai_common::Result;
use sqlx::SqlitePool;

const CREATE_CONVERSATIONS: &str = r#"
    CREATE TABLE IF NOT EXISTS conversations (
        id          INTEGER PRIMARY KEY AUTOINCREMENT,
        name        TEXT NOT NULL,
        created_at  TEXT NOT NULL,
        updated_at  TEXT
    )
"#;

const CREATE_MESSAGES: &str = r#"
    CREATE TABLE IF NOT EXISTS messages (
        id               INTEGER PRIMARY KEY AUTOINCREMENT,
        conversation_id  INTEGER NOT NULL,
        role             TEXT NOT NULL,
        content          TEXT NOT NULL,
        created_at       TEXT NOT NULL,
        updated_at       TEXT,
        FOREIGN KEY (conversation_id) REFERENCES conversations(id) ON DELETE CASCADE
    )
"#;

/// Create both tables if they do not exist yet
pub async fn ensure_schema(pool: &SqlitePool) -> Result<()> {
    sqlx::query(CREATE_CONVERSATIONS).execute(pool).await?;
    sqlx::query(CREATE_MESSAGES).execute(pool).await?;

    tracing::info!("Conversation schema ready");
    Ok(())
}
