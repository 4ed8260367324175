//! Domain entities for Conversations domain
//!
//! Rows are decoded by hand so that a malformed timestamp column degrades to
//! [`StoredTimestamp::Invalid`] instead of failing the whole query.

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row};
use validator::Validate;

use chateai_common::{Error, Result};

use super::timestamp::StoredTimestamp;

/// Conversation entity
#[derive(Debug, Clone, PartialEq)]
pub struct Conversation {
    pub id: i64,
    pub name: String,
    pub created_at: StoredTimestamp,
    /// Absent until the first rename
    pub updated_at: Option<StoredTimestamp>,
}

/// Message entity
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub id: i64,
    pub conversation_id: i64,
    pub role: String,
    pub content: String,
    pub created_at: StoredTimestamp,
    /// Never written: messages are append-only
    pub updated_at: Option<StoredTimestamp>,
}

/// Read a timestamp column as bytes so that neither a non-TEXT value nor
/// invalid UTF-8 can fail the row.
fn decode_raw(row: &SqliteRow, column: &str) -> std::result::Result<Option<String>, sqlx::Error> {
    let raw: Option<Vec<u8>> = row.try_get_unchecked(column)?;
    Ok(raw.map(|bytes| match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
    }))
}

fn decode_created_at(row: &SqliteRow) -> std::result::Result<StoredTimestamp, sqlx::Error> {
    let raw = decode_raw(row, "created_at")?;
    Ok(StoredTimestamp::parse(raw.as_deref().unwrap_or_default()))
}

fn decode_updated_at(row: &SqliteRow) -> std::result::Result<Option<StoredTimestamp>, sqlx::Error> {
    let raw = decode_raw(row, "updated_at")?;
    Ok(StoredTimestamp::parse_optional(raw.as_deref()))
}

impl<'r> FromRow<'r, SqliteRow> for Conversation {
    fn from_row(row: &'r SqliteRow) -> std::result::Result<Self, sqlx::Error> {
        Ok(Conversation {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            created_at: decode_created_at(row)?,
            updated_at: decode_updated_at(row)?,
        })
    }
}

impl<'r> FromRow<'r, SqliteRow> for Message {
    fn from_row(row: &'r SqliteRow) -> std::result::Result<Self, sqlx::Error> {
        Ok(Message {
            id: row.try_get("id")?,
            conversation_id: row.try_get("conversation_id")?,
            role: row.try_get("role")?,
            content: row.try_get("content")?,
            created_at: decode_created_at(row)?,
            updated_at: decode_updated_at(row)?,
        })
    }
}

/// Validated input for renaming a conversation
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct ConversationRename {
    #[validate(range(min = 1, message = "conversation id must be positive"))]
    pub id: i64,

    #[validate(length(min = 1, message = "conversation name must not be empty"))]
    pub name: String,
}

impl ConversationRename {
    pub fn new(id: i64, name: impl Into<String>) -> Result<Self> {
        let rename = Self {
            id,
            name: name.into(),
        };
        rename
            .validate()
            .map_err(|e| Error::Validation(format!("Validation failed: {}", e)))?;
        Ok(rename)
    }
}

/// Reject non-positive conversation ids before touching storage
pub fn validate_conversation_id(id: i64) -> Result<()> {
    if id <= 0 {
        return Err(Error::Validation(format!(
            "conversation id must be positive, got {}",
            id
        )));
    }
    Ok(())
}
