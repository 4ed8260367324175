//! Core facade state

use chateai_common::Result;
use sqlx::SqlitePool;

use crate::schema::ensure_schema;
use crate::ConversationsRepositories;

/// Composes the conversation and message stores behind the operations the
/// presentation shell calls. Each operation returns a rendered [`Envelope`].
///
/// [`Envelope`]: crate::api::envelope::Envelope
#[derive(Clone)]
pub struct ChatCore {
    pub repos: ConversationsRepositories,
}

impl ChatCore {
    pub fn new(repos: ConversationsRepositories) -> Self {
        Self { repos }
    }

    /// Provision the schema on `pool` and build the facade over it
    pub async fn open(pool: SqlitePool) -> Result<Self> {
        ensure_schema(&pool).await?;
        Ok(Self::new(ConversationsRepositories::new(pool)))
    }
}
