//! Conversation operations

use std::future::Future;

use chateai_common::Result;
use serde::Serialize;

use crate::api::envelope::{Created, Deleted, Envelope, Listing, Renamed};
use crate::api::state::ChatCore;
use crate::domain::entities::Conversation;
use crate::domain::timestamp::display_optional;

/// Conversation as shown to the presentation layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversationView {
    pub id: i64,
    pub name: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Conversation> for ConversationView {
    fn from(c: Conversation) -> Self {
        Self {
            id: c.id,
            created_at: c.created_at.display(),
            updated_at: display_optional(c.updated_at.as_ref()),
            name: c.name,
        }
    }
}

impl ChatCore {
    /// Create a new conversation
    pub async fn create_conversation(&self, name: &str) -> Result<Envelope<Created>> {
        let id = self.repos.conversations.create(name).await?;
        Ok(Envelope::success(Created::new(id)))
    }

    /// List all conversations, newest first
    pub async fn list_conversations(&self) -> Result<Envelope<Listing<ConversationView>>> {
        let convs = self.repos.conversations.list_all().await?;
        let views: Vec<ConversationView> = convs.into_iter().map(Into::into).collect();
        Ok(Envelope::success(Listing::new(views)))
    }

    /// Rename a conversation
    pub async fn rename_conversation(&self, id: i64, name: &str) -> Result<Envelope<Renamed>> {
        let outcome = self.repos.conversations.rename(id, name).await;
        Envelope::render(outcome, id, |rows| Renamed {
            rows_affected: rows,
            id,
            name: name.to_string(),
        })
    }

    /// Delete a conversation together with its messages
    pub async fn delete_conversation(&self, id: i64) -> Result<Envelope<Deleted>> {
        let outcome = self.repos.conversations.delete(id).await;
        render_deleted(outcome, id)
    }

    /// Delete a conversation, rolling back if `cancel` completes first
    pub async fn delete_conversation_until<F>(
        &self,
        id: i64,
        cancel: F,
    ) -> Result<Envelope<Deleted>>
    where
        F: Future<Output = ()>,
    {
        let outcome = self.repos.conversations.delete_until(id, cancel).await;
        render_deleted(outcome, id)
    }
}

fn render_deleted(outcome: Result<u64>, id: i64) -> Result<Envelope<Deleted>> {
    Envelope::render(outcome, id, |rows| Deleted {
        rows_affected: rows,
        id,
    })
}
