//! Message operations

use chateai_common::Result;
use serde::Serialize;

use crate::api::envelope::{Created, Envelope, Listing};
use crate::api::state::ChatCore;
use crate::domain::entities::Message;
use crate::domain::timestamp::display_optional;

/// Message as shown to the presentation layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageView {
    pub id: i64,
    pub conversation_id: i64,
    pub role: String,
    pub content: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Message> for MessageView {
    fn from(m: Message) -> Self {
        Self {
            id: m.id,
            conversation_id: m.conversation_id,
            created_at: m.created_at.display(),
            updated_at: display_optional(m.updated_at.as_ref()),
            role: m.role,
            content: m.content,
        }
    }
}

fn into_listing(messages: Vec<Message>) -> Envelope<Listing<MessageView>> {
    Envelope::success(Listing::new(messages.into_iter().map(Into::into).collect()))
}

impl ChatCore {
    /// Append a message to a conversation
    pub async fn create_message(
        &self,
        conversation_id: i64,
        role: &str,
        content: &str,
    ) -> Result<Envelope<Created>> {
        let id = self
            .repos
            .messages
            .create(conversation_id, role, content)
            .await?;
        Ok(Envelope::success(Created::new(id)))
    }

    /// List one conversation's messages, oldest first
    pub async fn list_messages_by_conversation(
        &self,
        conversation_id: i64,
    ) -> Result<Envelope<Listing<MessageView>>> {
        let messages = self
            .repos
            .messages
            .list_by_conversation(conversation_id)
            .await?;
        Ok(into_listing(messages))
    }

    /// List every message, oldest first
    pub async fn list_messages(&self) -> Result<Envelope<Listing<MessageView>>> {
        let messages = self.repos.messages.list_all().await?;
        Ok(into_listing(messages))
    }
}
