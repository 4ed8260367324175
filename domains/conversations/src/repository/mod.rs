//! Conversation and message stores

pub mod conversations;
pub mod messages;
pub mod transactions;

use sqlx::SqlitePool;

pub use conversations::ConversationRepository;
pub use messages::MessageRepository;

/// Both stores, sharing one pool
#[derive(Clone)]
pub struct ConversationsRepositories {
    pub conversations: ConversationRepository,
    pub messages: MessageRepository,
}

impl ConversationsRepositories {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            conversations: ConversationRepository::new(pool.clone()),
            messages: MessageRepository::new(pool),
        }
    }
}
