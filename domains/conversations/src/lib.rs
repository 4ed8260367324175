//! Conversations domain: chat conversations, their messages, and the result
//! envelopes handed to the presentation layer

pub mod api;
pub mod domain;
pub mod repository;
pub mod schema;

// Re-export domain types at the crate root for convenience
pub use domain::entities::{Conversation, ConversationRename, Message};
pub use domain::timestamp::StoredTimestamp;

// Re-export repository types
pub use repository::{ConversationRepository, ConversationsRepositories, MessageRepository};

// Re-export API types
pub use api::{ChatCore, ConversationView, Envelope, MessageView};
pub use schema::ensure_schema;
