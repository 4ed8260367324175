//! Operation surface consumed by the presentation shell

pub mod envelope;
pub mod handlers;
pub mod state;

pub use envelope::{Created, Deleted, EmptyData, Envelope, Listing, Renamed};
pub use handlers::conversations::ConversationView;
pub use handlers::messages::MessageView;
pub use state::ChatCore;
