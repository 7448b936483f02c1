pub mod conversation;
pub mod session_lock;

pub use conversation::{ConversationEngine, InboundMessage, MessageOutcome};
