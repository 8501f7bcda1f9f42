pub mod message;
pub mod conversation;

pub use crate::types::identifiers::{ConversationId, ConversationVersion};
pub use message::{Message, ParseRoleError, Role};
pub use conversation::{Conversation, ConversationError};
