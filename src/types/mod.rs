pub mod context_bundle;
pub mod identifiers;

pub use context_bundle::{ContextBundle, ScoredMessage, SelectionMetadata};
pub use identifiers::{ConversationId, ConversationVersion};
