//! Relevance-based context selection for multi-turn LLM conversations.
//!
//! `context-relevance` picks which earlier messages to forward with a new
//! query: system instructions and starred messages always go, and the
//! remaining history is ranked by TF-IDF relevance to the query and capped by
//! a budget. Everything here is synchronous, in-memory and deterministic;
//! identical inputs always produce identical outputs.
//!
//! The two entry points used by a chat client are [`select_context`] (what to
//! send) and [`live_scores`] (what to highlight while the user types).

pub mod cache;
pub mod conversation;
pub mod live;
pub mod scoring;
pub mod search;
pub mod selection;
pub mod types;

pub use conversation::{Conversation, ConversationError, ConversationId, Message, Role};
pub use live::{live_scores, LiveScoreAnnotator, LIVE_SCORE_MIN_INPUT_CHARS};
pub use search::filter_conversations;
pub use selection::{select_context, ContextSelector, SelectionConfig, DEFAULT_CONTEXT_BUDGET};
