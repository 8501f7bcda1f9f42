use serde::{Deserialize, Serialize};

use crate::conversation::Message;

/// Internal: a regular message paired with its relevance score.
/// Exists only for the duration of one selection call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredMessage<'a> {
    pub index: usize,
    pub message: &'a Message,
    pub score: f64,
}

/// Metadata describing the outcome of the selection process.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionMetadata {
    pub query: String,
    pub budget: usize,

    /// True when the conversation fit the budget and no scoring happened.
    pub fast_path: bool,

    pub messages_considered: usize,
    pub system_included: usize,
    pub starred_included: usize,
    pub regular_selected: usize,
    pub regular_excluded_by_budget: usize,
}

/// The messages to forward to the model, in conversation order.
///
/// Borrows from the caller's conversation; `indices[i]` is the original
/// position of `messages[i]`.
#[derive(Debug, Clone, Serialize)]
pub struct ContextBundle<'a> {
    pub messages: Vec<&'a Message>,
    pub indices: Vec<usize>,
    pub selection: SelectionMetadata,
}

impl<'a> ContextBundle<'a> {
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn into_messages(self) -> Vec<&'a Message> {
        self.messages
    }

    /// Owned copies for building an outbound request payload.
    pub fn to_owned_messages(&self) -> Vec<Message> {
        self.messages.iter().map(|&m| m.clone()).collect()
    }
}
