use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::message::{Message, Role};
use crate::types::identifiers::{ConversationId, ConversationVersion};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversationError {
    #[error("Message index {index} out of range for conversation of {len} messages")]
    MessageOutOfRange { index: usize, len: usize },

    #[error("Message {index} is a {role} message; only assistant messages can be retried")]
    NotAssistant { index: usize, role: Role },
}

/// An ordered chat history plus the bookkeeping the sidebar needs.
///
/// Message order is chronological and significant. Every mutation refreshes
/// `updated_at`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conversation {
    pub id: ConversationId,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub messages: Vec<Message>,
}

impl Conversation {
    pub fn new(id: ConversationId, title: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id,
            title: title.into(),
            created_at: now,
            updated_at: now,
            messages: Vec::new(),
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn last_message(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn version(&self) -> ConversationVersion {
        ConversationVersion::from_messages(&self.messages)
    }

    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
        self.touch();
    }

    pub fn rename(&mut self, title: impl Into<String>) {
        self.title = title.into();
        self.touch();
    }

    /// Replace the content of an existing message.
    ///
    /// An edited assistant reply becomes a user message, and any edit clears
    /// the star: the rewritten text is no longer what was pinned.
    pub fn edit(&mut self, index: usize, content: impl Into<String>) -> Result<(), ConversationError> {
        let message = self.message_mut(index)?;
        if message.role == Role::Assistant {
            message.role = Role::User;
        }
        message.content = content.into();
        message.starred = false;
        self.touch();
        Ok(())
    }

    /// Flip the starred flag and return the new state.
    pub fn toggle_star(&mut self, index: usize) -> Result<bool, ConversationError> {
        let message = self.message_mut(index)?;
        message.starred = !message.starred;
        let starred = message.starred;
        self.touch();
        Ok(starred)
    }

    pub fn remove(&mut self, index: usize) -> Result<Message, ConversationError> {
        self.check_index(index)?;
        let removed = self.messages.remove(index);
        self.touch();
        Ok(removed)
    }

    /// Drop the assistant reply at `index` and everything after it so the
    /// reply can be regenerated. Returns the dropped messages.
    pub fn truncate_for_retry(&mut self, index: usize) -> Result<Vec<Message>, ConversationError> {
        self.check_index(index)?;
        let role = self.messages[index].role;
        if role != Role::Assistant {
            return Err(ConversationError::NotAssistant { index, role });
        }

        let dropped = self.messages.split_off(index);
        self.touch();
        Ok(dropped)
    }

    fn check_index(&self, index: usize) -> Result<(), ConversationError> {
        if index < self.messages.len() {
            Ok(())
        } else {
            Err(ConversationError::MessageOutOfRange {
                index,
                len: self.messages.len(),
            })
        }
    }

    fn message_mut(&mut self, index: usize) -> Result<&mut Message, ConversationError> {
        let len = self.messages.len();
        self.messages
            .get_mut(index)
            .ok_or(ConversationError::MessageOutOfRange { index, len })
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
