use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::conversation::Message;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConversationId(String);

impl ConversationId {
    pub fn new(id: impl Into<String>) -> Self {
        ConversationId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Content hash over the scoring-relevant state of a message sequence.
///
/// Any added, removed, edited or (un)starred message yields a different
/// version, which is what makes it usable as an IDF memoization key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConversationVersion(String);

impl ConversationVersion {
    pub fn from_messages(messages: &[Message]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update((messages.len() as u64).to_le_bytes());

        for message in messages {
            hasher.update(message.role.as_str().as_bytes());
            hasher.update([u8::from(message.starred)]);
            // Length prefix keeps ["ab", "c"] and ["a", "bc"] apart.
            hasher.update((message.content.len() as u64).to_le_bytes());
            hasher.update(message.content.as_bytes());
        }

        let hash = hasher.finalize();
        let hex = hex::encode(hash);

        ConversationVersion(format!("sha256:{hex}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
