//! Sidebar search over stored conversations.
//!
//! This is plain substring counting, not TF-IDF: a title occurrence is worth
//! [`TITLE_MATCH_WEIGHT`], an occurrence in any message is worth 1.

use std::cmp::Ordering;

use tracing::debug;

use crate::conversation::Conversation;

pub const TITLE_MATCH_WEIGHT: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchScore {
    pub score: usize,
    pub has_title_match: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct ScoredConversation<'a> {
    pub conversation: &'a Conversation,
    pub score: SearchScore,
}

/// Score one conversation against already lower-cased search terms.
pub fn search_score(conversation: &Conversation, terms: &[String]) -> SearchScore {
    let title = conversation.title.to_lowercase();
    let contents: Vec<String> = conversation
        .messages
        .iter()
        .map(|m| m.content.to_lowercase())
        .collect();

    let mut score = 0;
    let mut has_title_match = false;

    for term in terms.iter().filter(|t| !t.is_empty()) {
        let title_matches = title.matches(term.as_str()).count();
        has_title_match |= title_matches > 0;
        score += title_matches * TITLE_MATCH_WEIGHT;

        score += contents
            .iter()
            .map(|content| content.matches(term.as_str()).count())
            .sum::<usize>();
    }

    SearchScore {
        score,
        has_title_match,
    }
}

/// Conversations matching `query`, title matches first, then by score.
///
/// A blank query returns every conversation in its original order.
pub fn filter_conversations<'a>(conversations: &'a [Conversation], query: &str) -> Vec<&'a Conversation> {
    let query = query.trim();
    if query.is_empty() {
        return conversations.iter().collect();
    }

    let terms: Vec<String> = query
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect();

    let mut matching: Vec<ScoredConversation<'a>> = conversations
        .iter()
        .map(|conversation| ScoredConversation {
            conversation,
            score: search_score(conversation, &terms),
        })
        .filter(|scored| scored.score.score > 0)
        .collect();

    matching.sort_by(|a, b| match (a.score.has_title_match, b.score.has_title_match) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => b.score.score.cmp(&a.score.score),
    });

    debug!(
        conversations = conversations.len(),
        matches = matching.len(),
        "filtered conversations"
    );

    matching.into_iter().map(|scored| scored.conversation).collect()
}
