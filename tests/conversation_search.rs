use context_relevance::conversation::{Conversation, ConversationId, Message};
use context_relevance::search::{filter_conversations, search_score, TITLE_MATCH_WEIGHT};

fn make_conversation(id: &str, title: &str, contents: &[&str]) -> Conversation {
    let mut conversation = Conversation::new(ConversationId::new(id), title);
    for content in contents {
        conversation.push(Message::user(*content));
    }
    conversation
}

fn ids(conversations: &[&Conversation]) -> Vec<String> {
    conversations.iter().map(|c| c.id.as_str().to_string()).collect()
}

#[test]
fn blank_query_returns_everything_in_order() {
    let conversations = vec![
        make_conversation("a", "First", &[]),
        make_conversation("b", "Second", &[]),
    ];

    assert_eq!(ids(&filter_conversations(&conversations, "")), vec!["a", "b"]);
    assert_eq!(ids(&filter_conversations(&conversations, "  \t")), vec!["a", "b"]);
}

#[test]
fn title_matches_rank_ahead_of_content_matches() {
    let conversations = vec![
        make_conversation("content-heavy", "Weekend plans", &["dragon dragon dragon", "more dragon talk"]),
        make_conversation("title", "Dragon story", &[]),
        make_conversation("none", "Groceries", &["milk and eggs"]),
    ];

    let found = filter_conversations(&conversations, "Dragon");
    assert_eq!(ids(&found), vec!["title", "content-heavy"]);
}

#[test]
fn content_matches_sort_by_occurrence_count() {
    let conversations = vec![
        make_conversation("one", "A", &["the castle gate"]),
        make_conversation("three", "B", &["castle", "castle castle"]),
        make_conversation("two", "C", &["Castle walls", "a castle"]),
    ];

    let found = filter_conversations(&conversations, "castle");
    assert_eq!(ids(&found), vec!["three", "two", "one"]);
}

#[test]
fn score_weights_title_occurrences() {
    let conversation = make_conversation("x", "Rust rust", &["rust is fun", "RUST"]);
    let score = search_score(&conversation, &["rust".to_string()]);

    assert!(score.has_title_match);
    assert_eq!(score.score, 2 * TITLE_MATCH_WEIGHT + 2);
}

#[test]
fn multiple_terms_accumulate() {
    let conversation = make_conversation("x", "Notes", &["tokio runtime", "tokio spawn"]);
    let score = search_score(&conversation, &["tokio".to_string(), "spawn".to_string()]);

    assert!(!score.has_title_match);
    assert_eq!(score.score, 3);
}

#[test]
fn conversations_without_matches_are_dropped() {
    let conversations = vec![make_conversation("a", "Alpha", &["beta"])];
    assert!(filter_conversations(&conversations, "gamma").is_empty());
}
