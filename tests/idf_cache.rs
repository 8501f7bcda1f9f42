use context_relevance::cache::IdfCache;
use context_relevance::conversation::{Conversation, ConversationId, Message};
use context_relevance::live::LiveScoreAnnotator;
use context_relevance::scoring::{IdfMap, TfIdfScorer};
use context_relevance::selection::ContextSelector;

fn make_conversation(len: usize) -> Conversation {
    let mut conversation = Conversation::new(ConversationId::new("conv-1"), "Cache test");
    for i in 0..len {
        conversation.push(Message::user(format!("entry {i} mentions token{} and shared words", i % 4)));
    }
    conversation
}

#[test]
fn unchanged_conversation_hits_the_cache() {
    let conversation = make_conversation(10);
    let mut cache = IdfCache::new();

    let first = cache.idf_for(conversation.messages()).clone();
    let second = cache.idf_for(conversation.messages()).clone();

    assert_eq!(first, second);
    assert_eq!(first, IdfMap::for_regular(conversation.messages()));
    assert_eq!(cache.misses(), 1);
    assert_eq!(cache.hits(), 1);
    assert_eq!(cache.version(), Some(&conversation.version()));
}

#[test]
fn every_mutation_invalidates() {
    let mut conversation = make_conversation(6);
    let mut cache = IdfCache::new();
    cache.idf_for(conversation.messages());

    conversation.push(Message::assistant("a brand new reply"));
    cache.idf_for(conversation.messages());
    assert_eq!(cache.misses(), 2);

    conversation.edit(0, "edited entry with fresh vocabulary").unwrap();
    cache.idf_for(conversation.messages());
    assert_eq!(cache.misses(), 3);

    conversation.toggle_star(1).unwrap();
    let idf = cache.idf_for(conversation.messages()).clone();
    assert_eq!(cache.misses(), 4);
    assert_eq!(idf.document_count(), 6, "starred message leaves the corpus");

    conversation.remove(2).unwrap();
    cache.idf_for(conversation.messages());
    assert_eq!(cache.misses(), 5);

    assert_eq!(cache.hits(), 0);
    assert_eq!(cache.idf_for(conversation.messages()), &IdfMap::for_regular(conversation.messages()));
    assert_eq!(cache.hits(), 1);
}

#[test]
fn clear_forces_rebuild() {
    let conversation = make_conversation(3);
    let mut cache = IdfCache::new();
    cache.idf_for(conversation.messages());
    cache.clear();
    assert!(cache.version().is_none());

    cache.idf_for(conversation.messages());
    assert_eq!(cache.misses(), 2);
}

#[test]
fn cached_selection_matches_uncached() {
    let conversation = make_conversation(40);
    let selector = ContextSelector::default();
    let mut cache = IdfCache::new();

    for query in ["token1 shared", "token3", "nothing matches"] {
        let plain = selector.select(conversation.messages(), query, 20);
        let cached = selector.select_cached(&mut cache, conversation.messages(), query, 20);
        assert_eq!(plain.indices, cached.indices);
        assert_eq!(plain.selection, cached.selection);
    }
    assert_eq!(cache.misses(), 1);
    assert_eq!(cache.hits(), 2);
}

#[test]
fn fast_path_does_not_touch_the_cache() {
    let conversation = make_conversation(5);
    let mut cache = IdfCache::new();

    ContextSelector::default().select_cached(&mut cache, conversation.messages(), "token0", 20);
    assert_eq!(cache.misses(), 0);
    assert_eq!(cache.hits(), 0);
}

#[test]
fn cached_live_scores_match_uncached() {
    let conversation = make_conversation(12);
    let annotator = LiveScoreAnnotator::new(TfIdfScorer);
    let mut cache = IdfCache::new();

    let plain = annotator.scores(conversation.messages(), "token2 words");
    let cached = annotator.scores_cached(&mut cache, conversation.messages(), "token2 words");
    assert_eq!(plain, cached);

    // suppressed input never reaches the cache
    assert!(annotator.scores_cached(&mut cache, conversation.messages(), "to").is_empty());
    assert_eq!(cache.misses(), 1);
    assert_eq!(cache.hits(), 0);
}
