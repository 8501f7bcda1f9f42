use context_relevance::conversation::{Message, Role};
use context_relevance::selection::ContextSelector;

const VOCABULARY: &[&str] = &[
    "parser", "lexer", "token", "cache", "socket", "thread", "borrow", "trait", "macro", "async",
    "future", "buffer", "codec", "index", "query", "a", "I", "it's", "x", "42",
];

/// Small deterministic generator so the invariant sweep is reproducible.
struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> u64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        self.0 >> 33
    }

    fn below(&mut self, n: usize) -> usize {
        (self.next() % n as u64) as usize
    }
}

fn generate_conversation(rng: &mut Lcg, len: usize) -> Vec<Message> {
    (0..len)
        .map(|_| {
            let words = 1 + rng.below(12);
            let content: Vec<&str> = (0..words).map(|_| VOCABULARY[rng.below(VOCABULARY.len())]).collect();
            let role = match rng.below(10) {
                0 => Role::System,
                1..=5 => Role::User,
                _ => Role::Assistant,
            };
            let mut message = Message::new(role, content.join(" "));
            message.starred = rng.below(8) == 0;
            message
        })
        .collect()
}

fn is_subsequence(selected: &[&Message], indices: &[usize], conversation: &[Message]) -> bool {
    indices.windows(2).all(|w| w[0] < w[1])
        && indices.len() == selected.len()
        && indices
            .iter()
            .zip(selected)
            .all(|(&i, &m)| std::ptr::eq(&conversation[i], m))
}

#[test]
fn invariant_selection_is_ordered_complete_and_bounded() {
    let mut rng = Lcg(0x5eed);
    let selector = ContextSelector::default();
    let queries = ["parser token", "borrow checker trait", "", "x", "cache cache socket 42"];

    for round in 0..40 {
        let len = rng.below(60);
        let conversation = generate_conversation(&mut rng, len);

        for budget in [0, 1, 5, 20, 59] {
            for query in queries {
                let bundle = selector.select(&conversation, query, budget);

                assert!(
                    is_subsequence(&bundle.messages, &bundle.indices, &conversation),
                    "round {round}: output must be an ordered subsequence"
                );

                for (index, message) in conversation.iter().enumerate() {
                    if !message.is_regular() {
                        assert!(
                            bundle.indices.contains(&index),
                            "round {round}: exempt message {index} missing"
                        );
                    }
                }

                let regular = bundle.messages.iter().filter(|m| m.is_regular()).count();
                if conversation.len() > budget {
                    assert!(regular <= budget, "round {round}: {regular} regular > budget {budget}");
                } else {
                    assert_eq!(bundle.len(), conversation.len(), "round {round}: fast path must be identity");
                }
                assert_eq!(regular, bundle.selection.regular_selected);
            }
        }
    }
}
