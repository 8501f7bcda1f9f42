use crate::conversation::Message;
use crate::types::context_bundle::ScoredMessage;

/// Original indices of a conversation split by how selection treats them.
///
/// A starred system message counts as system only, so every index lands in
/// exactly one group.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Partition {
    pub system: Vec<usize>,
    pub starred: Vec<usize>,
    pub regular: Vec<usize>,
}

pub fn partition(conversation: &[Message]) -> Partition {
    let mut groups = Partition::default();
    for (index, message) in conversation.iter().enumerate() {
        if message.is_system() {
            groups.system.push(index);
        } else if message.starred {
            groups.starred.push(index);
        } else {
            groups.regular.push(index);
        }
    }
    groups
}

pub struct BudgetResult {
    pub selected: Vec<usize>,
    pub regular_selected: usize,
    pub regular_excluded_by_budget: usize,
}

/// Keep the first `budget` entries of an already ranked list.
pub fn apply_budget(ranked: Vec<ScoredMessage<'_>>, budget: usize) -> BudgetResult {
    let total = ranked.len();
    let selected: Vec<usize> = ranked.into_iter().take(budget).map(|s| s.index).collect();
    let regular_selected = selected.len();

    BudgetResult {
        selected,
        regular_selected,
        regular_excluded_by_budget: total - regular_selected,
    }
}
