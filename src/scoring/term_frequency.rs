use std::collections::BTreeMap;

use super::tokenizer::terms;

/// Occurrence count per term within one text.
///
/// Backed by a `BTreeMap` so iteration order, and therefore the order in
/// which floating point contributions are summed, never varies between runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TermFrequencyMap {
    counts: BTreeMap<String, u32>,
}

impl TermFrequencyMap {
    pub fn from_text(text: &str) -> Self {
        let mut counts = BTreeMap::new();
        for term in terms(text) {
            *counts.entry(term).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Count for `term`, 0 when absent.
    pub fn get(&self, term: &str) -> u32 {
        self.counts.get(term).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.counts.iter().map(|(term, &count)| (term.as_str(), count))
    }
}

/// Convenience wrapper matching the component's operation name.
pub fn compute_term_frequency(text: &str) -> TermFrequencyMap {
    TermFrequencyMap::from_text(text)
}
