use std::collections::{BTreeMap, BTreeSet};

use crate::conversation::Message;

use super::tokenizer::terms;

/// Weight used for terms that never appeared in the IDF corpus.
pub const DEFAULT_IDF_WEIGHT: f64 = 1.0;

/// Smoothed inverse document frequency per term.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IdfMap {
    weights: BTreeMap<String, f64>,
    document_count: usize,
}

impl IdfMap {
    /// Build over an arbitrary document set.
    ///
    /// Each document contributes its *distinct* terms once. With `N`
    /// documents and a term present in `c` of them the weight is
    /// `ln((N + 1) / (c + 1)) + 1`, which stays finite and strictly positive.
    pub fn from_documents<'a, I>(documents: I) -> Self
    where
        I: IntoIterator<Item = &'a Message>,
    {
        let mut document_count = 0usize;
        let mut term_document_count: BTreeMap<String, usize> = BTreeMap::new();

        for message in documents {
            document_count += 1;
            let distinct: BTreeSet<String> = terms(&message.content).collect();
            for term in distinct {
                *term_document_count.entry(term).or_insert(0) += 1;
            }
        }

        let n = document_count as f64;
        let weights = term_document_count
            .into_iter()
            .map(|(term, count)| {
                let weight = ((n + 1.0) / (count as f64 + 1.0)).ln() + 1.0;
                (term, weight)
            })
            .collect();

        Self {
            weights,
            document_count,
        }
    }

    /// Build over the regular messages of a conversation: system messages and
    /// starred messages are excluded from the corpus.
    pub fn for_regular(conversation: &[Message]) -> Self {
        Self::from_documents(conversation.iter().filter(|m| m.is_regular()))
    }

    pub fn get(&self, term: &str) -> Option<f64> {
        self.weights.get(term).copied()
    }

    /// IDF for `term`, falling back to [`DEFAULT_IDF_WEIGHT`].
    pub fn weight(&self, term: &str) -> f64 {
        self.get(term).unwrap_or(DEFAULT_IDF_WEIGHT)
    }

    pub fn document_count(&self) -> usize {
        self.document_count
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}

pub fn compute_idf<'a, I>(documents: I) -> IdfMap
where
    I: IntoIterator<Item = &'a Message>,
{
    IdfMap::from_documents(documents)
}
