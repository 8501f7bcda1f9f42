use crate::conversation::Message;

use super::idf::IdfMap;
use super::term_frequency::TermFrequencyMap;

pub trait Scorer {
    /// Score a message against an already tokenized query.
    fn score_terms(&self, query: &TermFrequencyMap, message: &Message, idf: &IdfMap) -> f64;

    fn score(&self, query: &str, message: &Message, idf: &IdfMap) -> f64 {
        self.score_terms(&TermFrequencyMap::from_text(query), message, idf)
    }
}

/// v0: unnormalized TF-IDF dot product.
///
/// `sum(query_tf[t] * message_tf[t] * idf[t])` over the query's terms. There
/// is no document-length normalization, so long messages that repeat a query
/// term score higher than short ones; keep it that way, ranking stability
/// across releases depends on it.
#[derive(Debug, Clone, Copy, Default)]
pub struct TfIdfScorer;

impl Scorer for TfIdfScorer {
    fn score_terms(&self, query: &TermFrequencyMap, message: &Message, idf: &IdfMap) -> f64 {
        if query.is_empty() {
            return 0.0;
        }

        let message_terms = TermFrequencyMap::from_text(&message.content);

        let score: f64 = query
            .iter()
            .map(|(term, frequency)| {
                let message_frequency = message_terms.get(term);
                f64::from(frequency) * f64::from(message_frequency) * idf.weight(term)
            })
            .sum();

        debug_assert!(score >= 0.0, "score {score} is negative");
        score
    }
}

pub fn score(query: &str, message: &Message, idf: &IdfMap) -> f64 {
    TfIdfScorer.score(query, message, idf)
}
