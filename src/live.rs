//! Relevance hints while the user is still typing.
//!
//! Purely advisory: these scores drive highlighting and never influence what
//! the selector forwards. Unlike selection, every message is scored,
//! including system and starred ones.

use std::collections::BTreeMap;

use tracing::trace;

use crate::cache::IdfCache;
use crate::conversation::Message;
use crate::scoring::{IdfMap, Scorer, TermFrequencyMap, TfIdfScorer};

/// Inputs shorter than this produce no scores. Length is measured after
/// trimming, in UTF-16 code units, the way the input field reports it.
pub const LIVE_SCORE_MIN_INPUT_CHARS: usize = 3;

#[derive(Debug, Clone, Default)]
pub struct LiveScoreAnnotator<S = TfIdfScorer> {
    scorer: S,
}

impl<S: Scorer> LiveScoreAnnotator<S> {
    pub fn new(scorer: S) -> Self {
        Self { scorer }
    }

    /// Score of each message against `partial_input`, keyed by message index
    /// and rounded to two decimals.
    pub fn scores(&self, conversation: &[Message], partial_input: &str) -> BTreeMap<usize, f64> {
        if suppressed(partial_input) {
            return BTreeMap::new();
        }
        let idf = IdfMap::for_regular(conversation);
        self.annotate(conversation, partial_input, &idf)
    }

    pub fn scores_cached(
        &self,
        cache: &mut IdfCache,
        conversation: &[Message],
        partial_input: &str,
    ) -> BTreeMap<usize, f64> {
        if suppressed(partial_input) {
            return BTreeMap::new();
        }
        let idf = cache.idf_for(conversation);
        self.annotate(conversation, partial_input, idf)
    }

    fn annotate(&self, conversation: &[Message], partial_input: &str, idf: &IdfMap) -> BTreeMap<usize, f64> {
        let query = TermFrequencyMap::from_text(partial_input);
        conversation
            .iter()
            .enumerate()
            .map(|(index, message)| {
                let score = self.scorer.score_terms(&query, message, idf);
                (index, round_for_display(score))
            })
            .collect()
    }
}

fn suppressed(partial_input: &str) -> bool {
    let units = partial_input.trim().encode_utf16().count();
    if units < LIVE_SCORE_MIN_INPUT_CHARS {
        trace!(units, "input too short for live scoring");
        return true;
    }
    false
}

fn round_for_display(score: f64) -> f64 {
    (score * 100.0).round() / 100.0
}

pub fn live_scores(conversation: &[Message], partial_input: &str) -> BTreeMap<usize, f64> {
    LiveScoreAnnotator::<TfIdfScorer>::default().scores(conversation, partial_input)
}
