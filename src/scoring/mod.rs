//! Term extraction and TF-IDF relevance scoring.

pub mod tokenizer;
pub mod term_frequency;
pub mod idf;
pub mod relevance;

pub use idf::{compute_idf, IdfMap, DEFAULT_IDF_WEIGHT};
pub use relevance::{score, Scorer, TfIdfScorer};
pub use term_frequency::{compute_term_frequency, TermFrequencyMap};
pub use tokenizer::{terms, Terms, MIN_TERM_LEN};
