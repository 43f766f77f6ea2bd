//! Script-aware fuzzy matching for recipe and ingredient names.
//!
//! Queries may be written in any mix of kanji, katakana, hiragana and Latin,
//! or in a colloquial spelling of a dish. Matching runs synonym rewriting,
//! then normalization into a bag of forms, then substring comparison.

pub mod lexicon;
pub mod matcher;
pub mod normalizer;
pub mod synonyms;
mod tables;

pub use lexicon::{DictionaryEntry, Lexicon, LexiconError, SynonymPair};
pub use matcher::{FuzzyMatcher, PreparedQuery};
pub use normalizer::{katakana_to_hiragana, TextNormalizer};
pub use synonyms::SynonymResolver;
