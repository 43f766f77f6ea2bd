use std::collections::HashSet;
use std::sync::OnceLock;

use super::tables::{COOKING_TERMS, PHONETIC, RECIPE_SYNONYMS};

/// A written fragment and the phonetic spelling it expands to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryEntry {
    pub source: String,
    pub phonetic: String,
}

/// Two spellings that search treats as the same term
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynonymPair {
    pub a: String,
    pub b: String,
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum LexiconError {
    #[error("duplicate dictionary key: {0}")]
    DuplicateKey(String),

    #[error("empty dictionary key")]
    EmptyKey,
}

/// Immutable lookup tables shared by the normalizer and the synonym resolver.
///
/// Dictionary entries are held longest source first (ties in code-point
/// order), which is the order substitutions are applied in. Synonym pairs keep
/// their table order.
#[derive(Debug)]
pub struct Lexicon {
    phonetic: Vec<DictionaryEntry>,
    recipe_synonyms: Vec<SynonymPair>,
    cooking_terms: Vec<SynonymPair>,
}

static BUILTIN: OnceLock<Lexicon> = OnceLock::new();

impl Lexicon {
    /// Builds a lexicon from custom tables, rejecting empty or repeated keys
    pub fn new(
        phonetic: Vec<DictionaryEntry>,
        recipe_synonyms: Vec<SynonymPair>,
        cooking_terms: Vec<SynonymPair>,
    ) -> Result<Self, LexiconError> {
        let mut seen = HashSet::new();
        for entry in &phonetic {
            if entry.source.is_empty() {
                return Err(LexiconError::EmptyKey);
            }
            if !seen.insert(entry.source.as_str()) {
                return Err(LexiconError::DuplicateKey(entry.source.clone()));
            }
        }

        let pairs_have_empty_form = recipe_synonyms
            .iter()
            .chain(cooking_terms.iter())
            .any(|pair| pair.a.is_empty() || pair.b.is_empty());
        if pairs_have_empty_form {
            return Err(LexiconError::EmptyKey);
        }

        Ok(Self::assemble(phonetic, recipe_synonyms, cooking_terms))
    }

    /// The process-wide lexicon compiled from the built-in tables
    pub fn builtin() -> &'static Lexicon {
        BUILTIN.get_or_init(|| {
            let lexicon = Self::assemble(
                PHONETIC
                    .iter()
                    .map(|(source, phonetic)| DictionaryEntry {
                        source: source.to_string(),
                        phonetic: phonetic.to_string(),
                    })
                    .collect(),
                pairs(RECIPE_SYNONYMS),
                pairs(COOKING_TERMS),
            );
            tracing::debug!(
                dictionary_entries = lexicon.phonetic.len(),
                recipe_synonyms = lexicon.recipe_synonyms.len(),
                cooking_terms = lexicon.cooking_terms.len(),
                "Built-in lexicon loaded"
            );
            lexicon
        })
    }

    fn assemble(
        mut phonetic: Vec<DictionaryEntry>,
        recipe_synonyms: Vec<SynonymPair>,
        cooking_terms: Vec<SynonymPair>,
    ) -> Self {
        phonetic.sort_by(|x, y| {
            y.source
                .chars()
                .count()
                .cmp(&x.source.chars().count())
                .then_with(|| x.source.cmp(&y.source))
        });

        Self {
            phonetic,
            recipe_synonyms,
            cooking_terms,
        }
    }

    /// Dictionary entries in application order
    pub fn phonetic(&self) -> &[DictionaryEntry] {
        &self.phonetic
    }

    pub fn recipe_synonyms(&self) -> &[SynonymPair] {
        &self.recipe_synonyms
    }

    pub fn cooking_terms(&self) -> &[SynonymPair] {
        &self.cooking_terms
    }
}

fn pairs(table: &[(&str, &str)]) -> Vec<SynonymPair> {
    table
        .iter()
        .map(|(a, b)| SynonymPair {
            a: a.to_string(),
            b: b.to_string(),
        })
        .collect()
}
