use super::lexicon::Lexicon;
use super::normalizer::TextNormalizer;
use super::synonyms::SynonymResolver;

/// Decides whether a search query matches a recipe or ingredient name.
///
/// Both sides go through synonym rewriting and then normalization; a match is
/// a substring hit in either direction, first on the whole bag of forms and
/// then token by token.
#[derive(Debug, Clone, Copy)]
pub struct FuzzyMatcher<'a> {
    synonyms: SynonymResolver<'a>,
    normalizer: TextNormalizer<'a>,
}

/// A query normalized once so it can be tested against many targets
#[derive(Debug, Clone)]
pub struct PreparedQuery {
    normalized: String,
}

impl PreparedQuery {
    pub fn is_empty(&self) -> bool {
        self.normalized.is_empty()
    }
}

impl<'a> FuzzyMatcher<'a> {
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self {
            synonyms: SynonymResolver::new(lexicon),
            normalizer: TextNormalizer::new(lexicon),
        }
    }

    pub fn matches(&self, query: &str, target: &str) -> bool {
        self.matches_prepared(&self.prepare(query), target)
    }

    pub fn prepare(&self, query: &str) -> PreparedQuery {
        PreparedQuery {
            normalized: self.normalized_form(query),
        }
    }

    pub fn matches_prepared(&self, query: &PreparedQuery, target: &str) -> bool {
        if query.is_empty() || target.is_empty() {
            return false;
        }
        forms_match(&query.normalized, &self.normalized_form(target))
    }

    fn normalized_form(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }
        self.normalizer.normalize(&self.synonyms.rewrite(text))
    }
}

fn forms_match(query: &str, target: &str) -> bool {
    if target.contains(query) || query.contains(target) {
        return true;
    }

    let target_tokens: Vec<&str> = target.split_whitespace().collect();
    query.split_whitespace().any(|q| {
        target_tokens
            .iter()
            .any(|t| t.contains(q) || q.contains(t))
    })
}
