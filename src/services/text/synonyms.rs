use super::lexicon::{Lexicon, SynonymPair};

/// Rewrites dish names and cooking terms between their interchangeable
/// spellings.
///
/// Each pair is applied in both directions over the same buffer: every `a`
/// becomes `b`, then every `b` (including the fresh ones) becomes `a`. Pairs
/// interact with pairs later in the table, and search relies on that
/// over-matching, so the pairwise behavior is kept rather than collapsing
/// pairs into canonical clusters.
#[derive(Debug, Clone, Copy)]
pub struct SynonymResolver<'a> {
    lexicon: &'a Lexicon,
}

impl<'a> SynonymResolver<'a> {
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self { lexicon }
    }

    /// Dish synonyms first, then generic cooking terms
    pub fn rewrite(&self, text: &str) -> String {
        let rewritten = rewrite_pairs(text, self.lexicon.recipe_synonyms());
        rewrite_pairs(&rewritten, self.lexicon.cooking_terms())
    }
}

fn rewrite_pairs(text: &str, pairs: &[SynonymPair]) -> String {
    let mut buffer = text.to_string();
    for pair in pairs {
        if buffer.contains(pair.a.as_str()) {
            buffer = buffer.replace(pair.a.as_str(), &pair.b);
        }
        if buffer.contains(pair.b.as_str()) {
            buffer = buffer.replace(pair.b.as_str(), &pair.a);
        }
    }
    buffer
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver() -> SynonymResolver<'static> {
        SynonymResolver::new(Lexicon::builtin())
    }

    fn pair(a: &str, b: &str) -> SynonymPair {
        SynonymPair {
            a: a.to_string(),
            b: b.to_string(),
        }
    }

    #[test]
    fn test_both_spellings_converge() {
        let resolver = resolver();
        assert_eq!(resolver.rewrite("ぎゅうどん"), resolver.rewrite("牛丼"));
        assert_eq!(resolver.rewrite("スープ"), resolver.rewrite("すーぷ"));
        assert_eq!(resolver.rewrite("みそしる"), resolver.rewrite("味噌汁"));
    }

    #[test]
    fn test_unrelated_text_is_untouched() {
        assert_eq!(resolver().rewrite("pasta"), "pasta");
        assert_eq!(resolver().rewrite(""), "");
    }

    #[test]
    fn test_pair_applies_in_both_directions() {
        let pairs = vec![pair("丼", "どん")];
        assert_eq!(rewrite_pairs("牛丼", &pairs), "牛丼");
        assert_eq!(rewrite_pairs("ぎゅうどん", &pairs), "ぎゅう丼");
    }

    #[test]
    fn test_later_pairs_see_earlier_rewrites() {
        let pairs = vec![pair("x", "y"), pair("y", "z")];
        // x -> y -> x, then the second pair sees no y and turns nothing into z
        assert_eq!(rewrite_pairs("x", &pairs), "x");
        // y -> x under the first pair
        assert_eq!(rewrite_pairs("y", &pairs), "x");
        // z -> y under the second pair
        assert_eq!(rewrite_pairs("z", &pairs), "y");
    }
}
