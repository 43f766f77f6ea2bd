use std::sync::Arc;

use crate::{
    db::Cache,
    services::{catalog::RecipeCatalog, text::FuzzyMatcher, text::Lexicon},
};

/// Shared application state
pub struct AppState {
    pub catalog: Arc<dyn RecipeCatalog>,
    /// Search result cache; `None` disables caching
    pub cache: Option<Cache>,
    pub search_cache_ttl: u64,
    pub lexicon: &'static Lexicon,
}

impl AppState {
    /// Creates state over a catalog, using the built-in lexicon
    pub fn new(catalog: Arc<dyn RecipeCatalog>, cache: Option<Cache>, search_cache_ttl: u64) -> Self {
        Self {
            catalog,
            cache,
            search_cache_ttl,
            lexicon: Lexicon::builtin(),
        }
    }

    pub fn matcher(&self) -> FuzzyMatcher<'static> {
        FuzzyMatcher::new(self.lexicon)
    }
}
