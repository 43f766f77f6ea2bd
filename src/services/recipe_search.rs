use crate::{
    cached,
    db::{Cache, CacheKey},
    error::AppResult,
    models::{Ingredient, Recipe},
    services::{catalog::RecipeCatalog, text::FuzzyMatcher},
};

/// Keeps the candidates whose name fuzzily matches `query`, in candidate order.
///
/// An empty query matches nothing.
pub fn search<'n, T>(
    matcher: &FuzzyMatcher<'_>,
    query: &str,
    candidates: impl IntoIterator<Item = (&'n str, T)>,
) -> Vec<T> {
    let prepared = matcher.prepare(query);
    if prepared.is_empty() {
        return Vec::new();
    }

    candidates
        .into_iter()
        .filter(|(name, _)| matcher.matches_prepared(&prepared, name))
        .map(|(_, item)| item)
        .collect()
}

/// Searches published recipes by name
///
/// Results are cached per query when a cache is configured; cache writes
/// happen in the background.
pub async fn search_recipes(
    catalog: &dyn RecipeCatalog,
    cache: Option<&Cache>,
    cache_ttl: u64,
    matcher: &FuzzyMatcher<'_>,
    query: &str,
) -> AppResult<Vec<Recipe>> {
    let Some(cache) = cache else {
        return match_recipes(catalog, matcher, query).await;
    };

    let key = CacheKey::RecipeSearch(query.to_string());
    cached!(cache, key, cache_ttl, match_recipes(catalog, matcher, query))
}

async fn match_recipes(
    catalog: &dyn RecipeCatalog,
    matcher: &FuzzyMatcher<'_>,
    query: &str,
) -> AppResult<Vec<Recipe>> {
    let candidates = catalog.search_candidates().await?;
    let total = candidates.len();

    let matched: Vec<Recipe> = {
        let named = candidates.iter().map(|r| (r.name.as_str(), r));
        search(matcher, query, named).into_iter().cloned().collect()
    };

    tracing::info!(
        query = %query,
        catalog = catalog.name(),
        candidates = total,
        matched = matched.len(),
        "Recipe search completed"
    );

    Ok(matched)
}

/// Searches ingredients by name
pub async fn search_ingredients(
    catalog: &dyn RecipeCatalog,
    matcher: &FuzzyMatcher<'_>,
    query: &str,
) -> AppResult<Vec<Ingredient>> {
    let candidates = catalog.ingredient_candidates().await?;
    let named = candidates.iter().map(|i| (i.name.as_str(), i));
    let matched: Vec<Ingredient> = search(matcher, query, named).into_iter().cloned().collect();

    tracing::info!(
        query = %query,
        candidates = candidates.len(),
        matched = matched.len(),
        "Ingredient search completed"
    );

    Ok(matched)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::catalog::MockRecipeCatalog;
    use crate::services::text::Lexicon;
    use uuid::Uuid;

    fn recipe(name: &str) -> Recipe {
        Recipe {
            id: Uuid::new_v4(),
            name: name.to_string(),
            genre: "和食".to_string(),
            cost_estimate: 500,
            cooking_time: 20,
            image_url: None,
            summary: None,
        }
    }

    fn matcher() -> FuzzyMatcher<'static> {
        FuzzyMatcher::new(Lexicon::builtin())
    }

    #[test]
    fn test_search_keeps_candidate_order() {
        let candidates = vec![("親子丼", 1), ("カレーライス", 2), ("牛丼", 3), ("そぼろ丼", 4)];
        let found = search(&matcher(), "丼", candidates);
        assert_eq!(found, vec![1, 3, 4]);
    }

    #[test]
    fn test_search_empty_query_returns_nothing() {
        let candidates = vec![("牛丼", 1), ("スープ", 2)];
        assert!(search(&matcher(), "", candidates).is_empty());
    }

    #[test]
    fn test_search_no_match_is_empty_list() {
        let candidates = vec![("牛丼", 1)];
        assert!(search(&matcher(), "pizza", candidates).is_empty());
    }

    #[test]
    fn test_search_reading_finds_kanji_name() {
        let candidates = vec![("牛丼", "gyudon"), ("野菜スープ", "soup")];
        assert_eq!(search(&matcher(), "ぎゅうどん", candidates.clone()), vec!["gyudon"]);
        assert_eq!(search(&matcher(), "すーぷ", candidates), vec!["soup"]);
    }

    #[tokio::test]
    async fn test_search_recipes_without_cache() {
        let mut catalog = MockRecipeCatalog::new();
        catalog
            .expect_search_candidates()
            .times(1)
            .returning(|| Ok(vec![recipe("牛丼"), recipe("親子丼"), recipe("パスタ")]));
        catalog.expect_name().return_const("mock");

        let found = search_recipes(&catalog, None, 60, &matcher(), "ぎゅうどん")
            .await
            .unwrap();

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "牛丼");
    }

    #[tokio::test]
    async fn test_search_ingredients_matches_reading() {
        let mut catalog = MockRecipeCatalog::new();
        catalog.expect_ingredient_candidates().returning(|| {
            Ok(vec![
                Ingredient {
                    id: 1,
                    name: "玉ねぎ".to_string(),
                    genre: "野菜".to_string(),
                },
                Ingredient {
                    id: 2,
                    name: "人参".to_string(),
                    genre: "野菜".to_string(),
                },
            ])
        });

        let found = search_ingredients(&catalog, &matcher(), "にんじん").await.unwrap();

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, 2);
    }
}
