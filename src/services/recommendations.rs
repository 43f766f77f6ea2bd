use std::collections::{BTreeMap, HashMap};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{InclusiveRange, NoProfileReason, Recipe, Recommendation, TasteProfile},
    services::{catalog::RecipeCatalog, profile::build_profile},
};

const LOWER_BOUND_FACTOR: f64 = 0.8;
const UPPER_BOUND_FACTOR: f64 = 1.2;

/// Generates personalized recipe recommendations
///
/// Builds a taste profile from the user's liked recipes, fetches every recipe
/// whose cost and cooking time sit within 20% of the profile's averages, and
/// keeps a genre-balanced subset of that pool in catalog order.
///
/// Likes are resolved one at a time; a like whose recipe is gone is skipped.
/// Catalog errors are returned as-is.
pub async fn recommend(catalog: &dyn RecipeCatalog, user_id: Uuid) -> AppResult<Recommendation> {
    let likes = catalog.likes_for(user_id).await?;
    if likes.is_empty() {
        tracing::info!(%user_id, "No liked recipes, skipping recommendation");
        return Ok(Recommendation::NoProfile(NoProfileReason::NoLikedRecipes));
    }

    let mut resolved: HashMap<Uuid, Recipe> = HashMap::new();
    for like in &likes {
        if resolved.contains_key(&like.recipe_id) {
            continue;
        }
        match catalog.find_recipe(like.recipe_id).await? {
            Some(recipe) => {
                resolved.insert(like.recipe_id, recipe);
            }
            None => {
                tracing::debug!(recipe_id = %like.recipe_id, "Liked recipe no longer exists");
            }
        }
    }

    let Some(profile) = build_profile(&likes, |id| resolved.get(&id)) else {
        tracing::info!(
            %user_id,
            likes = likes.len(),
            "No liked recipe could be resolved"
        );
        return Ok(Recommendation::NoProfile(
            NoProfileReason::NoValidLikedRecipes,
        ));
    };

    let cost = bounds(profile.average_cost);
    let cooking_time = bounds(profile.average_cooking_time);

    tracing::info!(
        %user_id,
        catalog = catalog.name(),
        average_cost = profile.average_cost,
        average_cooking_time = profile.average_cooking_time,
        genres = profile.genre_ratio.len(),
        "Built taste profile"
    );

    let pool = catalog.recipes_in_range(cost, cooking_time).await?;
    let pool_size = pool.len();
    let recipes = select(&profile, pool);

    tracing::info!(
        %user_id,
        pool_size,
        recommended = recipes.len(),
        "Recommendation completed"
    );

    Ok(Recommendation::Recommended(recipes))
}

/// `[floor(average * 0.8), floor(average * 1.2)]`
pub fn bounds(average: f64) -> InclusiveRange {
    InclusiveRange::new(
        (average * LOWER_BOUND_FACTOR).floor() as i32,
        (average * UPPER_BOUND_FACTOR).floor() as i32,
    )
}

/// Per-genre caps proportional to the profile's genre shares.
///
/// Every genre in the profile gets at least one slot, even when the pool is
/// empty.
pub fn genre_quotas(profile: &TasteProfile, pool_size: usize) -> BTreeMap<String, usize> {
    profile
        .genre_ratio
        .iter()
        .map(|(genre, ratio)| {
            let quota = (ratio * pool_size as f64).round().max(1.0) as usize;
            (genre.clone(), quota)
        })
        .collect()
}

/// Walks the pool in order, keeping each recipe while its genre is under quota.
/// Genres without a quota are never admitted.
pub fn admit(pool: Vec<Recipe>, quotas: &BTreeMap<String, usize>) -> Vec<Recipe> {
    let mut selected: HashMap<String, usize> = HashMap::new();

    pool.into_iter()
        .filter(|recipe| {
            let Some(&quota) = quotas.get(&recipe.genre) else {
                return false;
            };
            let count = selected.entry(recipe.genre.clone()).or_default();
            if *count < quota {
                *count += 1;
                true
            } else {
                false
            }
        })
        .collect()
}

/// Genre-balances a fetched pool against a profile
pub fn select(profile: &TasteProfile, pool: Vec<Recipe>) -> Vec<Recipe> {
    let quotas = genre_quotas(profile, pool.len());
    admit(pool, &quotas)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::models::Like;
    use crate::services::catalog::MockRecipeCatalog;

    fn recipe(name: &str, genre: &str, cost: i32, time: i32) -> Recipe {
        Recipe {
            id: Uuid::new_v4(),
            name: name.to_string(),
            genre: genre.to_string(),
            cost_estimate: cost,
            cooking_time: time,
            image_url: None,
            summary: None,
        }
    }

    fn profile(ratios: &[(&str, f64)]) -> TasteProfile {
        TasteProfile {
            average_cost: 600.0,
            average_cooking_time: 30.0,
            genre_ratio: ratios.iter().map(|(g, r)| (g.to_string(), *r)).collect(),
        }
    }

    fn names(recipes: &[Recipe]) -> Vec<&str> {
        recipes.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn test_bounds_floor_both_ends() {
        assert_eq!(bounds(600.0), InclusiveRange::new(480, 720));
        assert_eq!(bounds(30.0), InclusiveRange::new(24, 36));
        assert_eq!(bounds(333.0), InclusiveRange::new(266, 399));
    }

    #[test]
    fn test_single_genre_pool_is_fully_admitted() {
        let profile = profile(&[("Japanese", 1.0)]);
        let pool: Vec<Recipe> = (1..=5)
            .map(|i| recipe(&format!("j{}", i), "Japanese", 500 + i, 30))
            .collect();

        let quotas = genre_quotas(&profile, pool.len());
        assert_eq!(quotas["Japanese"], 5);

        let selected = select(&profile, pool);
        assert_eq!(names(&selected), vec!["j1", "j2", "j3", "j4", "j5"]);
    }

    #[test]
    fn test_quotas_cap_each_genre_in_pool_order() {
        let profile = profile(&[("A", 0.75), ("B", 0.25)]);
        let quotas = genre_quotas(&profile, 4);
        assert_eq!(quotas["A"], 3);
        assert_eq!(quotas["B"], 1);

        let pool = vec![
            recipe("a1", "A", 600, 30),
            recipe("a2", "A", 600, 30),
            recipe("b1", "B", 600, 30),
            recipe("a3", "A", 600, 30),
            recipe("b2", "B", 600, 30),
            recipe("a4", "A", 600, 30),
        ];

        let admitted = admit(pool, &quotas);
        assert_eq!(names(&admitted), vec!["a1", "a2", "b1", "a3"]);
    }

    #[test]
    fn test_quota_is_at_least_one() {
        let profile = profile(&[("Rare", 0.01), ("Common", 0.99)]);
        let quotas = genre_quotas(&profile, 3);
        assert_eq!(quotas["Rare"], 1);
        assert_eq!(quotas["Common"], 3);

        let empty = genre_quotas(&profile, 0);
        assert!(empty.values().all(|&q| q == 1));
    }

    #[test]
    fn test_genres_outside_profile_are_rejected() {
        let profile = profile(&[("A", 1.0)]);
        let pool = vec![recipe("x1", "X", 600, 30), recipe("a1", "A", 600, 30)];

        assert_eq!(names(&select(&profile, pool)), vec!["a1"]);
    }

    #[test]
    fn test_genre_without_pool_members_contributes_nothing() {
        let profile = profile(&[("A", 0.5), ("B", 0.5)]);
        let pool = vec![recipe("a1", "A", 600, 30), recipe("a2", "A", 600, 30)];

        assert_eq!(names(&select(&profile, pool)), vec!["a1"]);
    }

    #[tokio::test]
    async fn test_recommend_without_likes() {
        let mut catalog = MockRecipeCatalog::new();
        catalog.expect_likes_for().returning(|_| Ok(vec![]));
        catalog.expect_find_recipe().never();
        catalog.expect_recipes_in_range().never();

        let result = recommend(&catalog, Uuid::new_v4()).await.unwrap();
        assert_eq!(
            result,
            Recommendation::NoProfile(NoProfileReason::NoLikedRecipes)
        );
    }

    #[tokio::test]
    async fn test_recommend_with_only_deleted_likes() {
        let user_id = Uuid::new_v4();
        let mut catalog = MockRecipeCatalog::new();
        catalog.expect_likes_for().returning(move |_| {
            Ok(vec![
                Like::new(user_id, Uuid::new_v4()),
                Like::new(user_id, Uuid::new_v4()),
            ])
        });
        catalog.expect_find_recipe().times(2).returning(|_| Ok(None));
        catalog.expect_recipes_in_range().never();

        let result = recommend(&catalog, user_id).await.unwrap();
        assert_eq!(
            result,
            Recommendation::NoProfile(NoProfileReason::NoValidLikedRecipes)
        );
    }

    #[tokio::test]
    async fn test_recommend_fetches_pool_within_bounds() {
        let user_id = Uuid::new_v4();
        let liked = vec![
            recipe("liked1", "Japanese", 500, 20),
            recipe("liked2", "Japanese", 600, 30),
            recipe("liked3", "Japanese", 700, 40),
        ];
        let likes: Vec<Like> = liked.iter().map(|r| Like::new(user_id, r.id)).collect();
        let by_id: HashMap<Uuid, Recipe> = liked.iter().map(|r| (r.id, r.clone())).collect();

        let pool = vec![
            recipe("p1", "Japanese", 500, 25),
            recipe("p2", "Italian", 550, 30),
            recipe("p3", "Japanese", 700, 35),
        ];

        let mut catalog = MockRecipeCatalog::new();
        catalog
            .expect_likes_for()
            .returning(move |_| Ok(likes.clone()));
        catalog
            .expect_find_recipe()
            .times(3)
            .returning(move |id| Ok(by_id.get(&id).cloned()));
        catalog
            .expect_recipes_in_range()
            .withf(|cost, time| {
                *cost == InclusiveRange::new(480, 720) && *time == InclusiveRange::new(24, 36)
            })
            .times(1)
            .returning(move |_, _| Ok(pool.clone()));
        catalog.expect_name().return_const("mock");

        let result = recommend(&catalog, user_id).await.unwrap();
        let Recommendation::Recommended(recipes) = result else {
            panic!("expected recommendations");
        };
        assert_eq!(names(&recipes), vec!["p1", "p3"]);
    }

    #[tokio::test]
    async fn test_recommend_propagates_catalog_errors() {
        let mut catalog = MockRecipeCatalog::new();
        catalog
            .expect_likes_for()
            .returning(|_| Err(AppError::Internal("connection reset".to_string())));

        let result = recommend(&catalog, Uuid::new_v4()).await;
        assert!(matches!(result, Err(AppError::Internal(msg)) if msg == "connection reset"));
    }
}
