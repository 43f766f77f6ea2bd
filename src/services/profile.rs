use std::collections::BTreeMap;
use uuid::Uuid;

use crate::models::{Like, Recipe, TasteProfile};

/// Builds a taste profile from a user's likes.
///
/// Each like is resolved through `lookup`; likes that no longer resolve are
/// skipped. Returns `None` when there are no likes or none of them resolve.
/// A recipe liked twice counts twice.
pub fn build_profile<'a, F>(likes: &[Like], mut lookup: F) -> Option<TasteProfile>
where
    F: FnMut(Uuid) -> Option<&'a Recipe>,
{
    let mut resolved = 0usize;
    let mut total_cost = 0.0;
    let mut total_cooking_time = 0.0;
    let mut genre_counts: BTreeMap<&str, usize> = BTreeMap::new();

    for like in likes {
        let Some(recipe) = lookup(like.recipe_id) else {
            continue;
        };
        resolved += 1;
        total_cost += f64::from(recipe.cost_estimate);
        total_cooking_time += f64::from(recipe.cooking_time);
        *genre_counts.entry(recipe.genre.as_str()).or_default() += 1;
    }

    if resolved == 0 {
        return None;
    }

    let count = resolved as f64;
    let genre_ratio = genre_counts
        .into_iter()
        .map(|(genre, n)| (genre.to_string(), n as f64 / count))
        .collect();

    Some(TasteProfile {
        average_cost: total_cost / count,
        average_cooking_time: total_cooking_time / count,
        genre_ratio,
    })
}
