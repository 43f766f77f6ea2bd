use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::Recipe;

/// Integer bounds, both ends inclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InclusiveRange {
    pub low: i32,
    pub high: i32,
}

impl InclusiveRange {
    pub fn new(low: i32, high: i32) -> Self {
        Self { low, high }
    }

    pub fn contains(&self, value: i32) -> bool {
        self.low <= value && value <= self.high
    }
}

/// Summary of the recipes a user has liked.
///
/// `genre_ratio` holds the share of resolved likes per genre name and sums to
/// 1.0 over the genres present. A profile always describes at least one
/// recipe; "no profile" is represented by the builder returning `None`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TasteProfile {
    pub average_cost: f64,
    pub average_cooking_time: f64,
    pub genre_ratio: BTreeMap<String, f64>,
}

/// Why a user has no taste profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoProfileReason {
    /// The user has not liked anything
    NoLikedRecipes,
    /// Every liked recipe has since been deleted or is otherwise unresolvable
    NoValidLikedRecipes,
}

impl NoProfileReason {
    pub fn message(&self) -> &'static str {
        match self {
            NoProfileReason::NoLikedRecipes => "No liked recipes found",
            NoProfileReason::NoValidLikedRecipes => "No valid liked recipes found",
        }
    }
}

/// Outcome of a recommendation request
#[derive(Debug, Clone, PartialEq)]
pub enum Recommendation {
    /// No profile could be built, so nothing was recommended
    NoProfile(NoProfileReason),
    /// Recipes admitted by the genre quotas; may legitimately be empty
    Recommended(Vec<Recipe>),
}

/// Wire shape of a recommendation response
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RecommendationResponse {
    NoProfile {
        reason: NoProfileReason,
        message: &'static str,
        recipes: Vec<Recipe>,
    },
    Recommended {
        recipes: Vec<Recipe>,
    },
}

impl From<Recommendation> for RecommendationResponse {
    fn from(recommendation: Recommendation) -> Self {
        match recommendation {
            Recommendation::NoProfile(reason) => RecommendationResponse::NoProfile {
                reason,
                message: reason.message(),
                recipes: Vec::new(),
            },
            Recommendation::Recommended(recipes) => RecommendationResponse::Recommended { recipes },
        }
    }
}
